use rand::Rng;
use serde::de::DeserializeOwned;

use crate::practice_engine::error::EngineError;

/// A fixed pool of exercise source entries that supports uniform-random
/// selection.
///
/// Pools are validated at construction: an empty pool is a configuration
/// fault and is rejected up front, so `pick` can never fail at practice time.
pub struct ExercisePool<T> {
    entries: Vec<T>,
}

impl<T> ExercisePool<T> {
    pub fn new(entries: Vec<T>) -> Result<Self, EngineError> {
        if entries.is_empty() {
            return Err(EngineError::EmptyPool);
        }
        Ok(ExercisePool { entries })
    }

    /// Pick one entry uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &T {
        // entries is non-empty by construction
        &self.entries[rng.gen_range(0..self.entries.len())]
    }

    /// Pick uniformly among entries matching `filter`; `None` if nothing
    /// matches.
    pub fn pick_where<R: Rng>(&self, rng: &mut R, filter: impl Fn(&T) -> bool) -> Option<&T> {
        let matching: Vec<&T> = self.entries.iter().filter(|e| filter(e)).collect();
        if matching.is_empty() {
            return None;
        }
        Some(matching[rng.gen_range(0..matching.len())])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // always false: empty pools are rejected at construction
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: DeserializeOwned> ExercisePool<T> {
    /// Load a custom pool from a JSON array. Empty or malformed data is a
    /// startup fault, surfaced as an error here rather than later.
    pub fn from_json(data: &str) -> Result<Self, EngineError> {
        let entries: Vec<T> = serde_json::from_str(data)?;
        ExercisePool::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_pool_is_rejected() {
        let pool: Result<ExercisePool<u32>, _> = ExercisePool::new(vec![]);
        assert!(matches!(pool, Err(EngineError::EmptyPool)));
    }

    #[test]
    fn pick_is_deterministic_with_seed() {
        let pool = ExercisePool::new((0..50u32).collect()).unwrap();
        let picks = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10).map(|_| *pool.pick(&mut rng)).collect()
        };
        assert_eq!(picks(7), picks(7));
        assert_ne!(picks(7), picks(8));
    }

    #[test]
    fn pick_where_respects_filter() {
        let pool = ExercisePool::new((0..20u32).collect()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let n = pool.pick_where(&mut rng, |n| n % 2 == 0).unwrap();
            assert_eq!(n % 2, 0);
        }
        assert!(pool.pick_where(&mut rng, |n| *n > 100).is_none());
    }

    #[test]
    fn from_json_rejects_empty_array() {
        let pool: Result<ExercisePool<u32>, _> = ExercisePool::from_json("[]");
        assert!(matches!(pool, Err(EngineError::EmptyPool)));
    }

    #[test]
    fn from_json_rejects_garbage() {
        let pool: Result<ExercisePool<u32>, _> = ExercisePool::from_json("not json");
        assert!(matches!(pool, Err(EngineError::MalformedPool(_))));
    }
}
