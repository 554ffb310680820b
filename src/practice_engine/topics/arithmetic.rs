//! Arithmetic exercise builders.
//!
//! Addition, subtraction, and multiplication draw operands from
//! per-difficulty bands; subtraction always keeps the result non-negative.
//! Division draws from a fixed table of whole-result pairs so the spoken
//! answer is always a whole number.

use rand::Rng;

use crate::practice_engine::models::{
    AnswerKey, DifficultyLevel, Exercise, ExerciseTopic,
};

/// Division pairs (dividend, divisor) chosen so the quotient is whole.
const DIVISION_PAIRS: [(i64, i64); 14] = [
    (10, 2),
    (15, 3),
    (20, 4),
    (25, 5),
    (12, 3),
    (18, 6),
    (24, 8),
    (14, 2),
    (21, 3),
    (28, 4),
    (35, 5),
    (42, 6),
    (49, 7),
    (56, 8),
];

fn build(
    exercise_id: String,
    topic: ExerciseTopic,
    difficulty: DifficultyLevel,
    a: i64,
    b: i64,
    word: &str,
    symbol: &str,
    answer: i64,
) -> Exercise {
    Exercise {
        exercise_id,
        topic,
        difficulty,
        question: format!("What is {a} {word} {b}?"),
        display: format!("{a} {symbol} {b} = ?"),
        answer: AnswerKey::Numeric { value: answer },
        explanation: None,
    }
}

pub fn addition<R: Rng>(
    rng: &mut R,
    difficulty: DifficultyLevel,
    exercise_id: String,
) -> Exercise {
    let (a, b) = match difficulty {
        DifficultyLevel::Easy => (rng.gen_range(1..=10i64), rng.gen_range(1..=10i64)),
        DifficultyLevel::Medium => (rng.gen_range(10..=50i64), rng.gen_range(1..=20i64)),
    };
    build(exercise_id, ExerciseTopic::Addition, difficulty, a, b, "plus", "+", a + b)
}

pub fn subtraction<R: Rng>(
    rng: &mut R,
    difficulty: DifficultyLevel,
    exercise_id: String,
) -> Exercise {
    let (a, b) = match difficulty {
        DifficultyLevel::Easy => {
            let a = rng.gen_range(5..=20i64);
            (a, rng.gen_range(1..=a)) // result never negative
        }
        DifficultyLevel::Medium => {
            let a = rng.gen_range(20..=100i64);
            (a, rng.gen_range(1..=a.min(50)))
        }
    };
    build(exercise_id, ExerciseTopic::Subtraction, difficulty, a, b, "minus", "-", a - b)
}

pub fn multiplication<R: Rng>(
    rng: &mut R,
    difficulty: DifficultyLevel,
    exercise_id: String,
) -> Exercise {
    let (a, b) = match difficulty {
        DifficultyLevel::Easy => (rng.gen_range(1..=5i64), rng.gen_range(1..=10i64)),
        DifficultyLevel::Medium => (rng.gen_range(2..=12i64), rng.gen_range(2..=12i64)),
    };
    build(exercise_id, ExerciseTopic::Multiplication, difficulty, a, b, "times", "×", a * b)
}

pub fn division<R: Rng>(
    rng: &mut R,
    difficulty: DifficultyLevel,
    exercise_id: String,
) -> Exercise {
    // Operands come from the fixed table regardless of difficulty; the band
    // only labels the exercise.
    let (a, b) = DIVISION_PAIRS[rng.gen_range(0..DIVISION_PAIRS.len())];
    build(exercise_id, ExerciseTopic::Division, difficulty, a, b, "divided by", "÷", a / b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn subtraction_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        for i in 0..200 {
            let difficulty = if i % 2 == 0 {
                DifficultyLevel::Easy
            } else {
                DifficultyLevel::Medium
            };
            let e = subtraction(&mut rng, difficulty, format!("SU-{i:08X}"));
            let AnswerKey::Numeric { value } = e.answer else {
                panic!("subtraction must be numeric");
            };
            assert!(value >= 0, "negative result in {}", e.display);
        }
    }

    #[test]
    fn division_always_divides_evenly() {
        let mut rng = StdRng::seed_from_u64(9);
        for i in 0..100 {
            let e = division(&mut rng, DifficultyLevel::Easy, format!("DV-{i:08X}"));
            // reconstruct operands from the display "a ÷ b = ?"
            let parts: Vec<&str> = e.display.split_whitespace().collect();
            let a: i64 = parts[0].parse().unwrap();
            let b: i64 = parts[2].parse().unwrap();
            let AnswerKey::Numeric { value } = e.answer else {
                panic!("division must be numeric");
            };
            assert_eq!(a % b, 0, "uneven pair in {}", e.display);
            assert_eq!(value, a / b);
        }
    }

    #[test]
    fn easy_addition_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..100 {
            let e = addition(&mut rng, DifficultyLevel::Easy, format!("AD-{i:08X}"));
            let AnswerKey::Numeric { value } = e.answer else {
                panic!("addition must be numeric");
            };
            assert!((2..=20).contains(&value), "out of band: {}", e.display);
        }
    }
}
