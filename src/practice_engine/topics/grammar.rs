//! Grammar fill-ins: to-be forms and simple plurals.

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::practice_engine::models::{AnswerKey, DifficultyLevel, Exercise, ExerciseTopic};
use crate::practice_engine::pool::ExercisePool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarEntry {
    /// On-screen form, e.g. "She ___ my friend" or "cat → ?".
    pub display: String,
    pub accepted: Vec<String>,
    /// Full sentence read out on a wrong answer.
    pub correct_answer: String,
}

const ENTRIES: [(&str, &str, &str); 8] = [
    ("I ___ a student", "am", "The correct answer is 'am' - I am a student"),
    ("She ___ my friend", "is", "The correct answer is 'is' - She is my friend"),
    ("They ___ playing", "are", "The correct answer is 'are' - They are playing"),
    ("We ___ happy", "are", "The correct answer is 'are' - We are happy"),
    ("He ___ tall", "is", "The correct answer is 'is' - He is tall"),
    ("cat → ?", "cats", "The plural of cat is cats"),
    ("dog → ?", "dogs", "The plural of dog is dogs"),
    ("book → ?", "books", "The plural of book is books"),
];

static POOL: Lazy<ExercisePool<GrammarEntry>> = Lazy::new(|| {
    let entries = ENTRIES
        .iter()
        .map(|&(display, accepted, correct_answer)| GrammarEntry {
            display: display.to_string(),
            accepted: vec![accepted.to_string()],
            correct_answer: correct_answer.to_string(),
        })
        .collect();
    ExercisePool::new(entries).expect("built-in grammar pool")
});

pub fn generate<R: Rng>(rng: &mut R, exercise_id: String) -> Exercise {
    let entry = POOL.pick(rng);
    Exercise {
        exercise_id,
        topic: ExerciseTopic::Grammar,
        difficulty: DifficultyLevel::Easy,
        question: format!("Fill in the blank or complete: {}", entry.display),
        display: entry.display.clone(),
        answer: AnswerKey::Textual {
            accepted: entry.accepted.clone(),
            correct_answer: entry.correct_answer.clone(),
        },
        explanation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn accepted_answers_are_single_short_words() {
        let mut rng = StdRng::seed_from_u64(4);
        for i in 0..40 {
            let e = generate(&mut rng, format!("GR-{i:08X}"));
            let AnswerKey::Textual { accepted, .. } = &e.answer else {
                panic!("grammar must be textual");
            };
            assert_eq!(accepted.len(), 1);
            assert!(!accepted[0].contains(' '));
        }
    }
}
