//! Vocabulary riddles: describe a thing, the learner names it.

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::practice_engine::models::{AnswerKey, DifficultyLevel, Exercise, ExerciseTopic};
use crate::practice_engine::pool::ExercisePool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub glyph: String,
    /// The riddle text, phrased as "What is {clue}?".
    pub clue: String,
    pub explanation: String,
}

const ENTRIES: [(&str, &str, &str, &str); 8] = [
    (
        "elephant",
        "🐘",
        "large animal with a trunk",
        "An elephant is a large animal with a long trunk.",
    ),
    (
        "banana",
        "🍌",
        "yellow fruit that monkeys like",
        "A banana is a yellow fruit that monkeys enjoy eating.",
    ),
    (
        "rain",
        "🌧️",
        "water falling from the sky",
        "Rain is water that falls from clouds in the sky.",
    ),
    (
        "sun",
        "☀️",
        "bright light in the sky during the day",
        "The sun is the bright star that lights up our day.",
    ),
    (
        "ocean",
        "🌊",
        "large body of salt water",
        "An ocean is a very large body of salt water.",
    ),
    (
        "mountain",
        "⛰️",
        "very tall land formation",
        "A mountain is a very tall piece of land.",
    ),
    (
        "doctor",
        "👨‍⚕️",
        "person who helps sick people",
        "A doctor is someone who helps people when they are sick.",
    ),
    (
        "teacher",
        "👩‍🏫",
        "person who helps children learn",
        "A teacher is someone who helps children learn new things.",
    ),
];

static POOL: Lazy<ExercisePool<VocabularyEntry>> = Lazy::new(|| {
    let entries = ENTRIES
        .iter()
        .map(|&(word, glyph, clue, explanation)| VocabularyEntry {
            word: word.to_string(),
            glyph: glyph.to_string(),
            clue: clue.to_string(),
            explanation: explanation.to_string(),
        })
        .collect();
    ExercisePool::new(entries).expect("built-in vocabulary pool")
});

pub fn generate<R: Rng>(rng: &mut R, exercise_id: String) -> Exercise {
    let entry = POOL.pick(rng);
    Exercise {
        exercise_id,
        topic: ExerciseTopic::Vocabulary,
        difficulty: DifficultyLevel::Easy,
        question: format!("What is {}?", entry.clue),
        display: format!("{} {}", entry.glyph, entry.clue),
        answer: AnswerKey::Textual {
            accepted: vec![entry.word.clone()],
            correct_answer: format!("The answer is {}", entry.word),
        },
        explanation: Some(entry.explanation.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_entry_has_an_explanation() {
        let mut rng = StdRng::seed_from_u64(2);
        for i in 0..40 {
            let e = generate(&mut rng, format!("VO-{i:08X}"));
            assert!(e.explanation.as_deref().is_some_and(|x| !x.is_empty()));
        }
    }
}
