//! Spelling exercises: hear a word, spell it out loud.
//!
//! Accepted answers cover the three ways speech-to-text renders a spelled
//! word: run together ("cat"), spaced letters ("c a t"), and hyphenated
//! ("c-a-t").

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::practice_engine::models::{AnswerKey, DifficultyLevel, Exercise, ExerciseTopic};
use crate::practice_engine::pool::ExercisePool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingEntry {
    pub word: String,
    /// Emoji shown next to the word on screen.
    pub glyph: String,
}

const WORDS: [(&str, &str); 20] = [
    ("CAT", "🐱"),
    ("DOG", "🐶"),
    ("BIRD", "🐦"),
    ("FISH", "🐠"),
    ("BOOK", "📖"),
    ("TREE", "🌳"),
    ("HOUSE", "🏠"),
    ("CAR", "🚗"),
    ("BALL", "⚽"),
    ("APPLE", "🍎"),
    ("FLOWER", "🌸"),
    ("MOON", "🌙"),
    ("SUN", "☀️"),
    ("WATER", "💧"),
    ("HAPPY", "😊"),
    ("SCHOOL", "🏫"),
    ("FRIEND", "👫"),
    ("FAMILY", "👨‍👩‍👧‍👦"),
    ("RAINBOW", "🌈"),
    ("BUTTERFLY", "🦋"),
];

static POOL: Lazy<ExercisePool<SpellingEntry>> = Lazy::new(|| {
    let entries = WORDS
        .iter()
        .map(|&(word, glyph)| SpellingEntry {
            word: word.to_string(),
            glyph: glyph.to_string(),
        })
        .collect();
    // WORDS is statically non-empty
    ExercisePool::new(entries).expect("built-in spelling pool")
});

/// Spaced ("c a t") and hyphenated ("c-a-t") letter renderings of a word.
fn letter_variants(word: &str) -> (String, String) {
    let letters: Vec<String> = word.chars().map(|c| c.to_string()).collect();
    (letters.join(" "), letters.join("-"))
}

pub fn generate<R: Rng>(rng: &mut R, exercise_id: String) -> Exercise {
    let entry = POOL.pick(rng);
    exercise_from(entry, exercise_id)
}

pub(crate) fn exercise_from(entry: &SpellingEntry, exercise_id: String) -> Exercise {
    let lower = entry.word.to_lowercase();
    let (spaced, hyphenated) = letter_variants(&lower);
    let spelled_out = entry
        .word
        .to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("-");
    let difficulty = if entry.word.chars().count() <= 4 {
        DifficultyLevel::Easy
    } else {
        DifficultyLevel::Medium
    };

    Exercise {
        exercise_id,
        topic: ExerciseTopic::Spelling,
        difficulty,
        question: format!("How do you spell the word {}?", entry.word),
        display: format!("{} {}", entry.glyph, entry.word),
        answer: AnswerKey::Textual {
            accepted: vec![lower, spaced, hyphenated],
            correct_answer: format!("The correct spelling is {spelled_out}"),
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
    fn accepted_answers_cover_all_spoken_forms() {
        let entry = SpellingEntry {
            word: "CAT".to_string(),
            glyph: "🐱".to_string(),
        };
        let e = exercise_from(&entry, "SP-00000001".to_string());
        let AnswerKey::Textual { accepted, correct_answer } = &e.answer else {
            panic!("spelling must be textual");
        };
        assert_eq!(accepted, &["cat", "c a t", "c-a-t"]);
        assert_eq!(correct_answer, "The correct spelling is C-A-T");
    }

    #[test]
    fn short_words_are_easy_long_words_medium() {
        let mut rng = StdRng::seed_from_u64(5);
        for i in 0..60 {
            let e = generate(&mut rng, format!("SP-{i:08X}"));
            let word = e.display.split_whitespace().last().unwrap();
            let expected = if word.chars().count() <= 4 {
                DifficultyLevel::Easy
            } else {
                DifficultyLevel::Medium
            };
            assert_eq!(e.difficulty, expected, "wrong band for {word}");
        }
    }
}
