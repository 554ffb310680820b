//! Transcript normalization and answer extraction.
//!
//! Speech-to-text hands us free text like "uhm the answer is twelve".
//! This module turns that into a candidate answer:
//!
//! 1. normalize — lower-case + trim
//! 2. scan for a decimal-digit run (takes precedence when present)
//! 3. otherwise scan tokens left-to-right against a fixed word→integer table
//!
//! Extraction is token-based, so "seventeen" maps to 17 and never to the
//! embedded "seven".

use once_cell::sync::Lazy;
use regex::Regex;

/// The fixed word→integer table: zero through twenty, the tens up to ninety,
/// and one hundred. Matches the vocabulary the speech prompt asks for.
pub const NUMBER_WORDS: [(&str, i64); 29] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("hundred", 100),
];

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Lower-case and trim a raw transcript.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Look up a single token in the number-word table.
pub fn word_to_number(token: &str) -> Option<i64> {
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, n)| n)
}

/// Extract a candidate numeric answer from a normalized transcript.
///
/// A digit run ("the answer is 12" → 12) wins over a number word; if neither
/// is present the answer is unrecognized and `None` is returned.
pub fn extract_number(transcript: &str) -> Option<i64> {
    if let Some(m) = DIGIT_RUN.find(transcript) {
        if let Ok(n) = m.as_str().parse::<i64>() {
            return Some(n);
        }
    }
    transcript
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .find_map(word_to_number)
}

// ---------------------------------------------------------------------------
// Transcript boundary
// ---------------------------------------------------------------------------

/// Boundary abstraction over speech input: anything that yields a sequence of
/// raw transcripts. Evaluation code only ever sees strings, so it stays
/// synchronously testable with no audio hardware behind it.
pub trait TranscriptSource {
    /// The next raw transcript, or `None` when the source is exhausted.
    fn next_transcript(&mut self) -> Option<String>;
}

/// Replays a fixed list of transcripts. Used by tests and demos in place of
/// a real speech recognizer.
pub struct ScriptedTranscripts {
    remaining: std::vec::IntoIter<String>,
}

impl ScriptedTranscripts {
    pub fn new<I, S>(transcripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedTranscripts {
            remaining: transcripts
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl TranscriptSource for ScriptedTranscripts {
    fn next_transcript(&mut self) -> Option<String> {
        self.remaining.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  SEVEN  "), "seven");
        assert_eq!(normalize("C A T"), "c a t");
    }

    #[test]
    fn bare_word_is_extracted() {
        assert_eq!(extract_number("seven"), Some(7));
    }

    #[test]
    fn digit_run_wins_over_words() {
        assert_eq!(extract_number("the answer is 12"), Some(12));
        // both present: digits take precedence
        assert_eq!(extract_number("seven no wait 12"), Some(12));
    }

    #[test]
    fn first_word_token_wins() {
        assert_eq!(extract_number("maybe five or six"), Some(5));
    }

    #[test]
    fn compound_words_are_not_split() {
        // token match, not substring: "seventeen" is 17, never 7
        assert_eq!(extract_number("seventeen"), Some(17));
        assert_eq!(extract_number("i think eighteen"), Some(18));
    }

    #[test]
    fn punctuation_around_tokens_is_ignored() {
        assert_eq!(extract_number("twelve!"), Some(12));
        assert_eq!(extract_number("it's ten, right?"), Some(10));
    }

    #[test]
    fn no_number_means_unrecognized() {
        assert_eq!(extract_number("i have no idea"), None);
        assert_eq!(extract_number(""), None);
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let mut src = ScriptedTranscripts::new(["seven", "twelve"]);
        assert_eq!(src.next_transcript().as_deref(), Some("seven"));
        assert_eq!(src.next_transcript().as_deref(), Some("twelve"));
        assert_eq!(src.next_transcript(), None);
    }
}
