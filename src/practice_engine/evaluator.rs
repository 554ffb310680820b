//! Answer evaluation: transcript in, verdict + feedback out.
//!
//! `evaluate` is a pure function — it never touches session counters. Callers
//! apply the returned verdict to their [`SessionState`] explicitly, so there
//! is no hidden mutation anywhere in the engine.
//!
//! [`SessionState`]: crate::practice_engine::session::SessionState

use serde::{Deserialize, Serialize};

use crate::practice_engine::models::{AnswerKey, Exercise};
use crate::practice_engine::transcript::{extract_number, normalize};

/// Outcome of one evaluation.
///
/// `Unrecognized` is not a wrong answer: no candidate answer could be
/// extracted at all, so the learner is re-asked without penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
    Unrecognized,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    /// Spoken back to the learner. Deterministic given the verdict and the
    /// exercise's stored answer/explanation text.
    pub feedback: String,
}

/// Evaluate a raw speech transcript against an exercise.
pub fn evaluate(exercise: &Exercise, raw_transcript: &str) -> Evaluation {
    let transcript = normalize(raw_transcript);

    let evaluation = match &exercise.answer {
        AnswerKey::Numeric { value } => evaluate_numeric(*value, &transcript),
        AnswerKey::Textual {
            accepted,
            correct_answer,
        } => evaluate_textual(accepted, correct_answer, exercise.explanation.as_deref(), &transcript),
    };

    tracing::debug!(
        exercise_id = %exercise.exercise_id,
        verdict = ?evaluation.verdict,
        "evaluated transcript"
    );
    evaluation
}

fn evaluate_numeric(expected: i64, transcript: &str) -> Evaluation {
    match extract_number(transcript) {
        None => Evaluation {
            verdict: Verdict::Unrecognized,
            feedback: "I didn't understand your answer. Please say a number.".to_string(),
        },
        Some(n) if n == expected => Evaluation {
            verdict: Verdict::Correct,
            feedback: format!("Excellent! {n} is correct! Let's try another one."),
        },
        Some(_) => Evaluation {
            verdict: Verdict::Incorrect,
            feedback: format!(
                "Not quite right. The correct answer is {expected}. Let's try another problem."
            ),
        },
    }
}

fn evaluate_textual(
    accepted: &[String],
    correct_answer: &str,
    explanation: Option<&str>,
    transcript: &str,
) -> Evaluation {
    // Containment, not equality: "i think it's c a t" passes for "c a t".
    let hit = accepted
        .iter()
        .any(|a| transcript.contains(&a.to_lowercase()));

    if hit {
        let feedback = match explanation {
            Some(e) => format!("Excellent! That's correct! {e} Let's try another one."),
            None => "Excellent! That's correct! Let's try another one.".to_string(),
        };
        Evaluation {
            verdict: Verdict::Correct,
            feedback,
        }
    } else {
        Evaluation {
            verdict: Verdict::Incorrect,
            feedback: format!("{correct_answer} Let's try another one."),
        }
    }
}
