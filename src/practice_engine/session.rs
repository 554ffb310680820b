//! Session accounting and the practice state machine.
//!
//! Counters live in an explicit [`SessionState`] aggregate that verdicts are
//! applied to — never in hidden globals. [`PracticeSession`] layers the
//! Idle → AwaitingAnswer → verdict → Idle flow on top, with `Unrecognized`
//! looping back to the same exercise.

use serde::{Deserialize, Serialize};

use crate::practice_engine::error::EngineError;
use crate::practice_engine::evaluator::{evaluate, Evaluation, Verdict};
use crate::practice_engine::models::Exercise;
use crate::practice_engine::transcript::TranscriptSource;

/// Score and streak counters for one practice session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u32,
    pub streak: u32,
}

impl SessionState {
    /// Apply a verdict: correct bumps both counters, incorrect resets the
    /// streak only, unrecognized touches nothing.
    pub fn apply(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => {
                self.score += 1;
                self.streak += 1;
            }
            Verdict::Incorrect => self.streak = 0,
            Verdict::Unrecognized => {}
        }
    }
}

/// One learner's in-memory practice session: current exercise + counters.
#[derive(Debug, Default)]
pub struct PracticeSession {
    state: SessionState,
    current: Option<Exercise>,
}

impl PracticeSession {
    pub fn new() -> Self {
        PracticeSession::default()
    }

    /// Put an exercise in front of the learner. Any pending exercise is
    /// discarded — requesting a new one cancels the old.
    pub fn begin(&mut self, exercise: Exercise) {
        if let Some(old) = &self.current {
            tracing::debug!(discarded = %old.exercise_id, "replacing pending exercise");
        }
        self.current = Some(exercise);
    }

    pub fn current(&self) -> Option<&Exercise> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Evaluate one transcript against the current exercise and apply the
    /// verdict. `Correct`/`Incorrect` retire the exercise; `Unrecognized`
    /// keeps it in place for a re-ask.
    pub fn answer(&mut self, raw_transcript: &str) -> Result<Evaluation, EngineError> {
        let exercise = self.current.as_ref().ok_or(EngineError::NoActiveExercise)?;
        let evaluation = evaluate(exercise, raw_transcript);

        self.state.apply(evaluation.verdict);
        if evaluation.verdict != Verdict::Unrecognized {
            self.current = None;
        }
        Ok(evaluation)
    }

    /// Pull one transcript from a [`TranscriptSource`] and evaluate it.
    /// `Ok(None)` means the source is exhausted.
    pub fn answer_from(
        &mut self,
        source: &mut impl TranscriptSource,
    ) -> Result<Option<Evaluation>, EngineError> {
        match source.next_transcript() {
            Some(raw) => self.answer(&raw).map(Some),
            None => Ok(None),
        }
    }
}
