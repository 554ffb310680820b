//! Core practice engine — exercise generation, transcript evaluation, and
//! session accounting.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: topics, request/exercise structs, answer keys |
//! | `pool`       | Fixed exercise pools with validated construction and uniform pick |
//! | `transcript` | Normalization, word→number table, digit extraction, speech boundary |
//! | `evaluator`  | Pure `evaluate()`: verdict + feedback from exercise × transcript |
//! | `session`    | Score/streak aggregate and the Idle/AwaitingAnswer state machine |
//! | `generator`  | Single entry point `generate_exercise()` — dispatches to topics |
//! | `topics`     | Per-topic builders: four arithmetic, three English |

pub mod error;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod pool;
pub mod session;
pub mod topics;
pub mod transcript;

// Re-export the public API surface so callers can use
// `practice_engine::generate_exercise` without reaching into sub-modules.
pub use error::EngineError;
pub use evaluator::{evaluate, Evaluation, Verdict};
pub use generator::generate_exercise;
pub use models::{
    AnswerKey, DifficultyLevel, Exercise, ExerciseRequest, ExerciseTopic, Subject,
    TopicSelector,
};
pub use pool::ExercisePool;
pub use session::{PracticeSession, SessionState};
pub use transcript::{extract_number, normalize, ScriptedTranscripts, TranscriptSource};
