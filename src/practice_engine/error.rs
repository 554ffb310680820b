//! Engine error types.
//!
//! The only fatal condition in the whole engine is a misconfigured exercise
//! pool, which is caught at construction time — never mid-session.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A pool was constructed with no entries. Treated as a configuration
    /// fault: built-in pools can never hit this, custom pools fail at load.
    #[error("exercise pool is empty")]
    EmptyPool,

    /// Custom pool data failed to parse.
    #[error("malformed pool data: {0}")]
    MalformedPool(#[from] serde_json::Error),

    /// An answer was submitted while no exercise was awaiting one.
    #[error("no exercise is awaiting an answer")]
    NoActiveExercise,
}
