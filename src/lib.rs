//! # edu_drill_gen
//!
//! A fully offline, deterministic practice-exercise engine for voice-driven
//! primary-school math and English drills.
//!
//! This library generates randomised exercises across 7 topics (four
//! arithmetic operations plus spelling, vocabulary, and grammar), turns raw
//! speech-to-text transcripts into candidate answers, and produces a
//! correct/incorrect/unrecognized verdict with spoken feedback — updating an
//! explicit score/streak session aggregate along the way.
//!
//! ## How it works
//!
//! 1. Create an [`ExerciseRequest`] with a topic (or subject), difficulty,
//!    and optional RNG seed.
//! 2. Call [`generate_exercise`] — arithmetic topics draw fresh operands per
//!    difficulty band, English topics pick uniformly from fixed pools. The
//!    returned [`Exercise`] carries the spoken prompt, on-screen display, and
//!    a tagged answer key (numeric or textual).
//! 3. Feed a transcript to [`evaluate`] (or drive a [`PracticeSession`]) —
//!    the engine extracts a number (word table or digit run, digits win) or
//!    does lenient substring matching for textual answers, and hands back a
//!    [`Verdict`] plus feedback text.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same exercise every time — useful for tests and progress tracking.
//! - **Unrecognized is not wrong**: when no answer can be extracted from the
//!   transcript the learner is re-asked without touching score or streak.
//! - **Pure evaluation**: `evaluate` has no side effects; verdicts are
//!   applied to an explicit [`SessionState`], never to hidden globals.
//! - **Speech boundary**: [`TranscriptSource`] decouples evaluation from any
//!   real audio; [`ScriptedTranscripts`] replays fixed input for tests.
//!
//! ## Quick start
//!
//! ```rust
//! use edu_drill_gen::{
//!     generate_exercise, ExerciseRequest, ExerciseTopic, PracticeSession, Subject,
//!     Verdict,
//! };
//!
//! // Minimal — only a topic is required (defaults: Easy, entropy seed):
//! let exercise = generate_exercise(ExerciseRequest::new(ExerciseTopic::Addition));
//! println!("Q: {}", exercise.question);
//!
//! // Full control — seeded, so the exercise is reproducible:
//! let exercise = generate_exercise(ExerciseRequest {
//!     selector: ExerciseTopic::Spelling.into(),
//!     difficulty: edu_drill_gen::DifficultyLevel::Easy,
//!     rng_seed: Some(42),
//! });
//!
//! // Drive a whole session:
//! let mut session = PracticeSession::new();
//! session.begin(exercise);
//! let eval = session.answer("i think it's c a t").unwrap();
//! if eval.verdict == Verdict::Correct {
//!     println!("streak: {}", session.state().streak);
//! }
//!
//! // Random topic from a subject:
//! let math = generate_exercise(ExerciseRequest::new(Subject::Math));
//! println!("Random math drill: {}", math.topic);
//! ```

pub mod practice_engine;
pub mod web_adapter;

// Convenience re-exports so callers can use `edu_drill_gen::generate_exercise`
// directly without reaching into `practice_engine::`.
pub use practice_engine::{
    evaluate, extract_number, generate_exercise, normalize, AnswerKey, DifficultyLevel,
    EngineError, Evaluation, Exercise, ExercisePool, ExerciseRequest, ExerciseTopic,
    PracticeSession, ScriptedTranscripts, SessionState, Subject, TopicSelector,
    TranscriptSource, Verdict,
};
pub use web_adapter::{to_answer_response, to_client_exercise};
