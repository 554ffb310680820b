//! Per-topic exercise builders.
//!
//! Arithmetic topics generate fresh operands per request; the English topics
//! pick uniformly from fixed built-in pools. Every builder takes a seeded RNG
//! and a pre-made exercise id, and is dispatched from `generator.rs`.

pub mod arithmetic;
pub mod grammar;
pub mod spelling;
pub mod vocabulary;
