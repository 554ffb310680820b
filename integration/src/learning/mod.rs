//! REST surface over the practice engine.
//!
//! Exercises are generated on demand and cached in memory by id so the
//! answer endpoints can re-evaluate against the full (answer-carrying)
//! exercise; clients only ever see the stripped public shape.

pub mod handler;
pub mod routes;
