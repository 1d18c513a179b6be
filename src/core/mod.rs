//! Core domain types for Mastermind
//!
//! This module contains the code and score types and the scoring function.
//! Everything here is pure: no I/O, no logging, no global state.

mod code;
mod score;

pub use code::{Code, CodeError, DIGIT_MAX, DIGIT_MIN};
pub use score::{Score, ScoreError, score_symbols};
