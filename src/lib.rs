//! Mastermind round scorer
//!
//! Grades one guess against one secret code: how many digits are in the right
//! position (strong) and how many are right but misplaced (weak), counting
//! repeated digits correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Score};
//!
//! // Create codes
//! let secret: Code = "1,7,9,3,7".parse().unwrap();
//! let guess: Code = "2,7,3,3,1".parse().unwrap();
//!
//! // Score the round
//! let score = Score::calculate(&secret, &guess).unwrap();
//! assert_eq!(score.as_tuple(), (2, 1));
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
