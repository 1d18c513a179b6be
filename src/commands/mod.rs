//! Command implementations

pub mod batch;
pub mod round;

pub use batch::{
    BatchResult, BatchSummary, Round, RoundOutcome, load_rounds, parse_rounds, score_batch,
};
pub use round::{RoundError, Side, score_round};
