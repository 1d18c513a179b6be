//! Batch command
//!
//! Scores many independent rounds read from a file. Rounds share nothing, so
//! they are scored in parallel; results keep the input order.

use super::round::{RoundError, evaluate_round};
use crate::core::Score;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// One line of a batch file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based line number in the source file
    pub line: usize,
    /// Whitespace separated fields; a well-formed line has exactly two
    pub fields: Vec<String>,
}

impl Round {
    #[must_use]
    pub fn new(line: usize, secret: impl Into<String>, guess: impl Into<String>) -> Self {
        Self {
            line,
            fields: vec![secret.into(), guess.into()],
        }
    }

    fn evaluate(&self) -> Result<(Score, usize), RoundError> {
        match self.fields.as_slice() {
            [secret, guess] => evaluate_round(secret, guess),
            fields => {
                let err = RoundError::FieldCount {
                    found: fields.len(),
                };
                warn!(line = self.line, error = %err, "rejected round");
                Err(err)
            }
        }
    }
}

/// Outcome of one round in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub line: usize,
    pub result: Result<Score, RoundError>,
    /// Every position was a strong match
    pub solved: bool,
}

impl RoundOutcome {
    /// The score, or `None` if the round was rejected
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.result.as_ref().ok().copied()
    }
}

/// Aggregate counts for a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub scored: usize,
    pub rejected: usize,
    pub solved: usize,
    pub duration: Duration,
}

/// Result of a batch run
pub struct BatchResult {
    pub outcomes: Vec<RoundOutcome>,
    pub summary: BatchSummary,
}

impl BatchResult {
    #[must_use]
    pub fn all_scored(&self) -> bool {
        self.summary.rejected == 0
    }
}

/// Parse rounds from batch file contents
///
/// Each non-blank line holds a secret and a guess separated by whitespace.
/// Lines starting with `#` are comments. A line with the wrong number of
/// fields is kept so it is reported as rejected in order.
///
/// # Examples
/// ```
/// use mastermind::commands::parse_rounds;
///
/// let rounds = parse_rounds("# secret guess\n1,7,9,3,7 2,7,3,3,1\n\n7,7,3 7,3,3\n");
/// assert_eq!(rounds.len(), 2);
/// assert_eq!(rounds[0].line, 2);
/// assert_eq!(rounds[1].fields, ["7,7,3", "7,3,3"]);
/// ```
#[must_use]
pub fn parse_rounds(content: &str) -> Vec<Round> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            Some(Round {
                line: i + 1,
                fields: trimmed.split_whitespace().map(str::to_string).collect(),
            })
        })
        .collect()
}

/// Load rounds from a batch file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_rounds<P: AsRef<Path>>(path: P) -> io::Result<Vec<Round>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_rounds(&content))
}

/// Score every round, in parallel, preserving input order
#[must_use]
pub fn score_batch(rounds: &[Round]) -> BatchResult {
    let start = Instant::now();
    info!(rounds = rounds.len(), "scoring batch");

    let outcomes: Vec<RoundOutcome> = rounds
        .par_iter()
        .map(|round| {
            let evaluated = round.evaluate();
            let solved = matches!(evaluated, Ok((score, length)) if score.is_solved(length));

            RoundOutcome {
                line: round.line,
                result: evaluated.map(|(score, _)| score),
                solved,
            }
        })
        .collect();

    let mut summary = BatchSummary {
        total: outcomes.len(),
        ..BatchSummary::default()
    };
    for outcome in &outcomes {
        if outcome.result.is_ok() {
            summary.scored += 1;
        } else {
            summary.rejected += 1;
        }
        if outcome.solved {
            summary.solved += 1;
        }
    }
    summary.duration = start.elapsed();

    info!(
        scored = summary.scored,
        rejected = summary.rejected,
        elapsed = ?summary.duration,
        "batch complete"
    );

    BatchResult { outcomes, summary }
}
