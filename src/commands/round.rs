//! Single round command
//!
//! Parses a secret and a guess from their text form and scores them.

use crate::core::{Code, CodeError, Score, ScoreError};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Which input of a round a format error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Secret,
    Guess,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret => f.write_str("secret code"),
            Self::Guess => f.write_str("guess"),
        }
    }
}

/// Reasons a round produces no score
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("invalid {side}: {source}")]
    Format {
        side: Side,
        #[source]
        source: CodeError,
    },

    #[error(transparent)]
    Validation(#[from] ScoreError),

    #[error("expected a secret and a guess, found {found} fields")]
    FieldCount { found: usize },
}

/// Parse both codes and score the guess against the secret
///
/// # Errors
///
/// Returns an error if:
/// - Either input has a non-integer entry or a digit outside 1-9
/// - The two codes differ in length
///
/// # Examples
/// ```
/// use mastermind::commands::score_round;
///
/// let score = score_round("1,7,9,3,7", "2,7,3,3,1").unwrap();
/// assert_eq!(score.as_tuple(), (2, 1));
///
/// assert!(score_round("1,2,3", "1,2").is_err());
/// ```
pub fn score_round(secret: &str, guess: &str) -> Result<Score, RoundError> {
    evaluate_round(secret, guess).map(|(score, _)| score)
}

/// Score a round and also return the number of positions in it
pub(crate) fn evaluate_round(secret: &str, guess: &str) -> Result<(Score, usize), RoundError> {
    let result = parse_codes(secret, guess).and_then(|(secret_code, guess_code)| {
        Score::calculate(&secret_code, &guess_code)
            .map(|score| (score, secret_code.len()))
            .map_err(RoundError::from)
    });

    match &result {
        Ok((score, _)) => debug!(secret, guess, %score, "scored round"),
        Err(err) => warn!(secret, guess, error = %err, "rejected round"),
    }

    result
}

fn parse_codes(secret: &str, guess: &str) -> Result<(Code, Code), RoundError> {
    let secret = parse_side(secret, Side::Secret)?;
    let guess = parse_side(guess, Side::Guess)?;
    Ok((secret, guess))
}

fn parse_side(text: &str, side: Side) -> Result<Code, RoundError> {
    text.parse()
        .map_err(|source| RoundError::Format { side, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_valid_inputs() {
        let score = score_round("1,7,9,3,7", "2,7,3,3,1").unwrap();
        assert_eq!(score.as_tuple(), (2, 1));

        let score = score_round("7,7,3", "7,3,3").unwrap();
        assert_eq!(score.as_tuple(), (2, 0));

        let score = score_round("7,7,3", "3,3,7").unwrap();
        assert_eq!(score.as_tuple(), (0, 2));
    }

    #[test]
    fn round_length_mismatch() {
        let err = score_round("1,2,3", "1,2").unwrap_err();
        assert_eq!(
            err,
            RoundError::Validation(ScoreError::LengthMismatch {
                secret: 3,
                guess: 2
            })
        );
    }

    #[test]
    fn round_bad_secret_reported_first() {
        let err = score_round("1,x,3", "0,2,3").unwrap_err();
        assert!(matches!(
            err,
            RoundError::Format {
                side: Side::Secret,
                source: CodeError::NotAnInteger { .. }
            }
        ));
    }

    #[test]
    fn round_bad_guess_digit() {
        let err = score_round("1,2,3", "1,2,10").unwrap_err();
        assert_eq!(
            err,
            RoundError::Format {
                side: Side::Guess,
                source: CodeError::OutOfRange { digit: 10 }
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid guess: digit 10 is outside the range 1-9"
        );
    }

    #[test]
    fn evaluate_round_reports_length() {
        let (score, length) = evaluate_round("4,4,4", "4,4,4").unwrap();
        assert_eq!(score.as_tuple(), (3, 0));
        assert_eq!(length, 3);
        assert!(score.is_solved(length));
    }

    #[test]
    fn round_empty_text_is_format_error() {
        assert!(matches!(
            score_round("", ""),
            Err(RoundError::Format {
                side: Side::Secret,
                ..
            })
        ));
    }
}
