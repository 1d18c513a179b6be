//! Mastermind code representation
//!
//! A Code stores an ordered sequence of digits in the range 1-9, used for both
//! the secret and the guess of a round.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest digit allowed in a code
pub const DIGIT_MIN: u8 = 1;

/// Largest digit allowed in a code
pub const DIGIT_MAX: u8 = 9;

/// An ordered sequence of digits in `DIGIT_MIN..=DIGIT_MAX`
///
/// The length is not fixed by the type; two codes are only comparable when
/// their lengths agree, which scoring checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Code {
    digits: Vec<u8>,
}

/// Error type for codes that cannot be built from the given input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("'{token}' is not an integer")]
    NotAnInteger { token: String },

    #[error("digit {digit} is outside the range 1-9")]
    OutOfRange { digit: i64 },
}

impl Code {
    /// Create a new Code from a digit sequence
    ///
    /// # Errors
    /// Returns `CodeError::OutOfRange` for the first digit outside 1-9.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new(vec![1, 7, 9, 3, 7]).unwrap();
    /// assert_eq!(code.len(), 5);
    ///
    /// assert!(Code::new(vec![0, 1]).is_err());
    /// assert!(Code::new(vec![]).unwrap().is_empty());
    /// ```
    pub fn new(digits: Vec<u8>) -> Result<Self, CodeError> {
        if let Some(&digit) = digits.iter().find(|d| !is_valid_digit(i64::from(**d))) {
            return Err(CodeError::OutOfRange {
                digit: i64::from(digit),
            });
        }

        Ok(Self { digits })
    }

    /// Get the digits as a slice
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of positions in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

fn is_valid_digit(value: i64) -> bool {
    (i64::from(DIGIT_MIN)..=i64::from(DIGIT_MAX)).contains(&value)
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse a comma separated list such as `"1,7,9,3,7"`
    ///
    /// Whitespace around each entry is ignored. Empty entries (including the
    /// empty string) are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = Vec::new();

        for raw in s.split(',') {
            let token = raw.trim();
            let value: i64 = token.parse().map_err(|_| CodeError::NotAnInteger {
                token: token.to_string(),
            })?;

            if !is_valid_digit(value) {
                return Err(CodeError::OutOfRange { digit: value });
            }
            digits.push(value as u8);
        }

        Ok(Self { digits })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
