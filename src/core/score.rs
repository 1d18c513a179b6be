//! Mastermind round scoring
//!
//! A score is the pair (strong, weak):
//! - strong = right digit in the right position
//! - weak = right digit in the wrong position, counted with multiplicity once
//!   the strong positions are taken out

use super::Code;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    strong: usize,
    weak: usize,
}

/// Error type for a secret and guess that cannot be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("secret has {secret} digits but guess has {guess}")]
    LengthMismatch { secret: usize, guess: usize },
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(strong: usize, weak: usize) -> Self {
        Self { strong, weak }
    }

    /// Correct digits in correct positions
    #[inline]
    #[must_use]
    pub const fn strong(self) -> usize {
        self.strong
    }

    /// Correct digits in wrong positions
    #[inline]
    #[must_use]
    pub const fn weak(self) -> usize {
        self.weak
    }

    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.strong + self.weak
    }

    #[inline]
    #[must_use]
    pub const fn as_tuple(self) -> (usize, usize) {
        (self.strong, self.weak)
    }

    /// Check if every one of `length` positions is a strong match
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.strong == length
    }

    /// Score `guess` against `secret`
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` when the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret: Code = "1,7,9,3,7".parse().unwrap();
    /// let guess: Code = "2,7,3,3,1".parse().unwrap();
    ///
    /// // The 7 and the second 3 are strong, the 1 is weak
    /// let score = Score::calculate(&secret, &guess).unwrap();
    /// assert_eq!(score.as_tuple(), (2, 1));
    /// ```
    pub fn calculate(secret: &Code, guess: &Code) -> Result<Self, ScoreError> {
        score_symbols(secret.digits(), guess.digits())
    }
}

/// Score two symbol sequences of equal length
///
/// Works for any symbol type; digit range is the caller's concern.
///
/// # Algorithm
/// 1. First pass: count exact position matches, pool the secret symbols of
///    every other position
/// 2. Second pass: for each unmatched guess symbol, take one occurrence from
///    the pool if any remain
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` when the sequences differ in length.
pub fn score_symbols<T>(secret: &[T], guess: &[T]) -> Result<Score, ScoreError>
where
    T: Copy + Eq + Hash,
{
    if secret.len() != guess.len() {
        return Err(ScoreError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let mut strong = 0;
    let mut secret_available: FxHashMap<T, usize> = FxHashMap::default();
    let mut unmatched_guess = Vec::with_capacity(guess.len());

    // First pass: strong matches consume both positions
    for (&s, &g) in secret.iter().zip(guess) {
        if s == g {
            strong += 1;
        } else {
            *secret_available.entry(s).or_insert(0) += 1;
            unmatched_guess.push(g);
        }
    }

    // Second pass: weak matches consume one remaining secret occurrence each
    let mut weak = 0;
    for symbol in unmatched_guess {
        if let Some(count) = secret_available.get_mut(&symbol)
            && *count > 0
        {
            *count -= 1;
            weak += 1;
        }
    }

    Ok(Score::new(strong, weak))
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.strong, self.weak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn code(text: &str) -> Code {
        text.parse().unwrap()
    }

    fn random_code(rng: &mut StdRng, len: usize) -> Code {
        Code::new((0..len).map(|_| rng.random_range(1..=9)).collect()).unwrap()
    }

    #[test]
    fn score_problem_statement_example() {
        let score = Score::calculate(&code("1,7,9,3,7"), &code("2,7,3,3,1")).unwrap();

        assert_eq!(score.as_tuple(), (2, 1));
        assert_eq!(score.total(), 3);
        assert!(!score.is_solved(5));
    }

    #[test]
    fn score_duplicate_digits_not_overcounted() {
        // Indices 0 and 2 are strong; the leftover 7 cannot match the leftover 3
        let score = Score::calculate(&code("7,7,3"), &code("7,3,3")).unwrap();
        assert_eq!(score.as_tuple(), (2, 0));

        // Two 3s guessed against a single 3 in the secret
        let score = Score::calculate(&code("7,7,3"), &code("3,3,7")).unwrap();
        assert_eq!(score.as_tuple(), (0, 2));
    }

    #[test]
    fn score_weak_limited_by_secret_multiplicity() {
        // Two 7s in the secret, three misplaced 7s in the guess
        let score = Score::calculate(&code("7,7,1,2"), &code("3,4,7,7")).unwrap();
        assert_eq!(score.as_tuple(), (0, 2));

        let score = Score::calculate(&code("7,7,1,2,5"), &code("1,2,7,7,7")).unwrap();
        assert_eq!(score.as_tuple(), (0, 4));
    }

    #[test]
    fn score_strong_takes_priority_over_weak() {
        // The 4 at index 2 is strong, so the other 4 in the guess has nothing left
        let score = Score::calculate(&code("1,2,4,3"), &code("4,2,4,5")).unwrap();
        assert_eq!(score.as_tuple(), (2, 0));
    }

    #[test]
    fn score_identical_codes_all_strong() {
        for text in ["1", "1,2,3,4", "9,9,9,9,9", "2,5,4,4,9,3"] {
            let c = code(text);
            let score = Score::calculate(&c, &c).unwrap();

            assert_eq!(score.as_tuple(), (c.len(), 0));
            assert!(score.is_solved(c.len()));
        }
    }

    #[test]
    fn score_disjoint_codes_zero() {
        let score = Score::calculate(&code("1,2,3,4"), &code("5,6,7,8")).unwrap();
        assert_eq!(score, Score::default());
    }

    #[test]
    fn score_reversed_distinct_digits_all_weak() {
        let secret = code("1,2,3,4,5,6");
        let guess = code("6,5,4,3,2,1");
        let score = Score::calculate(&secret, &guess).unwrap();

        assert_eq!(score.as_tuple(), (0, 6));
    }

    #[test]
    fn score_empty_codes() {
        let empty = Code::default();
        let score = Score::calculate(&empty, &empty).unwrap();

        assert_eq!(score.as_tuple(), (0, 0));
        assert!(score.is_solved(0));
    }

    #[test]
    fn score_length_mismatch_is_error() {
        let result = Score::calculate(&code("1,2,3"), &code("1,2"));
        assert_eq!(
            result,
            Err(ScoreError::LengthMismatch {
                secret: 3,
                guess: 2
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "secret has 3 digits but guess has 2"
        );
    }

    #[test]
    fn score_symbols_any_symbol_type() {
        let score = score_symbols(b"horse", b"roses").unwrap();
        assert_eq!(score.as_tuple(), (1, 3));

        // Out-of-range values do not disturb the count
        let score = score_symbols(&[0, 42, 42], &[42, 0, 7]).unwrap();
        assert_eq!(score.as_tuple(), (0, 2));
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::new(2, 1).to_string(), "(2, 1)");
        assert_eq!(Score::default().to_string(), "(0, 0)");
    }

    #[test]
    fn random_codes_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..500 {
            let len = rng.random_range(0..12);
            let secret = random_code(&mut rng, len);
            let guess = random_code(&mut rng, len);
            let score = Score::calculate(&secret, &guess).unwrap();

            assert!(score.total() <= len, "{secret} vs {guess} gave {score}");
            assert_eq!(
                Score::calculate(&secret, &secret).unwrap().as_tuple(),
                (len, 0)
            );

            // Matches are symmetric in total, even if not in the split
            let swapped = Score::calculate(&guess, &secret).unwrap();
            assert_eq!(score.strong(), swapped.strong());
            assert_eq!(score.total(), swapped.total());
        }
    }

    #[test]
    fn random_permutations_keep_total() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let len = rng.random_range(1..10);
            let secret = random_code(&mut rng, len);
            let mut digits = secret.digits().to_vec();
            digits.shuffle(&mut rng);
            let guess = Code::new(digits).unwrap();

            // Every digit of a permutation is matched somewhere
            let score = Score::calculate(&secret, &guess).unwrap();
            assert_eq!(score.total(), len);
        }
    }
}
