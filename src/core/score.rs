//! 1A2B score calculation and representation
//!
//! A score counts how well a guess matches the secret:
//! - A = digit in the correct position
//! - B = digit present in the secret, but in another position
//!
//! Since codes never repeat a digit, a single positional scan is enough.

use super::code::{CODE_LENGTH, Code, CodeError};
use serde::Serialize;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Score {
    /// Correct digit in the correct position
    pub a: u8,
    /// Correct digit in the wrong position
    pub b: u8,
}

impl Score {
    /// Every digit in place
    pub const PERFECT: Self = Self { a: 4, b: 0 };

    #[inline]
    #[must_use]
    pub const fn new(a: u8, b: u8) -> Self {
        debug_assert!(a as usize + b as usize <= CODE_LENGTH);
        Self { a, b }
    }

    /// Check if the guess found the secret
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.a as usize == CODE_LENGTH
    }

    /// Calculate the score when `guess` is played against `secret`
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Code, Score};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1243").unwrap();
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(2, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        if secret == guess {
            return Self::PERFECT;
        }

        let mut score = Self { a: 0, b: 0 };
        for (&s, &g) in secret.digits().iter().zip(guess.digits()) {
            if s == g {
                score.a += 1;
            } else if secret.contains(g) {
                score.b += 1;
            }
        }
        score
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.a, self.b)
    }
}

/// Score a guess against a secret given as raw strings
///
/// Only the length is checked here. Digit uniqueness is the caller's job
/// (see [`Code::parse`]), so inputs with repeated digits still produce a
/// score rather than an error.
///
/// # Errors
///
/// Returns `CodeError::InvalidLength` if either string is not exactly 4
/// characters long.
pub fn evaluate_guess(secret: &str, guess: &str) -> Result<Score, CodeError> {
    for text in [secret, guess] {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }
    }

    if secret == guess {
        return Ok(Score::PERFECT);
    }

    let mut score = Score { a: 0, b: 0 };
    for (s, g) in secret.chars().zip(guess.chars()) {
        if s == g {
            score.a += 1;
        } else if secret.contains(g) {
            score.b += 1;
        }
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(secret: &str, guess: &str) -> Score {
        Score::calculate(&Code::parse(secret).unwrap(), &Code::parse(guess).unwrap())
    }

    /// All 5040 valid codes in ascending order
    fn all_codes() -> Vec<Code> {
        (0..10_000)
            .filter_map(|n| Code::parse(&format!("{n:04}")).ok())
            .collect()
    }

    #[test]
    fn score_perfect_constant() {
        assert_eq!(Score::PERFECT, Score::new(4, 0));
        assert!(Score::PERFECT.is_solved());
        assert!(!Score::new(3, 0).is_solved());
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::new(1, 2).to_string(), "1A2B");
        assert_eq!(Score::PERFECT.to_string(), "4A0B");
    }

    #[test]
    fn score_serializes_as_a_b_object() {
        let json = serde_json::to_value(Score::new(2, 1)).unwrap();
        assert_eq!(json, serde_json::json!({ "a": 2, "b": 1 }));
    }

    #[test]
    fn score_two_placed_two_swapped() {
        assert_eq!(score("1234", "1243"), Score::new(2, 2));
    }

    #[test]
    fn score_no_overlap() {
        assert_eq!(score("1234", "5678"), Score::new(0, 0));
    }

    #[test]
    fn score_all_misplaced() {
        assert_eq!(score("1234", "4321"), Score::new(0, 4));
    }

    #[test]
    fn score_exact_match() {
        assert_eq!(score("0123", "0123"), Score::PERFECT);
    }

    #[test]
    fn score_mixed() {
        // 5 placed, 1 and 7 misplaced, 9 absent
        assert_eq!(score("5173", "5719"), Score::new(1, 2));
    }

    #[test]
    fn score_total_matches_are_symmetric() {
        let forward = score("1234", "1356");
        let backward = score("1356", "1234");
        assert_eq!(forward.a + forward.b, backward.a + backward.b);
    }

    #[test]
    fn score_invariants_hold_for_all_secrets() {
        let codes = all_codes();
        assert_eq!(codes.len(), 5040);

        let guesses: Vec<Code> = codes.iter().step_by(37).copied().collect();
        for secret in &codes {
            assert_eq!(Score::calculate(secret, secret), Score::PERFECT);
            for guess in &guesses {
                let s = Score::calculate(secret, guess);
                assert!(s.a <= 4 && s.b <= 4);
                assert!(s.a + s.b <= 4, "{secret} vs {guess} gave {s}");
                assert_eq!(s.is_solved(), secret == guess);
                assert_eq!(s, Score::calculate(secret, guess));
            }
        }
    }

    #[test]
    fn evaluate_guess_matches_code_scoring() {
        let codes = all_codes();
        for secret in codes.iter().step_by(101) {
            for guess in codes.iter().step_by(53) {
                assert_eq!(
                    evaluate_guess(secret.as_str(), guess.as_str()),
                    Ok(Score::calculate(secret, guess))
                );
            }
        }
    }

    #[test]
    fn evaluate_guess_concrete_scenarios() {
        assert_eq!(evaluate_guess("1234", "1243"), Ok(Score::new(2, 2)));
        assert_eq!(evaluate_guess("1234", "5678"), Ok(Score::new(0, 0)));
        assert_eq!(evaluate_guess("1234", "4321"), Ok(Score::new(0, 4)));
        assert_eq!(evaluate_guess("0123", "0123"), Ok(Score::PERFECT));
    }

    #[test]
    fn evaluate_guess_rejects_wrong_length() {
        assert_eq!(
            evaluate_guess("123", "1234"),
            Err(CodeError::InvalidLength(3))
        );
        assert_eq!(
            evaluate_guess("1234", "12345"),
            Err(CodeError::InvalidLength(5))
        );
        assert_eq!(evaluate_guess("", ""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn evaluate_guess_does_not_check_uniqueness() {
        // Repeated digits are the validation layer's concern
        assert_eq!(evaluate_guess("1234", "1123"), Ok(Score::new(1, 3)));
    }
}
