//! One-shot scoring command
//!
//! Validates a secret and a guess, then scores the guess.

use crate::core::{Code, CodeError, Score};

/// Result of checking a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
}

/// Validate both inputs and score the guess
///
/// # Errors
///
/// Returns the first `CodeError` found, checking the secret before the guess.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, CodeError> {
    let secret = Code::parse(secret)?;
    let guess = Code::parse(guess)?;

    Ok(CheckResult {
        secret,
        guess,
        score: Score::calculate(&secret, &guess),
    })
}
