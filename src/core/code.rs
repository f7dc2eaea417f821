//! 1A2B code representation
//!
//! A Code is a 4-character string of decimal digits with no repeated digit.
//! Both the secret and every guess share this shape.

use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// A validated 4-digit code with unique digits
///
/// Stores the ASCII bytes so comparisons stay allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for strings that are not valid codes
///
/// `InvalidLength` and `NonDigit` are shape errors; `RepeatedDigit` is a
/// uniqueness error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("must be exactly 4 digits long, got {0} characters")]
    InvalidLength(usize),
    #[error("must contain only digits 0-9, found {0:?}")]
    NonDigit(char),
    #[error("digits must be unique, {0:?} appears more than once")]
    RepeatedDigit(char),
}

impl CodeError {
    /// Whether the input had the wrong shape (length or non-digit characters)
    #[must_use]
    pub const fn is_shape_error(&self) -> bool {
        matches!(self, Self::InvalidLength(_) | Self::NonDigit(_))
    }
}

impl Code {
    /// Validate a string as a code
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4 characters
    /// - Any character is not an ASCII digit
    /// - Any digit appears more than once
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Code, CodeError};
    ///
    /// let code = Code::parse("0123").unwrap();
    /// assert_eq!(code.as_str(), "0123");
    ///
    /// assert_eq!(Code::parse("123"), Err(CodeError::InvalidLength(3)));
    /// assert_eq!(Code::parse("1123"), Err(CodeError::RepeatedDigit('1')));
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_digit()) {
            return Err(CodeError::NonDigit(bad));
        }

        // Length and ASCII already checked, so there are exactly 4 bytes
        let mut digits = [0u8; CODE_LENGTH];
        digits.copy_from_slice(text.as_bytes());

        let mut seen = [false; 10];
        for &byte in &digits {
            let slot = &mut seen[usize::from(byte - b'0')];
            if *slot {
                return Err(CodeError::RepeatedDigit(char::from(byte)));
            }
            *slot = true;
        }

        Ok(Self(digits))
    }

    /// Generate a secret with the thread-local random generator
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Generate a secret from the given random source
    ///
    /// Draws 4 distinct values from 0..10 in shuffled order, so every one of
    /// the 5040 ordered codes is equally likely.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let picks = rand::seq::index::sample(rng, 10, CODE_LENGTH);

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, index) in digits.iter_mut().zip(picks.iter()) {
            *slot = b'0' + index as u8;
        }

        Self(digits)
    }

    /// Get the code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the code as ASCII digit bytes
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Check if the code contains a specific ASCII digit
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
