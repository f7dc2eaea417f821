//! 1A2B (Bulls and Cows)
//!
//! Guess a secret 4-digit number with unique digits. Each guess is scored as
//! `xAyB`: `x` digits in the right place, `y` digits present elsewhere.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::{Code, Score};
//!
//! let secret = Code::parse("1234").unwrap();
//! let guess = Code::parse("4321").unwrap();
//!
//! let score = Score::calculate(&secret, &guess);
//! assert_eq!(score.to_string(), "0A4B");
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Server configuration
pub mod config;

// Tracing subscriber setup
pub mod logger;

// Terminal output formatting
pub mod output;

// HTTP interface
pub mod web;
