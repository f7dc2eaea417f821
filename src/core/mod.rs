//! Core domain types for 1A2B
//!
//! This module contains the game rules with no I/O of any kind.
//! Everything here is pure and safe to call from any number of threads;
//! the only side effect is the random draw in [`Code::random`].

mod code;
mod score;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use score::{Score, evaluate_guess};
