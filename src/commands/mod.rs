//! Command implementations

pub mod check;
pub mod play;
pub mod serve;

pub use check::{CheckResult, check_guess};
pub use play::{PlayOutcome, play_game, run_play};
pub use serve::{run_server, serve};
