//! Tracing subscriber setup

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// `RUST_LOG` wins when set. Otherwise `default_level` applies to this crate
/// and `verbose` raises it to `debug`.
///
/// # Errors
///
/// Returns `TryInitError` if a global subscriber is already installed.
pub fn init_logger(default_level: &str, verbose: bool) -> Result<(), TryInitError> {
    let directive = if verbose {
        "bulls_and_cows=debug,tower_http=debug".to_string()
    } else {
        format!("bulls_and_cows={default_level}")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        // The first call may already fail if another test installed a subscriber
        let result = init_logger("info", false).and_then(|()| init_logger("debug", true));
        assert!(result.is_err());
    }
}
