//! 1A2B - CLI
//!
//! Play Bulls and Cows in the terminal, score single guesses, or serve the
//! game over HTTP.

use anyhow::{Context, Result};
use bulls_and_cows::{
    commands::{PlayOutcome, check_guess, run_play, serve},
    config::ServerConfig,
    core::Code,
    logger::init_logger,
    output::{print_check_result, print_secret},
};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "1A2B (Bulls and Cows) number guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Score a single guess against a secret
    Check {
        /// The secret number (4 unique digits)
        secret: String,

        /// The guess to score (4 unique digits)
        guess: String,
    },

    /// Print a random secret
    Secret,

    /// Serve the game over HTTP
    Serve(ServerConfig),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Keep the terminal game quiet unless asked
    let default_level = match command {
        Commands::Serve(_) => "info",
        _ => "warn",
    };
    init_logger(default_level, cli.verbose).context("failed to install logger")?;

    match command {
        Commands::Play => run_play_command(),
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
        Commands::Secret => {
            print_secret(&Code::random());
            Ok(())
        }
        Commands::Serve(config) => serve(&config),
    }
}

fn run_play_command() -> Result<()> {
    match run_play().context("terminal game failed")? {
        PlayOutcome::Solved { attempts } => info!(attempts, "game solved"),
        PlayOutcome::Abandoned { attempts } => info!(attempts, "game abandoned"),
    }
    Ok(())
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess).context("invalid input")?;
    print_check_result(&result);
    Ok(())
}
