//! Display functions for command results

use super::formatters::score_to_emoji;
use crate::commands::CheckResult;
use crate::core::Code;
use colored::Colorize;
use std::net::SocketAddr;

/// Print the result of scoring one guess
pub fn print_check_result(result: &CheckResult) {
    let CheckResult {
        secret,
        guess,
        score,
    } = *result;

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.as_str().bright_yellow().bold(),
        guess.as_str().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}  {}",
        score.to_string().bright_cyan().bold(),
        score_to_emoji(score)
    );

    if score.is_solved() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
    println!();
}

/// Print a freshly generated secret
pub fn print_secret(secret: &Code) {
    println!("{}", secret.as_str().bright_yellow().bold());
}

/// Print the startup banner for the HTTP server
pub fn print_server_banner(addr: SocketAddr) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "1A2B GAME SERVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n{} Listening on {}",
        "▸".bright_green(),
        format!("http://{addr}").bright_cyan().underline()
    );
    println!(
        "{} {} new secret, {} score a guess\n",
        "▸".bright_green(),
        "GET /secret".bright_white(),
        "POST /guess".bright_white()
    );
}
