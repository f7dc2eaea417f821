//! Terminal game mode
//!
//! Prompts for guesses until the secret is found or input ends.

use crate::core::{Code, Score};
use crate::output::formatters::format_score;
use std::io::{self, BufRead, Write};
use tracing::debug;

const WELCOME: &str =
    "Welcome to the 1A2B game! Guess the 4-digit secret number with unique digits.";
const PROMPT: &str = "Enter a 4-digit number (unique digits): ";
const INVALID_INPUT: &str = "Invalid input. Please enter four unique digits.";

/// How a terminal game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The secret was guessed
    Solved { attempts: u32 },
    /// Input ran out before the secret was guessed
    Abandoned { attempts: u32 },
}

/// Play one game on stdin/stdout with a fresh secret
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_play() -> io::Result<PlayOutcome> {
    let secret = Code::random();
    debug!("new terminal game");

    let stdin = io::stdin();
    play_game(&secret, stdin.lock(), io::stdout().lock())
}

/// Run the guessing loop against `secret`
///
/// Invalid lines are rejected and do not count as attempts.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn play_game<R: BufRead, W: Write>(
    secret: &Code,
    mut input: R,
    mut output: W,
) -> io::Result<PlayOutcome> {
    writeln!(output, "{WELCOME}")?;

    let mut attempts = 0;
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            debug!(attempts, "input closed before the secret was found");
            return Ok(PlayOutcome::Abandoned { attempts });
        }

        // Only the line terminator is dropped; padded input is not 4 characters
        let entry = line.trim_end_matches(['\r', '\n']);
        let guess = match Code::parse(entry) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(input = entry, %err, "rejected guess");
                writeln!(output, "{INVALID_INPUT}")?;
                continue;
            }
        };

        attempts += 1;
        let score = Score::calculate(secret, &guess);
        writeln!(output, "{}", format_score(score))?;

        if score.is_solved() {
            writeln!(
                output,
                "Congratulations! You guessed the secret number in {attempts} attempts."
            )?;
            return Ok(PlayOutcome::Solved { attempts });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(secret: &str, input: &str) -> (PlayOutcome, String) {
        let secret = Code::parse(secret).unwrap();
        let mut output = Vec::new();
        let outcome = play_game(&secret, Cursor::new(input), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn play_solved_first_try() {
        let (outcome, output) = play("1234", "1234\n");
        assert_eq!(outcome, PlayOutcome::Solved { attempts: 1 });
        assert!(output.starts_with(WELCOME));
        assert!(output.contains("Result: 4A0B\n"));
        assert!(output.ends_with(
            "Congratulations! You guessed the secret number in 1 attempts.\n"
        ));
    }

    #[test]
    fn play_reports_each_score() {
        let (outcome, output) = play("1234", "5678\n4321\n1243\n1234\n");
        assert_eq!(outcome, PlayOutcome::Solved { attempts: 4 });

        let results: Vec<&str> = output
            .split(PROMPT)
            .filter_map(|chunk| chunk.lines().find(|l| l.starts_with("Result: ")))
            .collect();
        assert_eq!(
            results,
            ["Result: 0A0B", "Result: 0A4B", "Result: 2A2B", "Result: 4A0B"]
        );
    }

    #[test]
    fn play_invalid_input_does_not_count() {
        let (outcome, output) = play("0123", "12\nabcd\n1123\n12345\n0123\n");
        assert_eq!(outcome, PlayOutcome::Solved { attempts: 1 });
        assert_eq!(output.matches(INVALID_INPUT).count(), 4);
        assert!(output.contains("in 1 attempts."));
    }

    #[test]
    fn play_rejects_padded_input() {
        let (outcome, output) = play("9876", " 9876\n9876 \n");
        assert_eq!(outcome, PlayOutcome::Abandoned { attempts: 0 });
        assert_eq!(output.matches(INVALID_INPUT).count(), 2);
        assert!(!output.contains("Result: "));
    }

    #[test]
    fn play_accepts_crlf_line_endings() {
        let (outcome, _) = play("9876", "9876\r\n");
        assert_eq!(outcome, PlayOutcome::Solved { attempts: 1 });
    }

    #[test]
    fn play_stops_at_end_of_input() {
        let (outcome, output) = play("1234", "5678\n");
        assert_eq!(outcome, PlayOutcome::Abandoned { attempts: 1 });
        assert!(!output.contains("Congratulations"));
    }

    #[test]
    fn play_empty_input() {
        let (outcome, output) = play("1234", "");
        assert_eq!(outcome, PlayOutcome::Abandoned { attempts: 0 });
        assert_eq!(output.matches(PROMPT).count(), 1);
    }

    #[test]
    fn play_prompts_once_per_line() {
        let (_, output) = play("1234", "x\n5678\n1234\n");
        assert_eq!(output.matches(PROMPT).count(), 3);
    }
}
