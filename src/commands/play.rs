//! Line-based game loop
//!
//! The player guesses a hidden word; every accepted guess is answered with
//! coloured tiles and the integer feedback encoding.

use super::{command_word, read_line};
use crate::game::{Game, GameStatus};
use crate::output::formatters::{guesses_label, history_row};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Play one game to the end
///
/// Typing `quit` abandons the game and `reveal` prints the target without
/// ending it. End of input is treated like `quit`. A command that is also a
/// vocabulary word is played as a guess unless prefixed with `:`.
///
/// # Errors
///
/// Returns an error only for I/O failures; rejected guesses are reported and
/// the player is asked again.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameStatus> {
    writeln!(
        output,
        "\n{} Guess the {}-letter word.",
        "Word game.".bright_cyan().bold(),
        game.word_len()
    )?;
    writeln!(output, "Commands: 'reveal' shows the answer, 'quit' gives up")?;
    writeln!(output, "(prefix a command with ':' when it is also a word)\n")?;

    while let GameStatus::InProgress { remaining } = game.status() {
        let prompt = format!("Guess ({remaining} left)");
        let Some(line) = read_line(input, output, &prompt)? else {
            break;
        };

        let line = line.to_lowercase();
        match command_word(&line, game.vocabulary()) {
            Some("") => {}
            Some("quit" | "q" | "exit") => break,
            Some("reveal") => {
                writeln!(
                    output,
                    "  The word is {}",
                    game.reveal_target().text().bright_yellow()
                )?;
            }
            _ => match game.evaluate_guess(&line) {
                Ok(_) => {
                    if let Some((word, pattern)) = game.attempts().last() {
                        writeln!(output, "  {}", history_row(word.text(), *pattern))?;
                    }
                }
                Err(e) => writeln!(output, "  {} {e}", "✗".red())?,
            },
        }
    }

    let status = game.status();
    match status {
        GameStatus::Won { attempts } => writeln!(
            output,
            "\n{} Solved in {attempts} {}.",
            "✓".green().bold(),
            guesses_label(attempts)
        )?,
        GameStatus::Lost | GameStatus::InProgress { .. } => writeln!(
            output,
            "\n{} The word was {}.",
            "✗".red().bold(),
            game.reveal_target().text().bright_yellow().bold()
        )?,
    }
    Ok(status)
}
