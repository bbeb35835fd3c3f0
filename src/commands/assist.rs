//! Interactive solver assistant
//!
//! The user plays a game elsewhere and reports each guess with its feedback;
//! the assistant keeps the solver session and suggests the next guesses.

use super::{command_word, rank_candidates, read_line};
use crate::config::Config;
use crate::core::Pattern;
use crate::error::Error;
use crate::output::formatters::{guesses_label, history_row, word_preview};
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed once the space is this small
const LIST_LIMIT: usize = 10;

enum Step {
    Continue,
    Quit,
}

/// Run the assistant until the user quits or input ends
///
/// # Errors
///
/// Returns an error only for I/O failures.
pub fn run_assist<R: BufRead, W: Write>(
    solver: &mut Solver<'_>,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n{}", "Solver assistant".bright_cyan().bold())?;
    writeln!(
        output,
        "After each guess enter the word, then its feedback as {} integers",
        solver.vocabulary().word_len()
    )?;
    writeln!(output, "(-1 miss, 0 present, 1 hit) or as G/Y/- symbols.")?;
    writeln!(output, "Commands: 'undo', 'new', 'quit'")?;
    writeln!(output, "(prefix a command with ':' when it is also a word)\n")?;

    loop {
        show_suggestions(solver, config, output)?;

        let Some(line) = read_line(input, output, "Guess")? else {
            return Ok(());
        };
        let guess = line.to_lowercase();
        match command(solver, &guess, output)? {
            Some(Step::Quit) => return Ok(()),
            Some(Step::Continue) => continue,
            None => {}
        }

        let Some(feedback) = read_line(input, output, "Feedback")? else {
            return Ok(());
        };
        let word_len = solver.vocabulary().word_len();
        let pattern = match feedback.to_lowercase().as_str() {
            "win" | "solved" => Pattern::perfect(word_len),
            text => match Pattern::parse_with_len(text, word_len) {
                Ok(pattern) => pattern,
                Err(e) => {
                    writeln!(output, "  {} {e}\n", "✗".red())?;
                    continue;
                }
            },
        };

        if let Step::Quit = record(solver, &guess, pattern, input, output)? {
            return Ok(());
        }
    }
}

/// Handle a command line; `None` means the line is a guess
fn command<W: Write>(
    solver: &mut Solver<'_>,
    line: &str,
    output: &mut W,
) -> io::Result<Option<Step>> {
    let Some(word) = command_word(line, solver.vocabulary()) else {
        return Ok(None);
    };
    let step = match word {
        "" => Step::Continue,
        "quit" | "q" | "exit" => Step::Quit,
        "new" | "n" => {
            solver.reset();
            writeln!(output, "\nNew game started.\n")?;
            Step::Continue
        }
        "undo" | "u" => {
            match solver.undo() {
                Some((word, _)) => writeln!(output, "  Undid {}\n", word.text().bold())?,
                None => writeln!(output, "  Nothing to undo\n")?,
            }
            Step::Continue
        }
        _ => return Ok(None),
    };
    Ok(Some(step))
}

fn record<R: BufRead, W: Write>(
    solver: &mut Solver<'_>,
    guess: &str,
    pattern: Pattern,
    input: &mut R,
    output: &mut W,
) -> io::Result<Step> {
    match solver.observe(guess, pattern) {
        Ok(_) if solver.is_solved() => {
            let turns = solver.history().len();
            writeln!(
                output,
                "\n{} Solved in {turns} {}:",
                "✓".green().bold(),
                guesses_label(turns)
            )?;
            for (word, pattern) in solver.history() {
                writeln!(output, "  {}", history_row(word.text(), *pattern))?;
            }

            let again = read_line(input, output, "\nPlay again? (y/n)")?;
            if matches!(again.as_deref(), Some("y" | "yes")) {
                solver.reset();
                writeln!(output)?;
                Ok(Step::Continue)
            } else {
                Ok(Step::Quit)
            }
        }
        Ok(_) => {
            if let Some((word, pattern)) = solver.history().last() {
                writeln!(output, "  {}", history_row(word.text(), *pattern))?;
            }
            for line in solver.state().to_string().lines() {
                writeln!(output, "  {}", line.dimmed())?;
            }
            writeln!(output)?;
            Ok(Step::Continue)
        }
        Err(Error::NoCandidatesRemain) => {
            writeln!(
                output,
                "\n{} No candidates remain; the feedback may be wrong.",
                "✗".red().bold()
            )?;
            writeln!(output, "Type 'undo' to go back or 'new' to start over.\n")?;
            Ok(Step::Continue)
        }
        Err(e) => {
            writeln!(output, "  {} {e}\n", "✗".red())?;
            Ok(Step::Continue)
        }
    }
}

fn show_suggestions<W: Write>(
    solver: &Solver<'_>,
    config: &Config,
    output: &mut W,
) -> io::Result<()> {
    let candidates = solver.candidates();
    if candidates.is_empty() {
        return Ok(());
    }

    writeln!(
        output,
        "{}",
        format!(
            "Turn {}: {} candidates remaining",
            solver.history().len() + 1,
            candidates.len()
        )
        .bright_cyan()
    )?;

    let openings = solver.opening_suggestions();
    if solver.history().is_empty() && !openings.is_empty() {
        let preview = word_preview(openings.iter().copied(), config.top_k);
        writeln!(output, "  Suggested openings: {}", preview.bold())?;
    } else {
        let ranking = rank_candidates(solver, config, config.top_k);
        for (rank, suggestion) in ranking.suggestions.iter().enumerate() {
            writeln!(
                output,
                "  {:>2}. {}  expected {:.2}",
                rank + 1,
                suggestion.word.text().bold(),
                suggestion.expected_size
            )?;
        }
        if !ranking.complete {
            writeln!(
                output,
                "  {}",
                format!(
                    "(time limit reached after scoring {} words)",
                    ranking.scored
                )
                .yellow()
            )?;
        }
    }

    if candidates.len() <= LIST_LIMIT {
        let preview = word_preview(candidates.iter(), LIST_LIMIT);
        writeln!(output, "  Candidates: {preview}")?;
    }
    writeln!(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Vocabulary;
    use std::io::Cursor;

    fn vocab() -> Vocabulary {
        Vocabulary::from_strs(
            5,
            &["crane", "slate", "trace", "plate", "crate", "grate", "soare"],
        )
        .unwrap()
    }

    fn assist(script: &str) -> (Vec<String>, String) {
        let v = vocab();
        let config = Config::default();
        let mut solver = Solver::new(&v).with_openings(&config.openings);
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        run_assist(&mut solver, &config, &mut input, &mut output).unwrap();

        let history = solver
            .history()
            .iter()
            .map(|(w, _)| w.text().to_string())
            .collect();
        (history, String::from_utf8(output).unwrap())
    }

    #[test]
    fn first_turn_offers_openings() {
        let (_, out) = assist("quit\n");
        assert!(out.contains("Suggested openings: "));
        assert!(out.contains("soare"));
        assert!(!out.contains("adieu"));
    }

    #[test]
    fn feedback_narrows_candidates() {
        let (history, out) = assist("slate\n-1 -1 1 0 1\n");
        assert_eq!(history, ["slate"]);
        assert!(out.contains("Turn 2"));
        assert!(out.contains("Candidates: "));
    }

    #[test]
    fn constraints_are_shown_after_each_turn() {
        colored::control::set_override(false);
        let (_, out) = assist("slate\n-1 -1 1 0 1\n");
        assert!(out.contains("pinned:   __a_e"));
        assert!(out.contains("excluded: 3:{t}"));
        assert!(out.contains("present:  {a, e, t}"));
        assert!(out.contains("absent:   {l, s}"));
    }

    #[test]
    fn symbol_feedback_is_accepted() {
        let (history, _) = assist("slate\n--GYG\n");
        assert_eq!(history, ["slate"]);
    }

    #[test]
    fn bad_feedback_is_reported() {
        let (history, out) = assist("slate\n2 0 1 1 0\n");
        assert!(history.is_empty());
        assert!(out.contains("not one of -1, 0, 1"));
    }

    #[test]
    fn solved_then_declined() {
        let (history, out) = assist("crane\nwin\nn\n");
        assert_eq!(history, ["crane"]);
        assert!(out.contains("Solved in 1 guess"));
    }

    #[test]
    fn contradiction_then_undo() {
        let (history, out) = assist("crane\n1 1 1 1 -1\nundo\n");
        assert!(out.contains("No candidates remain"));
        assert!(history.is_empty());
    }

    #[test]
    fn vocabulary_word_shadows_command() {
        let v = Vocabulary::from_strs(4, &["exit", "quit", "undo", "word"]).unwrap();
        let config = Config::default();
        let mut solver = Solver::new(&v);
        let script = "undo\n-1 -1 -1 -1\n:undo\nquit\n-1 -1 -1 -1\n:quit\n";
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        run_assist(&mut solver, &config, &mut input, &mut output).unwrap();

        let history: Vec<&str> = solver.history().iter().map(|(w, _)| w.text()).collect();
        assert_eq!(history, ["quit"]);
    }

    #[test]
    fn unknown_guess_is_rejected() {
        let (history, out) = assist("zebra\n-1 -1 -1 -1 -1\n");
        assert!(history.is_empty());
        assert!(out.contains("not in the vocabulary"));
    }
}
