//! Command implementations
//!
//! The interactive commands read from any `BufRead` and write to any `Write`
//! so they can be driven by scripted input.

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use solve::{SolveResult, SolveStep, solve_word};

use crate::config::Config;
use crate::solver::{Ranking, Solver};
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};

/// Search spaces at least this large get a progress bar while ranking
const PROGRESS_THRESHOLD: usize = 500;

/// Print `prompt` and read one trimmed line
///
/// Returns `None` at end of input.
pub(crate) fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// The command named by `line`, or `None` if the line is a guess
///
/// A leading `:` always marks a command. A bare word is a command only when
/// the vocabulary does not contain it.
pub(crate) fn command_word<'l>(line: &'l str, vocabulary: &Vocabulary) -> Option<&'l str> {
    match line.strip_prefix(':') {
        Some(command) => Some(command.trim()),
        None if vocabulary.contains(line) => None,
        None => Some(line),
    }
}

pub(crate) fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"))
}

/// Rank the session's candidates with the configured deadline
///
/// Large spaces show a progress bar on stderr.
pub(crate) fn rank_candidates<'a>(solver: &Solver<'a>, config: &Config, k: usize) -> Ranking<'a> {
    let total = solver.candidates().len();
    if total < PROGRESS_THRESHOLD {
        return solver.suggest_with(&config.ranker(), k);
    }

    let bar = ProgressBar::new(total as u64);
    bar.set_style(progress_style());
    bar.set_message("scoring guesses");
    let tick = || bar.inc(1);

    let ranking = solver.suggest_with(&config.ranker().with_progress(&tick), k);
    bar.finish_and_clear();
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_words_are_never_commands() {
        let vocab = Vocabulary::from_strs(4, &["exit", "quit", "undo", "word"]).unwrap();
        assert_eq!(command_word("quit", &vocab), None);
        assert_eq!(command_word(":quit", &vocab), Some("quit"));
        assert_eq!(command_word(": undo", &vocab), Some("undo"));
        assert_eq!(command_word("q", &vocab), Some("q"));
        assert_eq!(command_word("", &vocab), Some(""));
    }
}
