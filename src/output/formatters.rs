//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as coloured tiles, one per letter
#[must_use]
pub fn pattern_tiles(word: &str, pattern: Pattern) -> String {
    word.chars()
        .zip(pattern.codes())
        .map(|(ch, code)| tile(ch.to_ascii_uppercase(), code).to_string())
        .collect()
}

fn tile(letter: char, code: Feedback) -> ColoredString {
    let text = format!(" {letter} ");
    match code {
        Feedback::Hit => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Miss => text.white().on_bright_black(),
    }
}

/// One history row: tiles, emoji and the integer encoding
#[must_use]
pub fn history_row(word: &str, pattern: Pattern) -> String {
    format!(
        "{}  {}  {}",
        pattern_tiles(word, pattern),
        pattern.to_emoji(),
        pattern.to_string().bright_black()
    )
}

/// Comma-separated preview of up to `limit` words
#[must_use]
pub fn word_preview<'a>(words: impl IntoIterator<Item = &'a Word>, limit: usize) -> String {
    words
        .into_iter()
        .take(limit)
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width] before the cast
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[must_use]
pub const fn guesses_label(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_contain_letters_in_order() {
        colored::control::set_override(false);
        let tiles = pattern_tiles("crane", Pattern::parse("0 1 1 -1 1").unwrap());
        assert_eq!(tiles, " C  R  A  N  E ");
    }

    #[test]
    fn preview_is_limited() {
        let words: Vec<Word> = ["crane", "slate", "trace"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        assert_eq!(word_preview(&words, 2), "crane, slate");
        assert_eq!(word_preview(&words, 10), "crane, slate, trace");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
