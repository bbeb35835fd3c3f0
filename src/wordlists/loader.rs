//! Word list loading utilities
//!
//! Vocabulary files are newline-delimited, one word per line, with no header.

use super::Vocabulary;
use crate::core::Word;
use crate::error::VocabularyError;
use std::fs;
use std::path::Path;

/// Load a vocabulary of `word_len`-letter words from a file
///
/// Lines are trimmed and lowercased. Blank lines and entries that are not
/// valid `word_len`-letter words are skipped; duplicates collapse.
///
/// # Errors
///
/// Returns `VocabularyError::Io` if the file cannot be read, or
/// `VocabularyError::Empty` if it holds no usable word.
///
/// # Examples
/// ```no_run
/// use wordle_deduction::wordlists::loader::load_from_file;
///
/// let vocab = load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", vocab.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_len: usize,
) -> Result<Vocabulary, VocabularyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Vocabulary::new(word_len, parse_lines(&content))
}

/// Parse newline-delimited words, skipping blank or invalid lines
pub fn parse_lines(content: &str) -> impl Iterator<Item = Word> + '_ {
    content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Word::new(trimmed).ok()
        }
    })
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
