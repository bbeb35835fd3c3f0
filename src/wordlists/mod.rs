//! Vocabulary handling
//!
//! A [`Vocabulary`] is the sorted, de-duplicated universe of valid guesses and
//! targets for one word length.

pub mod loader;

use crate::core::{MAX_WORD_LEN, Word};
use crate::error::{Error, GuessRejection, Result, VocabularyError};

/// Default word length
pub const DEFAULT_WORD_LEN: usize = 5;

/// Set of unique words of a single length
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_len: usize,
    words: Vec<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, keeping only words of `word_len` letters
    ///
    /// Duplicates collapse; words are kept in alphabetical order.
    ///
    /// # Errors
    /// Returns `VocabularyError::UnsupportedLength` for a length outside
    /// `1..=MAX_WORD_LEN` and `VocabularyError::Empty` if no word survives.
    ///
    /// # Examples
    /// ```
    /// use wordle_deduction::core::Word;
    /// use wordle_deduction::wordlists::Vocabulary;
    ///
    /// let words = ["slate", "crane", "crane", "toolong"]
    ///     .into_iter()
    ///     .filter_map(|w| Word::new(w).ok());
    /// let vocab = Vocabulary::new(5, words).unwrap();
    ///
    /// assert_eq!(vocab.len(), 2);
    /// assert!(vocab.contains("crane"));
    /// ```
    pub fn new(
        word_len: usize,
        words: impl IntoIterator<Item = Word>,
    ) -> Result<Self, VocabularyError> {
        if word_len == 0 || word_len > MAX_WORD_LEN {
            return Err(VocabularyError::UnsupportedLength(word_len));
        }

        let mut words: Vec<Word> = words.into_iter().filter(|w| w.len() == word_len).collect();
        words.sort_unstable();
        words.dedup();

        if words.is_empty() {
            return Err(VocabularyError::Empty { word_len });
        }

        Ok(Self { word_len, words })
    }

    /// Build a vocabulary from string slices, skipping invalid entries
    ///
    /// # Errors
    /// Same as [`Vocabulary::new`].
    pub fn from_strs(word_len: usize, slice: &[&str]) -> Result<Self, VocabularyError> {
        Self::new(word_len, loader::words_from_slice(slice))
    }

    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in alphabetical order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Look up a word by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words
            .binary_search_by(|w| w.text().cmp(text))
            .ok()
            .map(|idx| &self.words[idx])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Validate user input as a guess: right length and known word
    ///
    /// Input is trimmed and lowercased first.
    ///
    /// # Errors
    /// Returns `Error::InvalidGuess` if the input is malformed, has the wrong
    /// length or is not in the vocabulary.
    pub fn validate_guess(&self, input: &str) -> Result<&Word> {
        let trimmed = input.trim();
        let word = Word::with_length(trimmed, self.word_len)
            .map_err(|e| Error::invalid_guess(trimmed, e))?;
        self.get(word.text())
            .ok_or_else(|| Error::invalid_guess(trimmed, GuessRejection::UnknownWord))
    }
}
