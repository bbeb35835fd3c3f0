//! Runtime configuration
//!
//! Defaults match the classic game; the CLI overrides them from its global
//! options.

use crate::error::ConfigError;
use crate::solver::SuggestionRanker;
use crate::wordlists::DEFAULT_WORD_LEN;
use std::time::{Duration, Instant};

/// Opening guesses offered before any feedback
pub const DEFAULT_OPENINGS: &[&str] = &["soare", "adieu"];

/// Longest word the commands accept
///
/// A fresh ranking visits every one of the 3^L patterns per candidate.
pub const MAX_PLAYABLE_WORD_LEN: usize = 12;

/// Settings shared by the game and the solver commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Letters per word
    pub word_len: usize,
    /// Suggestions shown per turn
    pub top_k: usize,
    /// Guesses allowed per game
    pub max_attempts: usize,
    /// First-turn suggestions, kept only if they are in the vocabulary
    pub openings: Vec<String>,
    /// Worker threads for ranking; `None` uses one per core
    pub threads: Option<usize>,
    /// Time limit for one ranking pass
    pub rank_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_len: DEFAULT_WORD_LEN,
            top_k: 10,
            max_attempts: 6,
            openings: DEFAULT_OPENINGS.iter().map(|&s| s.to_string()).collect(),
            threads: None,
            rank_timeout: None,
        }
    }
}

impl Config {
    /// Reject settings the commands cannot run with
    ///
    /// # Errors
    /// Returns `ConfigError::WordLength` for a length outside
    /// `1..=MAX_PLAYABLE_WORD_LEN` and `ConfigError::NoAttempts` for a zero
    /// attempt budget.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_len == 0 || self.word_len > MAX_PLAYABLE_WORD_LEN {
            return Err(ConfigError::WordLength {
                max: MAX_PLAYABLE_WORD_LEN,
                actual: self.word_len,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }

    /// Ranker for one pass, with the deadline counted from now
    #[must_use]
    pub fn ranker<'p>(&self) -> SuggestionRanker<'p> {
        let ranker = SuggestionRanker::new();
        match self.rank_timeout {
            Some(timeout) => ranker.with_deadline(Instant::now() + timeout),
            None => ranker,
        }
    }
}
