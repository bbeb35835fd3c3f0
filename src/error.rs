//! Error types shared by the game and the solver

use crate::core::{FeedbackError, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// Why a guess was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error(transparent)]
    Malformed(#[from] WordError),
    #[error("not in the vocabulary")]
    UnknownWord,
}

/// Recoverable in-game conditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid guess '{guess}': {reason}")]
    InvalidGuess {
        guess: String,
        #[source]
        reason: GuessRejection,
    },
    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
    #[error("no candidates remain; the feedback so far is contradictory")]
    NoCandidatesRemain,
    #[error("the game is already over")]
    GameOver,
}

impl Error {
    pub(crate) fn invalid_guess(guess: &str, reason: impl Into<GuessRejection>) -> Self {
        Self::InvalidGuess {
            guess: guess.to_string(),
            reason: reason.into(),
        }
    }
}

/// Startup failures while loading a vocabulary
///
/// Kept apart from [`Error`] because it is fatal and never retried.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("cannot read vocabulary file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("vocabulary has no valid {word_len}-letter words")]
    Empty { word_len: usize },
    #[error("unsupported word length {0}")]
    UnsupportedLength(usize),
}

/// Settings the commands cannot run with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be between 1 and {max}, got {actual}")]
    WordLength { max: usize, actual: usize },
    #[error("attempts must be at least 1")]
    NoAttempts,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
