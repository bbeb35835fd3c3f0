//! Core domain types
//!
//! Words, letter sets and the feedback rule shared by the game and the solver.
//! Everything here is pure and free of I/O.

mod letters;
mod pattern;
mod word;

pub use letters::LetterSet;
pub use pattern::{Feedback, FeedbackError, Pattern, evaluate, try_evaluate};
pub use word::{MAX_WORD_LEN, Word, WordError};
