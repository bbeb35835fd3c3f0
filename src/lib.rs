//! Word Deduction
//!
//! A fixed-length word-guessing game and a constraint solver that ranks
//! guesses by the expected number of candidates they leave.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_deduction::core::{Pattern, Word, evaluate};
//! use wordle_deduction::solver::Solver;
//! use wordle_deduction::wordlists::Vocabulary;
//!
//! let vocab = Vocabulary::from_strs(5, &["crane", "slate", "trace", "plate"]).unwrap();
//!
//! // Feedback for guessing "crane" when the answer is "trace"
//! let target = Word::new("trace").unwrap();
//! let guess = Word::new("crane").unwrap();
//! let pattern = evaluate(&target, &guess);
//! assert_eq!(pattern.to_string(), "0 1 1 -1 1");
//!
//! let mut solver = Solver::new(&vocab);
//! solver.update_constraints("crane", pattern).unwrap();
//! assert_eq!(solver.refine_candidates().unwrap(), 1);
//! ```

// Core domain types
pub mod core;

// Errors shared across the crate
pub mod error;

// Runtime settings
pub mod config;

// Constraint model, filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// The guessing game
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
