//! Constraint solver
//!
//! Knowledge accumulation, candidate filtering, reachable-pattern enumeration
//! and guess ranking, plus the per-game [`Solver`] session tying them together.

mod constraints;
mod engine;
mod filter;
mod patterns;
pub mod ranker;

pub use constraints::ConstraintState;
pub use engine::Solver;
pub use filter::{SearchSpace, is_consistent};
pub use patterns::{for_each_reachable, reachable_patterns};
pub use ranker::{Ranking, Suggestion, SuggestionRanker, expected_size, pattern_sizes};
