//! Word solving command
//!
//! Plays a game against a known target, always taking the solver's top
//! suggestion, and records how the candidate set shrank.

use crate::config::Config;
use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::game::{Game, GameStatus};
use crate::solver::{Solver, expected_size};
use crate::wordlists::Vocabulary;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<SolveStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected size of the guess when it was chosen
    pub expected_size: Option<f64>,
}

/// Solve `target` by self-play within the configured attempt budget
///
/// The first guess is the first configured opening found in the vocabulary;
/// later guesses are the best-ranked candidate not already played.
///
/// # Errors
///
/// Returns `Error::InvalidGuess` if the target is not a vocabulary word.
pub fn solve_word(vocabulary: &Vocabulary, target: &str, config: &Config) -> Result<SolveResult> {
    let mut game = Game::with_target(vocabulary, target, config.max_attempts)?;
    let mut solver = Solver::new(vocabulary).with_openings(&config.openings);
    let mut guesses = Vec::new();

    while let GameStatus::InProgress { .. } = game.status() {
        let candidates_before = solver.candidates().len();
        let Some((guess, expected)) = choose_guess(&solver, config) else {
            break;
        };

        let pattern = game.evaluate_guess(guess.text())?;
        let candidates_after = solver.observe(guess.text(), pattern)?;

        guesses.push(SolveStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
            expected_size: expected,
        });
    }

    Ok(SolveResult {
        success: matches!(game.status(), GameStatus::Won { .. }),
        guesses,
        target: game.reveal_target().text().to_string(),
    })
}

/// Next guess for self-play, with its expected size when known
pub(crate) fn choose_guess<'a>(
    solver: &Solver<'a>,
    config: &Config,
) -> Option<(&'a Word, Option<f64>)> {
    let played = |word: &Word| solver.history().iter().any(|(w, _)| *w == word);

    if solver.history().is_empty() {
        if let Some(&opening) = solver.opening_suggestions().first() {
            let score = expected_size(opening, solver.candidates(), solver.state());
            return Some((opening, score.map(|(size, _)| size)));
        }
    }

    // One more than the turns played guarantees an unplayed word if there is one
    let ranking = solver.suggest_with(&config.ranker(), solver.history().len() + 1);
    if let Some(best) = ranking.suggestions.iter().find(|s| !played(s.word)) {
        return Some((best.word, Some(best.expected_size)));
    }

    // Deadline hit before anything was scored
    solver
        .candidates()
        .iter()
        .find(|&w| !played(w))
        .map(|w| (w, None))
}
