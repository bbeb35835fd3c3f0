//! Solver session
//!
//! Owns the canonical constraint state and search space for one game and
//! exposes the query interface used by the interactive loops.

use super::{ConstraintState, Ranking, SearchSpace, SuggestionRanker};
use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::wordlists::Vocabulary;

/// Solver for a single game
///
/// Real feedback goes through [`Solver::update_constraints`] followed by
/// [`Solver::refine_candidates`]; ranking never mutates the session.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    vocabulary: &'a Vocabulary,
    state: ConstraintState,
    space: SearchSpace<'a>,
    history: Vec<(&'a Word, Pattern)>,
    openings: Vec<&'a Word>,
}

impl<'a> Solver<'a> {
    /// Fresh session over the whole vocabulary
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            state: ConstraintState::new(vocabulary.word_len()),
            space: SearchSpace::full(vocabulary),
            history: Vec::new(),
            openings: Vec::new(),
        }
    }

    /// Set the suggestions offered before any feedback
    ///
    /// Words missing from the vocabulary are ignored.
    #[must_use]
    pub fn with_openings<S: AsRef<str>>(mut self, openings: &[S]) -> Self {
        let vocabulary = self.vocabulary;
        self.openings = openings
            .iter()
            .filter_map(|text| vocabulary.get(text.as_ref()))
            .collect();
        self
    }

    /// Record feedback for a real guess
    ///
    /// The guess must be a vocabulary word and the pattern must have one code
    /// per letter. The search space is not touched until
    /// [`Solver::refine_candidates`] runs.
    ///
    /// # Errors
    /// Returns `Error::InvalidGuess` or `Error::InvalidFeedback`; the session
    /// is unchanged on error.
    pub fn update_constraints(&mut self, guess: &str, pattern: Pattern) -> Result<()> {
        let vocabulary = self.vocabulary;
        let word = vocabulary.validate_guess(guess)?;
        self.state.update(word, pattern)?;
        self.history.push((word, pattern));
        Ok(())
    }

    /// Narrow the search space to words consistent with the state
    ///
    /// Returns the new candidate count.
    ///
    /// # Errors
    /// Returns `Error::NoCandidatesRemain` if the feedback is contradictory.
    /// The (empty) space is kept so the caller can inspect it, then
    /// [`Solver::undo`] or [`Solver::reset`].
    pub fn refine_candidates(&mut self) -> Result<usize> {
        self.space = self.space.refine(&self.state);
        if self.space.is_empty() {
            Err(Error::NoCandidatesRemain)
        } else {
            Ok(self.space.len())
        }
    }

    /// Update and refine in one step
    ///
    /// # Errors
    /// Any error from [`Solver::update_constraints`] or
    /// [`Solver::refine_candidates`].
    pub fn observe(&mut self, guess: &str, pattern: Pattern) -> Result<usize> {
        self.update_constraints(guess, pattern)?;
        self.refine_candidates()
    }

    /// Best `k` guesses from the current candidates
    ///
    /// # Examples
    /// ```
    /// use wordle_deduction::core::Pattern;
    /// use wordle_deduction::solver::Solver;
    /// use wordle_deduction::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_strs(5, &["crane", "slate", "trace", "plate"]).unwrap();
    /// let mut solver = Solver::new(&vocab);
    ///
    /// solver.observe("slate", Pattern::parse("-1 -1 1 0 1").unwrap()).unwrap();
    /// let ranking = solver.suggest_top_k(3);
    /// assert_eq!(ranking.best().map(|s| s.word.text()), Some("trace"));
    /// ```
    #[must_use]
    pub fn suggest_top_k(&self, k: usize) -> Ranking<'a> {
        self.suggest_with(&SuggestionRanker::new(), k)
    }

    /// Like [`Solver::suggest_top_k`] with a configured ranker
    #[must_use]
    pub fn suggest_with(&self, ranker: &SuggestionRanker<'_>, k: usize) -> Ranking<'a> {
        ranker.top_k(&self.space, &self.state, k)
    }

    /// Suggestions for the first turn
    #[must_use]
    pub fn opening_suggestions(&self) -> &[&'a Word] {
        &self.openings
    }

    /// Drop the last real turn and rebuild the session from the rest
    ///
    /// Returns the removed turn, or `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Option<(&'a Word, Pattern)> {
        let last = self.history.pop()?;

        // Every recorded turn was length-checked when it was first applied
        let fresh = ConstraintState::new(self.vocabulary.word_len());
        self.state = self
            .history
            .iter()
            .fold(fresh, |state, &(word, pattern)| state.branch(word, pattern));
        self.space = SearchSpace::full(self.vocabulary).refine(&self.state);
        Some(last)
    }

    /// Start over with a fresh state and the full vocabulary
    pub fn reset(&mut self) {
        self.state = ConstraintState::new(self.vocabulary.word_len());
        self.space = SearchSpace::full(self.vocabulary);
        self.history.clear();
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    #[must_use]
    pub const fn candidates(&self) -> &SearchSpace<'a> {
        &self.space
    }

    #[must_use]
    pub fn history(&self) -> &[(&'a Word, Pattern)] {
        &self.history
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// `true` once an all-Hit pattern has been recorded
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|(_, p)| p.is_perfect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::error::GuessRejection;

    fn vocab() -> Vocabulary {
        Vocabulary::from_strs(
            5,
            &[
                "crane", "slate", "trace", "plate", "crate", "grate", "irate", "soare", "adieu",
            ],
        )
        .unwrap()
    }

    fn feedback(vocab: &Vocabulary, target: &str, guess: &str) -> Pattern {
        evaluate(vocab.get(target).unwrap(), vocab.get(guess).unwrap())
    }

    #[test]
    fn new_session_covers_vocabulary() {
        let v = vocab();
        let solver = Solver::new(&v);
        assert_eq!(solver.candidates().len(), v.len());
        assert!(solver.state().is_unconstrained());
        assert!(solver.history().is_empty());
        assert!(!solver.is_solved());
    }

    #[test]
    fn openings_are_filtered_to_vocabulary() {
        let v = vocab();
        let solver = Solver::new(&v).with_openings(&["soare", "zzzzz", "adieu"]);
        let texts: Vec<&str> = solver.opening_suggestions().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["soare", "adieu"]);
    }

    #[test]
    fn update_then_refine_narrows_space() {
        let v = vocab();
        let mut solver = Solver::new(&v);
        let pattern = feedback(&v, "grate", "crane");

        solver.update_constraints("crane", pattern).unwrap();
        assert_eq!(solver.candidates().len(), v.len());

        let remaining = solver.refine_candidates().unwrap();
        assert!(remaining < v.len());
        assert!(solver.candidates().contains("grate"));
    }

    #[test]
    fn space_shrinks_monotonically() {
        let v = vocab();
        let mut solver = Solver::new(&v);
        let mut previous = solver.candidates().len();

        for guess in ["slate", "crane", "irate"] {
            let remaining = solver.observe(guess, feedback(&v, "grate", guess)).unwrap();
            assert!(remaining <= previous);
            assert!(solver.candidates().contains("grate"));
            previous = remaining;
        }
    }

    #[test]
    fn invalid_guess_is_rejected() {
        let v = vocab();
        let mut solver = Solver::new(&v);
        let err = solver
            .update_constraints("zebra", Pattern::perfect(5))
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGuess {
                guess: "zebra".to_string(),
                reason: GuessRejection::UnknownWord,
            }
        );
        assert!(solver.history().is_empty());
    }

    #[test]
    fn wrong_feedback_length_is_rejected() {
        let v = vocab();
        let mut solver = Solver::new(&v);
        let err = solver
            .update_constraints("crane", Pattern::perfect(4))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFeedback(_)));
        assert!(solver.state().is_unconstrained());
    }

    #[test]
    fn contradictory_feedback_reports_no_candidates() {
        let v = vocab();
        let mut solver = Solver::new(&v);
        // Claim both "adieu" and "trace" are the target
        solver.observe("adieu", Pattern::perfect(5)).unwrap();
        let err = solver.observe("trace", Pattern::perfect(5)).unwrap_err();
        assert_eq!(err, Error::NoCandidatesRemain);
        assert!(solver.candidates().is_empty());

        // Undo restores the previous turn's space
        let (word, _) = solver.undo().unwrap();
        assert_eq!(word.text(), "trace");
        assert_eq!(solver.candidates().len(), 1);
        assert!(solver.candidates().contains("adieu"));
    }

    #[test]
    fn reset_restores_fresh_session() {
        let v = vocab();
        let mut solver = Solver::new(&v);
        solver.observe("crane", feedback(&v, "plate", "crane")).unwrap();
        solver.reset();

        assert_eq!(solver.candidates().len(), v.len());
        assert!(solver.state().is_unconstrained());
        assert!(solver.undo().is_none());
    }

    #[test]
    fn solved_after_perfect_feedback() {
        let v = vocab();
        let mut solver = Solver::new(&v);
        solver.observe("trace", Pattern::perfect(5)).unwrap();
        assert!(solver.is_solved());
        assert_eq!(solver.candidates().len(), 1);
    }

    #[test]
    fn suggestions_come_from_candidates() {
        let v = vocab();
        let mut solver = Solver::new(&v);
        solver.observe("slate", feedback(&v, "grate", "slate")).unwrap();

        let ranking = solver.suggest_top_k(10);
        assert!(!ranking.suggestions.is_empty());
        for suggestion in &ranking.suggestions {
            assert!(solver.candidates().contains(suggestion.word.text()));
            assert!(suggestion.expected_size <= solver.candidates().len() as f64);
        }
    }
}
