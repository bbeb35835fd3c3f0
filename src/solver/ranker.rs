//! Guess ranking by expected remaining candidates
//!
//! For a candidate guess, every reachable feedback pattern is applied to a
//! snapshot of the constraint state and the surviving candidates are counted.
//! The mean of those counts is the guess's expected size; smaller is better.
//! Candidates are scored in parallel since each branch owns its snapshot.

use super::{ConstraintState, SearchSpace, for_each_reachable};
use crate::core::{Pattern, Word, WordError};
use crate::error::{Error, Result};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion<'a> {
    pub word: &'a Word,
    /// Mean candidate count over all reachable patterns
    pub expected_size: f64,
    /// Number of reachable patterns the mean was taken over
    pub pattern_count: usize,
}

/// Result of a ranking pass
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    /// Best suggestions, ascending by expected size then alphabetically
    pub suggestions: Vec<Suggestion<'a>>,
    /// How many candidates received a score
    pub scored: usize,
    /// `false` if the deadline cut the pass short
    pub complete: bool,
}

impl<'a> Ranking<'a> {
    /// The top suggestion, if any
    #[must_use]
    pub fn best(&self) -> Option<&Suggestion<'a>> {
        self.suggestions.first()
    }
}

/// Candidate count left by each reachable pattern of `guess`
#[must_use]
pub fn pattern_sizes(
    guess: &Word,
    space: &SearchSpace<'_>,
    state: &ConstraintState,
) -> Vec<(Pattern, usize)> {
    let mut sizes = Vec::new();
    for_each_reachable(guess, state, |pattern| {
        let hypothetical = state.branch(guess, pattern);
        sizes.push((pattern, space.count_consistent(&hypothetical)));
    });
    sizes
}

/// Mean remaining-candidate count for `guess` and its pattern count
///
/// Patterns are counted as they are generated. Returns `None` when no
/// pattern is reachable, which includes a guess of another length.
#[must_use]
pub fn expected_size(
    guess: &Word,
    space: &SearchSpace<'_>,
    state: &ConstraintState,
) -> Option<(f64, usize)> {
    let mut total = 0usize;
    let mut patterns = 0usize;
    for_each_reachable(guess, state, |pattern| {
        total += space.count_consistent(&state.branch(guess, pattern));
        patterns += 1;
    });
    (patterns > 0).then(|| (total as f64 / patterns as f64, patterns))
}

/// Ranks candidate guesses
///
/// Holds the optional deadline and progress hook for one ranking pass.
#[derive(Default)]
pub struct SuggestionRanker<'p> {
    deadline: Option<Instant>,
    progress: Option<&'p (dyn Fn() + Sync)>,
}

impl<'p> SuggestionRanker<'p> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop scoring new candidates once `deadline` has passed
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Call `progress` after each candidate is scored
    #[must_use]
    pub fn with_progress(mut self, progress: &'p (dyn Fn() + Sync)) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Best `k` guesses drawn from the search space itself
    ///
    /// # Examples
    /// ```
    /// use wordle_deduction::solver::{ConstraintState, SearchSpace, SuggestionRanker};
    /// use wordle_deduction::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_strs(5, &["crane", "slate", "trace", "plate"]).unwrap();
    /// let space = SearchSpace::full(&vocab);
    /// let state = ConstraintState::new(5);
    ///
    /// let ranking = SuggestionRanker::new().top_k(&space, &state, 2);
    /// assert_eq!(ranking.suggestions.len(), 2);
    /// assert!(ranking.suggestions[0].expected_size <= ranking.suggestions[1].expected_size);
    /// ```
    #[must_use]
    pub fn top_k<'a>(
        &self,
        space: &SearchSpace<'a>,
        state: &ConstraintState,
        k: usize,
    ) -> Ranking<'a> {
        self.rank(space.words(), space, state, k)
    }

    /// Best `k` guesses from an arbitrary guess pool
    ///
    /// # Errors
    /// Returns `Error::InvalidGuess` for the first pool word whose length
    /// differs from the state's; nothing is scored in that case.
    pub fn rank_pool<'a>(
        &self,
        pool: &[&'a Word],
        space: &SearchSpace<'_>,
        state: &ConstraintState,
        k: usize,
    ) -> Result<Ranking<'a>> {
        let word_len = state.word_len();
        if let Some(word) = pool.iter().find(|word| word.len() != word_len) {
            return Err(Error::invalid_guess(
                word.text(),
                WordError::InvalidLength {
                    expected: word_len,
                    actual: word.len(),
                },
            ));
        }
        Ok(self.rank(pool, space, state, k))
    }

    /// Ties on expected size are broken alphabetically so results do not
    /// depend on thread scheduling. Words with no reachable pattern are
    /// skipped.
    fn rank<'a>(
        &self,
        pool: &[&'a Word],
        space: &SearchSpace<'_>,
        state: &ConstraintState,
        k: usize,
    ) -> Ranking<'a> {
        let expired = AtomicBool::new(false);

        let mut scored: Vec<Suggestion<'a>> = pool
            .par_iter()
            .filter_map(|&word| {
                if self.past_deadline(&expired) {
                    return None;
                }
                let score = expected_size(word, space, state);
                if let Some(progress) = self.progress {
                    progress();
                }
                score.map(|(expected_size, pattern_count)| Suggestion {
                    word,
                    expected_size,
                    pattern_count,
                })
            })
            .collect();

        let count = scored.len();
        scored.sort_by(|a, b| {
            a.expected_size
                .total_cmp(&b.expected_size)
                .then_with(|| a.word.cmp(b.word))
        });
        scored.truncate(k);

        Ranking {
            suggestions: scored,
            scored: count,
            complete: !expired.load(Ordering::Relaxed),
        }
    }

    fn past_deadline(&self, expired: &AtomicBool) -> bool {
        if expired.load(Ordering::Relaxed) {
            return true;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                expired.store(true, Ordering::Relaxed);
                true
            }
            _ => false,
        }
    }
}
