//! Word analysis command
//!
//! Scores a single word as an opening guess: how many feedback patterns it
//! can produce and how many candidates each would leave.

use crate::core::Pattern;
use crate::error::Result;
use crate::solver::{ConstraintState, SearchSpace, pattern_sizes};
use crate::wordlists::Vocabulary;

/// Largest buckets kept in the result
const TOP_BUCKETS: usize = 5;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub total_candidates: usize,
    /// Patterns not ruled out by the (empty) state
    pub reachable_patterns: usize,
    /// Patterns that leave at least one candidate
    pub occupied_patterns: usize,
    /// Mean candidates left over all reachable patterns
    pub expected_size: f64,
    /// Most candidates any single pattern leaves
    pub worst_case: usize,
    /// Largest buckets, biggest first
    pub largest: Vec<(Pattern, usize)>,
}

/// Analyze `word` against the full vocabulary
///
/// # Errors
///
/// Returns `Error::InvalidGuess` if the word is malformed or not in the
/// vocabulary.
///
/// # Examples
/// ```
/// use wordle_deduction::commands::analyze_word;
/// use wordle_deduction::wordlists::Vocabulary;
///
/// let vocab = Vocabulary::from_strs(5, &["crane", "slate", "trace", "plate"]).unwrap();
/// let result = analyze_word(&vocab, "slate").unwrap();
///
/// assert_eq!(result.reachable_patterns, 243);
/// assert_eq!(result.total_candidates, 4);
/// assert!(result.worst_case <= 4);
/// ```
pub fn analyze_word(vocabulary: &Vocabulary, word: &str) -> Result<AnalysisResult> {
    let guess = vocabulary.validate_guess(word)?;
    let space = SearchSpace::full(vocabulary);
    let state = ConstraintState::new(vocabulary.word_len());

    let mut sizes = pattern_sizes(guess, &space, &state);
    let reachable_patterns = sizes.len();
    let total: usize = sizes.iter().map(|&(_, size)| size).sum();
    let expected_size = if reachable_patterns == 0 {
        0.0
    } else {
        total as f64 / reachable_patterns as f64
    };

    sizes.retain(|&(_, size)| size > 0);
    sizes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let occupied_patterns = sizes.len();
    let worst_case = sizes.first().map_or(0, |&(_, size)| size);
    sizes.truncate(TOP_BUCKETS);

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        total_candidates: space.len(),
        reachable_patterns,
        occupied_patterns,
        expected_size,
        worst_case,
        largest: sizes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn vocab() -> Vocabulary {
        Vocabulary::from_strs(
            5,
            &["crane", "slate", "trace", "plate", "crate", "grate", "irate"],
        )
        .unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let v = vocab();
        let result = analyze_word(&v, "SLATE").unwrap();

        assert_eq!(result.word, "slate");
        assert_eq!(result.total_candidates, 7);
        assert_eq!(result.reachable_patterns, 243);
        assert!(result.occupied_patterns >= 1);
        assert!(result.expected_size > 0.0);
        assert!(result.worst_case <= 7);
    }

    #[test]
    fn buckets_cover_every_candidate() {
        let v = vocab();
        let result = analyze_word(&v, "crane").unwrap();

        // No repeated letters, so every word fits exactly one pattern
        assert!(result.occupied_patterns <= v.len());
        let listed: usize = result.largest.iter().map(|&(_, size)| size).sum();
        assert!(listed <= v.len());
        for pair in result.largest.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(result.largest.first().map(|&(_, s)| s), Some(result.worst_case));
    }

    #[test]
    fn analyze_unknown_word() {
        let v = vocab();
        assert!(matches!(
            analyze_word(&v, "zebra"),
            Err(Error::InvalidGuess { .. })
        ));
    }
}
