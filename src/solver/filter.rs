//! Candidate filtering
//!
//! Narrows a vocabulary down to the words consistent with a [`ConstraintState`].

use super::ConstraintState;
use crate::core::Word;
use crate::wordlists::Vocabulary;

/// Check a single word against the accumulated constraints
///
/// A word survives if every pinned position matches, no position holds a
/// letter excluded there, every known-present letter occurs and no
/// known-absent letter occurs. A word of another length never survives.
#[must_use]
pub fn is_consistent(word: &Word, state: &ConstraintState) -> bool {
    if word.len() != state.word_len() {
        return false;
    }

    let letters = word.letter_set();
    if !state.present().is_subset(letters) || state.absent().intersects(letters) {
        return false;
    }

    word.chars().iter().enumerate().all(|(idx, &ch)| {
        state.pinned(idx).is_none_or(|pin| pin == ch) && !state.excluded_at(idx).contains(ch)
    })
}

/// Words of the vocabulary still consistent with all feedback
///
/// Borrowed from a [`Vocabulary`]; refining produces a new, smaller space and
/// never touches the vocabulary itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpace<'a> {
    words: Vec<&'a Word>,
}

impl<'a> SearchSpace<'a> {
    /// Every word of the vocabulary
    #[must_use]
    pub fn full(vocabulary: &'a Vocabulary) -> Self {
        Self {
            words: vocabulary.words().iter().collect(),
        }
    }

    /// Space over an explicit word list
    #[must_use]
    pub fn from_words(words: Vec<&'a Word>) -> Self {
        Self { words }
    }

    /// Subset consistent with `state`
    ///
    /// # Examples
    /// ```
    /// use wordle_deduction::core::{Word, evaluate};
    /// use wordle_deduction::solver::{ConstraintState, SearchSpace};
    /// use wordle_deduction::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_strs(5, &["crane", "slate", "trace", "plate"]).unwrap();
    /// let target = Word::new("trace").unwrap();
    /// let guess = Word::new("crane").unwrap();
    ///
    /// let mut state = ConstraintState::new(5);
    /// state.update(&guess, evaluate(&target, &guess)).unwrap();
    ///
    /// let space = SearchSpace::full(&vocab).refine(&state);
    /// assert_eq!(space.len(), 1);
    /// assert!(space.contains("trace"));
    /// ```
    #[must_use]
    pub fn refine(&self, state: &ConstraintState) -> Self {
        Self {
            words: self
                .words
                .iter()
                .copied()
                .filter(|word| is_consistent(word, state))
                .collect(),
        }
    }

    /// Size of [`SearchSpace::refine`] without building the subset
    #[must_use]
    pub fn count_consistent(&self, state: &ConstraintState) -> usize {
        self.words
            .iter()
            .filter(|word| is_consistent(word, state))
            .count()
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

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.words.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, evaluate};

    fn vocab() -> Vocabulary {
        Vocabulary::from_strs(
            5,
            &[
                "crane", "slate", "trace", "plate", "crate", "grate", "sheen", "geese", "eerie",
                "speed",
            ],
        )
        .unwrap()
    }

    fn state_after(guess: &str, pattern: &str) -> ConstraintState {
        let mut state = ConstraintState::new(5);
        state
            .update(&Word::new(guess).unwrap(), Pattern::parse(pattern).unwrap())
            .unwrap();
        state
    }

    #[test]
    fn empty_state_keeps_everything() {
        let v = vocab();
        let space = SearchSpace::full(&v);
        let state = ConstraintState::new(5);
        assert_eq!(space.refine(&state).len(), v.len());
    }

    #[test]
    fn pins_and_absent_letters_filter() {
        let v = vocab();
        // c, n absent; r, a, e pinned
        let state = state_after("crane", "-1 1 1 -1 1");
        let space = SearchSpace::full(&v).refine(&state);

        let texts: Vec<&str> = space.iter().map(Word::text).collect();
        assert_eq!(texts, ["grate"]);
    }

    #[test]
    fn excluded_position_filters() {
        let v = vocab();
        // s present but not first; everything else absent
        let state = state_after("slate", "0 -1 -1 -1 -1");
        assert!(!is_consistent(&Word::new("speed").unwrap(), &state));
        assert!(SearchSpace::full(&v).refine(&state).is_empty());
    }

    #[test]
    fn known_present_letters_are_required() {
        let state = state_after("crane", "-1 -1 0 -1 -1");
        assert!(!is_consistent(&Word::new("speed").unwrap(), &state));
        assert!(!is_consistent(&Word::new("crane").unwrap(), &state));
    }

    #[test]
    fn other_lengths_are_never_consistent() {
        let state = ConstraintState::new(5);
        assert!(!is_consistent(&Word::new("cranes").unwrap(), &state));
        assert!(!is_consistent(&Word::new("cat").unwrap(), &state));

        let mixed = [Word::new("crane").unwrap(), Word::new("cranes").unwrap()];
        let space = SearchSpace::from_words(mixed.iter().collect());
        assert_eq!(space.count_consistent(&state), 1);
        assert!(space.refine(&state).contains("crane"));
    }

    #[test]
    fn refine_is_idempotent() {
        let v = vocab();
        let state = state_after("slate", "-1 -1 0 0 1");
        let once = SearchSpace::full(&v).refine(&state);
        let twice = once.refine(&state);
        assert_eq!(once, twice);
        assert_eq!(once.count_consistent(&state), once.len());
    }

    #[test]
    fn true_target_survives_its_own_feedback() {
        let v = vocab();
        for target in v.words() {
            for guess in v.words() {
                let mut state = ConstraintState::new(5);
                state.update(guess, evaluate(target, guess)).unwrap();
                assert!(
                    is_consistent(target, &state),
                    "{target} rejected after guessing {guess}"
                );
            }
        }
    }

    #[test]
    fn end_to_end_trace_example() {
        let v = Vocabulary::from_strs(5, &["crane", "slate", "trace", "plate"]).unwrap();
        let target = Word::new("trace").unwrap();
        let guess = Word::new("crane").unwrap();
        let pattern = evaluate(&target, &guess);
        assert_eq!(pattern, Pattern::parse("0 1 1 -1 1").unwrap());

        let mut state = ConstraintState::new(5);
        state.update(&guess, pattern).unwrap();
        let space = SearchSpace::full(&v).refine(&state);

        assert_eq!(space.len(), 1);
        assert!(space.contains("trace"));
    }
}
