//! Accumulated knowledge from feedback
//!
//! A [`ConstraintState`] records what every (guess, feedback) pair so far has
//! revealed: pinned positions, letters excluded from specific positions, and
//! the global sets of letters known present or absent.

use crate::core::{Feedback, FeedbackError, LetterSet, Pattern, Word, WordError};
use crate::error::{Error, Result};
use std::fmt;

/// Knowledge derived from all feedback seen so far
///
/// The state is a small value: letter sets are bitmasks, so hypothetical
/// branches take snapshots with [`ConstraintState::with_feedback`] instead of
/// copying maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    pinned: Vec<Option<u8>>,
    excluded_at: Vec<LetterSet>,
    present: LetterSet,
    absent: LetterSet,
}

impl ConstraintState {
    /// Empty state for words of `word_len` letters
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        Self {
            pinned: vec![None; word_len],
            excluded_at: vec![LetterSet::EMPTY; word_len],
            present: LetterSet::EMPTY,
            absent: LetterSet::EMPTY,
        }
    }

    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.pinned.len()
    }

    /// Letter known to sit at `position`, if any
    #[inline]
    #[must_use]
    pub fn pinned(&self, position: usize) -> Option<u8> {
        self.pinned[position]
    }

    /// Letters known present but not at `position`
    #[inline]
    #[must_use]
    pub fn excluded_at(&self, position: usize) -> LetterSet {
        self.excluded_at[position]
    }

    /// Letters known to appear somewhere in the target
    #[inline]
    #[must_use]
    pub const fn present(&self) -> LetterSet {
        self.present
    }

    /// Letters known not to appear in the target
    #[inline]
    #[must_use]
    pub const fn absent(&self) -> LetterSet {
        self.absent
    }

    /// `true` if no feedback has been recorded
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.present.is_empty()
            && self.absent.is_empty()
            && self.pinned.iter().all(Option::is_none)
            && self.excluded_at.iter().all(|set| set.is_empty())
    }

    /// Record the feedback for a real guess
    ///
    /// # Errors
    /// Returns `Error::InvalidGuess` if the guess length differs from the
    /// state's word length and `Error::InvalidFeedback` if the pattern does.
    /// The state is left untouched on error.
    ///
    /// # Examples
    /// ```
    /// use wordle_deduction::core::{Pattern, Word};
    /// use wordle_deduction::solver::ConstraintState;
    ///
    /// let mut state = ConstraintState::new(5);
    /// let guess = Word::new("crane").unwrap();
    /// state.update(&guess, Pattern::parse("0 1 1 -1 1").unwrap()).unwrap();
    ///
    /// assert_eq!(state.pinned(1), Some(b'r'));
    /// assert!(state.excluded_at(0).contains(b'c'));
    /// assert!(state.absent().contains(b'n'));
    /// ```
    pub fn update(&mut self, guess: &Word, pattern: Pattern) -> Result<()> {
        self.check(guess, pattern)?;
        self.apply(guess, pattern);
        Ok(())
    }

    /// Snapshot of this state with one more (hypothetical) feedback applied
    ///
    /// # Errors
    /// Same length checks as [`ConstraintState::update`].
    pub fn with_feedback(&self, guess: &Word, pattern: Pattern) -> Result<Self> {
        self.check(guess, pattern)?;
        Ok(self.branch(guess, pattern))
    }

    /// Unchecked [`ConstraintState::with_feedback`] for callers that have
    /// already matched the lengths
    pub(super) fn branch(&self, guess: &Word, pattern: Pattern) -> Self {
        let mut next = self.clone();
        next.apply(guess, pattern);
        next
    }

    fn check(&self, guess: &Word, pattern: Pattern) -> Result<()> {
        let word_len = self.word_len();
        if guess.len() != word_len {
            return Err(Error::invalid_guess(
                guess.text(),
                WordError::InvalidLength {
                    expected: word_len,
                    actual: guess.len(),
                },
            ));
        }
        if pattern.len() != word_len {
            return Err(FeedbackError::WrongCount {
                expected: word_len,
                actual: pattern.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Positions are applied in order, so a Miss followed by a Hit of the
    /// same letter in one guess leaves the letter present, not absent.
    fn apply(&mut self, guess: &Word, pattern: Pattern) {
        debug_assert_eq!(guess.len(), self.word_len());
        debug_assert_eq!(pattern.len(), self.word_len());

        for (idx, (&ch, code)) in guess.chars().iter().zip(pattern.codes()).enumerate() {
            match code {
                Feedback::Hit => {
                    self.present.insert(ch);
                    self.absent.remove(ch);
                    self.pinned[idx] = Some(ch);
                }
                Feedback::Present => {
                    self.present.insert(ch);
                    self.excluded_at[idx].insert(ch);
                }
                Feedback::Miss => {
                    // A Miss on a known letter only rules out this position
                    if self.present.contains(ch) {
                        self.excluded_at[idx].insert(ch);
                    } else {
                        self.absent.insert(ch);
                    }
                }
            }
        }
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pins: String = self
            .pinned
            .iter()
            .map(|pin| pin.map_or('_', char::from))
            .collect();
        writeln!(f, "pinned:   {pins}")?;

        write!(f, "excluded:")?;
        for (idx, set) in self.excluded_at.iter().enumerate() {
            if !set.is_empty() {
                write!(f, " {idx}:{set}")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "present:  {}", self.present)?;
        write!(f, "absent:   {}", self.absent)
    }
}
