//! Reachable feedback enumeration
//!
//! Of the 3^L possible patterns for a guess, only some remain plausible once
//! feedback has been recorded. Patterns are generated depth-first over the
//! positions and branches are cut as soon as they contradict the state, so
//! unreachable patterns are never built.

use super::ConstraintState;
use crate::core::{Feedback, LetterSet, Pattern, Word};

/// Every feedback pattern for `guess` that is consistent with `state`
///
/// A pattern is rejected when it:
/// - disagrees with a pinned position (a Hit on another letter, or the pinned
///   letter not marked Hit)
/// - marks a letter Hit at a position it is excluded from
/// - marks a known-absent letter Hit or Present
/// - marks every copy of a known-present letter Miss
///
/// Patterns come out in lexicographic order with Miss < Present < Hit and
/// position 0 most significant. A guess whose length differs from the
/// state's has no reachable pattern.
///
/// # Examples
/// ```
/// use wordle_deduction::core::Word;
/// use wordle_deduction::solver::{ConstraintState, reachable_patterns};
///
/// let guess = Word::new("ab").unwrap();
/// let fresh = ConstraintState::new(2);
/// assert_eq!(reachable_patterns(&guess, &fresh).len(), 9);
/// ```
#[must_use]
pub fn reachable_patterns(guess: &Word, state: &ConstraintState) -> Vec<Pattern> {
    let mut out = Vec::new();
    for_each_reachable(guess, state, |pattern| out.push(pattern));
    out
}

/// Streaming form of [`reachable_patterns`]
///
/// Calls `visit` once per reachable pattern, in the same order, without
/// holding them all in memory.
pub fn for_each_reachable<F: FnMut(Pattern)>(guess: &Word, state: &ConstraintState, visit: F) {
    if guess.len() != state.word_len() {
        return;
    }

    let letters = guess.chars();
    let mut last_index = [usize::MAX; 26];
    let mut needs_credit = state.present();
    for (idx, &ch) in letters.iter().enumerate() {
        last_index[letter_index(ch)] = idx;
        if state.excluded_at(idx).contains(ch) {
            needs_credit.insert(ch);
        }
    }

    let mut walker = Walker {
        letters,
        state,
        last_index,
        needs_credit,
        credited: [0; 26],
        codes: Vec::with_capacity(letters.len()),
        visit,
    };
    walker.descend(0);
}

#[inline]
fn letter_index(ch: u8) -> usize {
    usize::from(ch - b'a')
}

struct Walker<'w, F> {
    letters: &'w [u8],
    state: &'w ConstraintState,
    /// Last position of each letter in the guess
    last_index: [usize; 26],
    /// Letters that must be Hit or Present at least once
    needs_credit: LetterSet,
    /// Hit/Present count per letter on the current branch
    credited: [u8; 26],
    codes: Vec<Feedback>,
    visit: F,
}

impl<F: FnMut(Pattern)> Walker<'_, F> {
    fn descend(&mut self, pos: usize) {
        if pos == self.letters.len() {
            (self.visit)(Pattern::from_codes(&self.codes));
            return;
        }

        let ch = self.letters[pos];
        let slot = letter_index(ch);

        for code in Feedback::ALL {
            if !self.allowed_at(pos, ch, code) {
                continue;
            }

            let credit = u8::from(code != Feedback::Miss);
            self.credited[slot] += credit;

            let starved = self.last_index[slot] == pos
                && self.needs_credit.contains(ch)
                && self.credited[slot] == 0;
            if !starved {
                self.codes.push(code);
                self.descend(pos + 1);
                self.codes.pop();
            }

            self.credited[slot] -= credit;
        }
    }

    /// Checks that only depend on this position
    fn allowed_at(&self, pos: usize, ch: u8, code: Feedback) -> bool {
        if let Some(pin) = self.state.pinned(pos) {
            if (code == Feedback::Hit) != (ch == pin) {
                return false;
            }
        }
        if code == Feedback::Hit && self.state.excluded_at(pos).contains(ch) {
            return false;
        }
        !(code != Feedback::Miss && self.state.absent().contains(ch))
    }
}
