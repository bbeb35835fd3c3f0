//! Compact letter sets
//!
//! A `LetterSet` is a 26-bit mask over `a..=z`. It is `Copy`, so constraint
//! snapshots can be cloned without touching the heap.

use std::fmt;

/// Set of lowercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Build a set from the letters of a byte slice
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        letters.iter().fold(Self::EMPTY, |mut set, &letter| {
            set.insert(letter);
            set
        })
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let before = self.0;
        self.0 |= Self::bit(letter);
        before != self.0
    }

    /// Remove a letter, returning `true` if it was present
    #[inline]
    pub fn remove(&mut self, letter: u8) -> bool {
        let before = self.0;
        self.0 &= !Self::bit(letter);
        before != self.0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// `true` if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// `true` if the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Letters in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'e'));
        assert!(!set.insert(b'e'));
        assert!(set.contains(b'e'));
        assert_eq!(set.len(), 1);

        assert!(set.remove(b'e'));
        assert!(!set.remove(b'e'));
        assert!(set.is_empty());
    }

    #[test]
    fn from_letters_collapses_duplicates() {
        let set = LetterSet::from_letters(b"sheen");
        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().collect::<Vec<_>>(), b"ehns".to_vec());
    }

    #[test]
    fn subset_and_intersection() {
        let word = LetterSet::from_letters(b"trace");
        let needed = LetterSet::from_letters(b"rc");
        let banned = LetterSet::from_letters(b"nz");

        assert!(needed.is_subset(word));
        assert!(!word.is_subset(needed));
        assert!(!banned.intersects(word));
        assert!(LetterSet::EMPTY.is_subset(word));
    }

    #[test]
    fn display_lists_letters_in_order() {
        let set = LetterSet::from_letters(b"zax");
        assert_eq!(set.to_string(), "{a, x, z}");
        assert_eq!(LetterSet::EMPTY.to_string(), "{}");
    }
}
