//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Miss (letter not in word, once duplicates are accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Hit (letter in correct position)
//!
//! Each position contributes digit × 3^position to the stored value. The
//! external integer encoding is `-1`/`0`/`1` for Miss/Present/Hit.

use super::Word;
use super::word::{MAX_WORD_LEN, WordError};
use std::fmt;
use thiserror::Error;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Letter not in the target (or all its copies already credited)
    Miss,
    /// Letter in the target at another position
    Present,
    /// Letter at this exact position
    Hit,
}

impl Feedback {
    /// All codes in enumeration order
    pub const ALL: [Self; 3] = [Self::Miss, Self::Present, Self::Hit];

    const fn digit(self) -> u32 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            0 => Self::Miss,
            1 => Self::Present,
            _ => Self::Hit,
        }
    }

    /// Decode the external integer form (`-1`, `0`, `1`)
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Self::Miss),
            0 => Some(Self::Present),
            1 => Some(Self::Hit),
            _ => None,
        }
    }

    /// Encode to the external integer form
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::Miss => -1,
            Self::Present => 0,
            Self::Hit => 1,
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Miss),
            _ => None,
        }
    }

    /// Emoji square for display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Miss => '⬜',
            Self::Present => '🟨',
            Self::Hit => '🟩',
        }
    }
}

/// Error type for malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("expected {expected} feedback codes, got {actual}")]
    WrongCount { expected: usize, actual: usize },
    #[error("feedback code '{0}' is not one of -1, 0, 1")]
    InvalidCode(String),
    #[error("feedback symbol '{0}' is not one of G, Y, -")]
    InvalidSymbol(char),
    #[error("no feedback given")]
    Empty,
}

/// Feedback pattern for a guess
///
/// Stores the per-position codes as a base-3 number together with the word
/// length, so patterns are `Copy` and cheap to hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    value: u32,
    len: u8,
}

impl Pattern {
    /// Build a pattern from per-position codes
    ///
    /// # Panics
    /// Panics in debug mode if more than [`MAX_WORD_LEN`] codes are given
    #[must_use]
    pub fn from_codes(codes: &[Feedback]) -> Self {
        debug_assert!(codes.len() <= MAX_WORD_LEN, "pattern too long");

        let mut value = 0u32;
        let mut multiplier = 1u32;
        for code in codes {
            value += code.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self {
            value,
            len: codes.len() as u8,
        }
    }

    /// The all-Hit pattern of the given length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::from_codes(&vec![Feedback::Hit; len])
    }

    /// Get the raw base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Feedback at one position
    ///
    /// # Panics
    /// Panics in debug mode if `position >= self.len()`
    #[must_use]
    pub fn code_at(self, position: usize) -> Feedback {
        debug_assert!(position < self.len());
        Feedback::from_digit((self.value / 3u32.pow(position as u32)) % 3)
    }

    /// Per-position codes in order
    pub fn codes(self) -> impl Iterator<Item = Feedback> {
        let mut val = self.value;
        (0..self.len()).map(move |_| {
            let code = Feedback::from_digit(val % 3);
            val /= 3;
            code
        })
    }

    /// Check if this is a perfect match (all Hits)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.count_hits() == self.len()
    }

    /// Count the number of Hit positions
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.codes().filter(|&c| c == Feedback::Hit).count()
    }

    /// Count the number of Present positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.codes().filter(|&c| c == Feedback::Present).count()
    }

    /// Parse feedback typed by a user
    ///
    /// Accepts the whitespace-separated integer form (`-1 0 1 1 -1`) or the
    /// compact symbol form (`-YGG-`, `⬜🟨🟩🟩⬜`).
    ///
    /// # Errors
    /// Returns `FeedbackError` for out-of-range codes or unknown symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_deduction::core::{Feedback, Pattern};
    ///
    /// let p1 = Pattern::parse("-1 0 1 1 -1").unwrap();
    /// let p2 = Pattern::parse("-YGG-").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.code_at(2), Feedback::Hit);
    ///
    /// assert!(Pattern::parse("2 0 1 1 0").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, FeedbackError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let integer_form =
            tokens.len() > 1 || tokens.first().is_some_and(|t| t.parse::<i64>().is_ok());

        let codes = if integer_form {
            tokens
                .iter()
                .map(|token| {
                    token
                        .parse::<i8>()
                        .ok()
                        .and_then(Feedback::from_code)
                        .ok_or_else(|| FeedbackError::InvalidCode((*token).to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            input
                .trim()
                .chars()
                .map(|ch| Feedback::from_symbol(ch).ok_or(FeedbackError::InvalidSymbol(ch)))
                .collect::<Result<Vec<_>, _>>()?
        };

        if codes.is_empty() {
            return Err(FeedbackError::Empty);
        }
        if codes.len() > MAX_WORD_LEN {
            return Err(FeedbackError::WrongCount {
                expected: MAX_WORD_LEN,
                actual: codes.len(),
            });
        }

        Ok(Self::from_codes(&codes))
    }

    /// Parse feedback that must cover exactly `len` positions
    ///
    /// # Errors
    /// Returns `FeedbackError::WrongCount` on a count mismatch, or any error
    /// from [`Pattern::parse`].
    pub fn parse_with_len(input: &str, len: usize) -> Result<Self, FeedbackError> {
        let pattern = Self::parse(input)?;
        if pattern.len() == len {
            Ok(pattern)
        } else {
            Err(FeedbackError::WrongCount {
                expected: len,
                actual: pattern.len(),
            })
        }
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.codes().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.codes().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", code.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Calculate the feedback when `guess` is played against `target`
///
/// Implements the two-pass duplicate-letter rule:
/// 1. Mark every exact position match as Hit and consume that letter
/// 2. In position order, mark remaining letters Present while the target
///    still has an unconsumed copy, otherwise Miss
///
/// Both words must have the same length; see [`try_evaluate`] for the
/// checked form.
///
/// # Panics
/// Panics if `target` and `guess` differ in length.
///
/// # Examples
/// ```
/// use wordle_deduction::core::{Feedback, Word, evaluate};
///
/// let target = Word::new("trace").unwrap();
/// let guess = Word::new("crane").unwrap();
/// let pattern = evaluate(&target, &guess);
///
/// let codes: Vec<Feedback> = pattern.codes().collect();
/// assert_eq!(
///     codes,
///     [Feedback::Present, Feedback::Hit, Feedback::Hit, Feedback::Miss, Feedback::Hit]
/// );
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Pattern {
    assert_eq!(
        target.len(),
        guess.len(),
        "evaluate needs equal-length words"
    );

    let mut result = vec![Feedback::Miss; guess.len()];
    let mut available = target.char_counts();

    // The passes must stay separate: Hits consume letters before any
    // Present is credited.
    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            result[i] = Feedback::Hit;
            available[usize::from(g - b'a')] -= 1;
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == Feedback::Hit {
            continue;
        }
        let count = &mut available[usize::from(g - b'a')];
        if *count > 0 {
            result[i] = Feedback::Present;
            *count -= 1;
        }
    }

    Pattern::from_codes(&result)
}

/// Checked form of [`evaluate`]
///
/// # Errors
/// Returns `WordError::InvalidLength` if `guess` and `target` differ in length.
pub fn try_evaluate(target: &Word, guess: &Word) -> Result<Pattern, WordError> {
    if target.len() == guess.len() {
        Ok(evaluate(target, guess))
    } else {
        Err(WordError::InvalidLength {
            expected: target.len(),
            actual: guess.len(),
        })
    }
}
