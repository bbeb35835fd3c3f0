//! The guessing game
//!
//! Holds a hidden target, validates guesses against the vocabulary and scores
//! them with the shared feedback rule.

use crate::core::{Pattern, Word, evaluate};
use crate::error::{Error, Result};
use crate::wordlists::Vocabulary;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { remaining: usize },
    Won { attempts: usize },
    Lost,
}

/// One game against a hidden target
#[derive(Debug, Clone)]
pub struct Game<'a> {
    vocabulary: &'a Vocabulary,
    target: &'a Word,
    max_attempts: usize,
    attempts: Vec<(&'a Word, Pattern)>,
}

impl<'a> Game<'a> {
    /// Start a game with a chosen target
    ///
    /// # Errors
    /// Returns `Error::InvalidGuess` if the target is not a vocabulary word.
    pub fn with_target(
        vocabulary: &'a Vocabulary,
        target: &str,
        max_attempts: usize,
    ) -> Result<Self> {
        let target = vocabulary.validate_guess(target)?;
        Ok(Self {
            vocabulary,
            target,
            max_attempts,
            attempts: Vec::new(),
        })
    }

    /// Start a game with a target drawn uniformly from the vocabulary
    ///
    /// Returns `None` only for an empty vocabulary.
    pub fn random<R: Rng + ?Sized>(
        vocabulary: &'a Vocabulary,
        max_attempts: usize,
        rng: &mut R,
    ) -> Option<Self> {
        let target = vocabulary.words().choose(rng)?;
        Some(Self {
            vocabulary,
            target,
            max_attempts,
            attempts: Vec::new(),
        })
    }

    /// Score a guess against the hidden target
    ///
    /// The guess is trimmed and lowercased, then must have the right length
    /// and be a vocabulary word.
    ///
    /// # Errors
    /// Returns `Error::InvalidGuess` for a rejected guess and
    /// `Error::GameOver` once the game is won or out of attempts.
    ///
    /// # Examples
    /// ```
    /// use wordle_deduction::game::{Game, GameStatus};
    /// use wordle_deduction::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_strs(5, &["crane", "trace"]).unwrap();
    /// let mut game = Game::with_target(&vocab, "trace", 6).unwrap();
    ///
    /// let pattern = game.evaluate_guess("crane").unwrap();
    /// assert_eq!(pattern.to_string(), "0 1 1 -1 1");
    /// assert_eq!(game.status(), GameStatus::InProgress { remaining: 5 });
    /// ```
    pub fn evaluate_guess(&mut self, guess: &str) -> Result<Pattern> {
        if !matches!(self.status(), GameStatus::InProgress { .. }) {
            return Err(Error::GameOver);
        }

        let vocabulary = self.vocabulary;
        let word = vocabulary.validate_guess(guess)?;
        let pattern = evaluate(self.target, word);
        self.attempts.push((word, pattern));
        Ok(pattern)
    }

    /// The hidden target, for end-of-game disclosure
    #[must_use]
    pub const fn reveal_target(&self) -> &'a Word {
        self.target
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.attempts.last().is_some_and(|(_, p)| p.is_perfect()) {
            GameStatus::Won {
                attempts: self.attempts.len(),
            }
        } else if self.attempts.len() >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress {
                remaining: self.max_attempts - self.attempts.len(),
            }
        }
    }

    /// Guesses so far with their feedback
    #[must_use]
    pub fn attempts(&self) -> &[(&'a Word, Pattern)] {
        &self.attempts
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.vocabulary.word_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuessRejection;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocab() -> Vocabulary {
        Vocabulary::from_strs(5, &["crane", "slate", "trace", "plate", "sheen", "eerie"]).unwrap()
    }

    #[test]
    fn winning_game() {
        let v = vocab();
        let mut game = Game::with_target(&v, "trace", 6).unwrap();

        assert_eq!(game.evaluate_guess("crane").unwrap().count_hits(), 3);
        assert!(game.evaluate_guess("TRACE").unwrap().is_perfect());
        assert_eq!(game.status(), GameStatus::Won { attempts: 2 });
        assert_eq!(game.evaluate_guess("slate"), Err(Error::GameOver));
    }

    #[test]
    fn losing_game() {
        let v = vocab();
        let mut game = Game::with_target(&v, "sheen", 2).unwrap();

        let pattern = game.evaluate_guess("eerie").unwrap();
        assert_eq!(pattern.to_string(), "0 0 -1 -1 -1");
        game.evaluate_guess("slate").unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.reveal_target().text(), "sheen");
        assert_eq!(game.attempts().len(), 2);
    }

    #[test]
    fn invalid_guesses_do_not_use_attempts() {
        let v = vocab();
        let mut game = Game::with_target(&v, "plate", 6).unwrap();

        assert!(matches!(
            game.evaluate_guess("cranes"),
            Err(Error::InvalidGuess { .. })
        ));
        assert!(matches!(
            game.evaluate_guess("zebra"),
            Err(Error::InvalidGuess {
                reason: GuessRejection::UnknownWord,
                ..
            })
        ));
        assert_eq!(game.status(), GameStatus::InProgress { remaining: 6 });
    }

    #[test]
    fn target_must_be_in_vocabulary() {
        let v = vocab();
        assert!(Game::with_target(&v, "zebra", 6).is_err());
    }

    #[test]
    fn random_target_is_from_vocabulary() {
        let v = vocab();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let game = Game::random(&v, 6, &mut rng).unwrap();
            assert!(v.contains(game.reveal_target().text()));
        }
    }
}
