//! Game state and guess evaluation
//!
//! Tracks the selected word length and the word currently being spelled.
//! Rounds draw from a [`WordBank`]; guesses are compared case-insensitively.

use crate::core::Word;
use crate::wordbank::WordBank;
use rand::Rng;
use std::fmt;

/// Word length a fresh game starts with
pub const DEFAULT_LENGTH: usize = 5;

/// Result of evaluating a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The guess matched; a replacement word has already been drawn.
    Correct {
        /// The next word to spell
        next: Word,
    },
    /// The guess did not match; the active word is unchanged.
    Incorrect {
        /// The word the user should have spelled, for the caller to reveal
        answer: Word,
    },
}

/// No word of the requested length exists in the bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoMatchingWords {
    /// The length that was asked for
    pub requested: usize,
    /// The closest length that does have words, if the bank is non-empty
    pub nearest: Option<usize>,
}

impl fmt::Display for NoMatchingWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nearest {
            Some(nearest) => write!(
                f,
                "No {}-letter words available (closest length with words: {})",
                self.requested, nearest
            ),
            None => write!(f, "The dictionary is empty"),
        }
    }
}

impl std::error::Error for NoMatchingWords {}

/// Guess evaluated before any round was started
///
/// The UI wiring keeps the guess field unreachable until a round is active,
/// so hitting this is a caller bug rather than a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoActiveRound;

impl fmt::Display for NoActiveRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No round is active")
    }
}

impl std::error::Error for NoActiveRound {}

/// Mutable record of the selected length and the active word
#[derive(Debug, Clone)]
pub struct GameState {
    selected_length: usize,
    current_word: Option<Word>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl GameState {
    /// Create a game state with the given starting length and no active word
    #[must_use]
    pub fn new(selected_length: usize) -> Self {
        Self {
            selected_length: selected_length.max(1),
            current_word: None,
        }
    }

    /// The word length new rounds will draw at
    #[inline]
    #[must_use]
    pub const fn selected_length(&self) -> usize {
        self.selected_length
    }

    /// The word currently being spelled, if a round is active
    #[inline]
    #[must_use]
    pub const fn current_word(&self) -> Option<&Word> {
        self.current_word.as_ref()
    }

    /// Increment the selected length (no upper bound)
    pub fn increase_length(&mut self) {
        self.selected_length += 1;
    }

    /// Decrement the selected length, stopping at the floor of 1
    pub fn decrease_length(&mut self) {
        if self.selected_length > 1 {
            self.selected_length -= 1;
        }
    }

    /// Draw a word of the selected length and make it the active word
    ///
    /// # Errors
    /// Returns [`NoMatchingWords`] when the bank has no word of the selected
    /// length; the previous active word (if any) is left untouched.
    pub fn begin_round<R: Rng + ?Sized>(
        &mut self,
        bank: &WordBank,
        rng: &mut R,
    ) -> Result<&Word, NoMatchingWords> {
        match bank.pick(self.selected_length, rng) {
            Some(word) => Ok(self.current_word.insert(word.clone())),
            None => Err(NoMatchingWords {
                requested: self.selected_length,
                nearest: bank.nearest_length(self.selected_length),
            }),
        }
    }

    /// Compare a guess against the active word
    ///
    /// On a match the replacement word is drawn immediately, so the returned
    /// [`Outcome::Correct`] already names the next word to spell. On a miss
    /// the active word stays in place for the caller to reveal.
    ///
    /// # Errors
    /// Returns [`NoActiveRound`] if called before any round was started.
    pub fn evaluate_guess<R: Rng + ?Sized>(
        &mut self,
        guess: &str,
        bank: &WordBank,
        rng: &mut R,
    ) -> Result<Outcome, NoActiveRound> {
        let answer = self.current_word.clone().ok_or(NoActiveRound)?;

        if answer.matches(guess.trim()) {
            // The bank still holds `answer`, so the draw can only miss if
            // the selected length changed mid-round; repeat the answer then.
            let next = bank
                .pick(self.selected_length, rng)
                .cloned()
                .unwrap_or_else(|| answer.clone());
            self.current_word = Some(next.clone());
            Ok(Outcome::Correct { next })
        } else {
            Ok(Outcome::Incorrect { answer })
        }
    }
}
