//! Core domain types for the spelling game
//!
//! The validated word type and the game state the whole application
//! revolves around. Everything here is driven through explicit parameters
//! (bank, RNG) so it can be tested deterministically.

mod game;
mod word;

pub use game::{DEFAULT_LENGTH, GameState, NoActiveRound, NoMatchingWords, Outcome};
pub use word::{Word, WordError};
