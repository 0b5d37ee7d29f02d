//! Spellquest
//!
//! A terminal spelling game: pick a word length, listen to a randomly chosen
//! word spoken by the system voice, and type its spelling.
//!
//! # Quick Start
//!
//! ```rust
//! use spellquest::core::{GameState, Outcome, Word};
//! use spellquest::wordbank::WordBank;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let bank = WordBank::new(vec![Word::new("apple").unwrap()]);
//! let mut game = GameState::new(5);
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! game.begin_round(&bank, &mut rng).unwrap();
//! let outcome = game.evaluate_guess("APPLE", &bank, &mut rng).unwrap();
//! assert!(matches!(outcome, Outcome::Correct { .. }));
//! ```

// Core domain types
pub mod core;

// The word source
pub mod wordbank;

// Speech output
pub mod speech;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
