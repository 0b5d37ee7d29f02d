//! The word source
//!
//! Holds the dictionary, indexes it by word length, and hands out uniformly
//! random words of a requested length. The embedded list is compiled into
//! the binary; a custom list can be loaded from a file instead.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;

/// Immutable dictionary with a length index
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

impl WordBank {
    /// Build a bank from already-validated words
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (i, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(i);
        }

        Self { words, by_length }
    }

    /// Build a bank from the embedded dictionary
    #[must_use]
    pub fn from_embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Pick a uniformly random word of exactly the given length
    ///
    /// Returns `None` when the bank has no word of that length.
    pub fn pick<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        self.by_length
            .get(&length)?
            .choose(rng)
            .map(|&i| &self.words[i])
    }

    /// Number of words of the given length
    #[must_use]
    pub fn count_of(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }

    /// All lengths that have at least one word, sorted ascending
    #[must_use]
    pub fn available_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// The length closest to `length` that has words
    ///
    /// Ties resolve toward the shorter length. Returns `None` only for an
    /// empty bank.
    #[must_use]
    pub fn nearest_length(&self, length: usize) -> Option<usize> {
        self.available_lengths()
            .into_iter()
            .min_by_key(|&l| (l.abs_diff(length), l))
    }

    /// Total number of words in the bank
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the bank holds no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank(words: &[&str]) -> WordBank {
        WordBank::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn pick_returns_word_of_requested_length() {
        let bank = bank(&["apple", "grape", "mango", "fig", "ox", "banana"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = bank.pick(5, &mut rng).unwrap();
            assert_eq!(word.len(), 5);
            assert!(["apple", "grape", "mango"].contains(&word.text()));
        }
    }

    #[test]
    fn pick_every_available_length() {
        let bank = bank(&["a", "ox", "fig", "apple", "banana"]);
        let mut rng = StdRng::seed_from_u64(7);

        for length in [1, 2, 3, 5, 6] {
            let word = bank.pick(length, &mut rng).unwrap();
            assert_eq!(word.len(), length);
        }
    }

    #[test]
    fn pick_missing_length_is_none() {
        let bank = bank(&["apple", "fig"]);
        let mut rng = StdRng::seed_from_u64(7);

        assert!(bank.pick(4, &mut rng).is_none());
        assert!(bank.pick(12, &mut rng).is_none());
    }

    #[test]
    fn pick_from_empty_bank_is_none() {
        let bank = WordBank::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(7);

        assert!(bank.pick(5, &mut rng).is_none());
        assert!(bank.is_empty());
    }

    #[test]
    fn count_of_groups_by_length() {
        let bank = bank(&["apple", "grape", "fig", "ox"]);

        assert_eq!(bank.count_of(5), 2);
        assert_eq!(bank.count_of(3), 1);
        assert_eq!(bank.count_of(2), 1);
        assert_eq!(bank.count_of(9), 0);
        assert_eq!(bank.len(), 4);
    }

    #[test]
    fn available_lengths_sorted() {
        let bank = bank(&["banana", "ox", "apple", "fig"]);
        assert_eq!(bank.available_lengths(), vec![2, 3, 5, 6]);
    }

    #[test]
    fn nearest_length_picks_closest() {
        let bank = bank(&["ox", "apple", "banana"]);

        assert_eq!(bank.nearest_length(5), Some(5));
        assert_eq!(bank.nearest_length(7), Some(6));
        assert_eq!(bank.nearest_length(3), Some(2));
        assert_eq!(bank.nearest_length(100), Some(6));
    }

    #[test]
    fn nearest_length_tie_prefers_shorter() {
        let bank = bank(&["fig", "apple"]);
        // 4 is equidistant from 3 and 5
        assert_eq!(bank.nearest_length(4), Some(3));
    }

    #[test]
    fn nearest_length_empty_bank() {
        let bank = WordBank::new(Vec::new());
        assert_eq!(bank.nearest_length(5), None);
    }

    #[test]
    fn embedded_dictionary_is_usable() {
        let bank = WordBank::from_embedded();
        assert_eq!(bank.len(), WORDS_COUNT);
        assert!(bank.count_of(5) > 0);
    }
}
