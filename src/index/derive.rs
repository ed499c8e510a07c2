//! Word sets derived from a seed word or from the whole dictionary

use super::DictionaryIndex;
use crate::core::{WordEntry, is_letters, letter_counts};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Default minimum sub-word length
pub const DEFAULT_MIN_LENGTH: usize = 3;

impl DictionaryIndex {
    /// All dictionary words spellable from the letters of `word`
    ///
    /// A candidate qualifies when its length lies in `[min_length, len(word)]`,
    /// its letter counts fit within the seed's (multiset containment, not
    /// substring), and it is not the seed itself. `min_length` defaults to 3.
    ///
    /// Yields an empty set when `word` is blank or not letters-only, or when
    /// `min_length` is zero or longer than `word`.
    #[must_use]
    pub fn sub_words(&self, word: &str, min_length: Option<usize>) -> BTreeSet<String> {
        if !is_letters(word) {
            return BTreeSet::new();
        }
        let min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        let seed = word.to_ascii_lowercase();
        let max_length = seed.len();
        if min_length == 0 || min_length > max_length {
            return BTreeSet::new();
        }
        let Some(pool) = letter_counts(&seed) else {
            return BTreeSet::new();
        };

        let candidates: Vec<&WordEntry> = (min_length..=max_length)
            .flat_map(|len| self.bucket(self.length_bucket(len)))
            .collect();

        candidates
            .par_iter()
            .filter(|entry| entry.text() != seed && entry.fits_within(&pool))
            .map(|entry| entry.text().to_string())
            .collect()
    }

    /// Other dictionary words using exactly the letters of `word`
    ///
    /// Looked up through the sorted-letter signature bucket. Invalid input
    /// yields an empty set.
    #[must_use]
    pub fn anagrams(&self, word: &str) -> BTreeSet<String> {
        let Ok(seed) = WordEntry::letters_only(word) else {
            return BTreeSet::new();
        };
        self.by_signature
            .get(seed.signature())
            .map(|positions| {
                self.bucket(positions)
                    .filter(|entry| entry.text() != seed.text())
                    .map(|entry| entry.text().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All palindromes of two or more characters
    ///
    /// Computed on first call and cached for the lifetime of the index.
    #[must_use]
    pub fn palindromes(&self) -> &BTreeSet<String> {
        self.palindromes.get_or_init(|| {
            self.entries
                .par_iter()
                .filter(|entry| entry.is_palindrome())
                .map(|entry| entry.text().to_string())
                .collect()
        })
    }
}
