//! Dictionary index
//!
//! An immutable, pre-bucketed view over a word list. Every query is a pure
//! function of the index and its arguments, so one instance can be shared by
//! any number of readers without synchronization.

mod derive;
mod search;

pub use derive::DEFAULT_MIN_LENGTH;
pub use search::SearchCriteria;

use crate::core::WordEntry;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::info;

/// Read-only word index
///
/// Entries are stored sorted and deduplicated; the bucket maps hold positions
/// into that sorted vector, so every bucket is itself in lexicographic order.
///
/// # Examples
/// ```
/// use jumble_engine::index::DictionaryIndex;
///
/// let index = DictionaryIndex::from_text("Yellow\nlow\n\nowl\nwell\nLOW\n");
/// assert_eq!(index.len(), 4);
/// assert!(index.exists("LOW"));
///
/// let subs: Vec<String> = index.sub_words("yellow", None).into_iter().collect();
/// assert_eq!(subs, ["low", "owl", "well"]);
/// ```
#[derive(Debug)]
pub struct DictionaryIndex {
    entries: Vec<WordEntry>,
    lookup: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<usize>>,
    by_first: FxHashMap<char, Vec<usize>>,
    by_last: FxHashMap<char, Vec<usize>>,
    by_signature: FxHashMap<String, Vec<usize>>,
    palindromes: OnceLock<BTreeSet<String>>,
}

impl DictionaryIndex {
    /// Build an index from raw words
    ///
    /// Each word is trimmed and lower-cased; blank words are dropped and
    /// duplicates collapse to a single entry. Source order has no effect.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        let mut entries: Vec<WordEntry> = words
            .into_iter()
            .filter_map(|raw| WordEntry::new(raw.as_ref()).ok())
            .inspect(|_| seen += 1)
            .collect();
        entries.sort_unstable();
        entries.dedup();

        let mut index = Self {
            lookup: FxHashSet::default(),
            by_length: FxHashMap::default(),
            by_first: FxHashMap::default(),
            by_last: FxHashMap::default(),
            by_signature: FxHashMap::default(),
            palindromes: OnceLock::new(),
            entries: Vec::new(),
        };

        for (pos, entry) in entries.iter().enumerate() {
            index.lookup.insert(entry.text().to_string());
            index.by_length.entry(entry.len()).or_default().push(pos);
            if let Some(first) = entry.first_char() {
                index.by_first.entry(first).or_default().push(pos);
            }
            if let Some(last) = entry.last_char() {
                index.by_last.entry(last).or_default().push(pos);
            }
            index
                .by_signature
                .entry(entry.signature().to_string())
                .or_default()
                .push(pos);
        }
        index.entries = entries;

        info!(
            entries = index.entries.len(),
            duplicates = seen - index.entries.len(),
            lengths = index.by_length.len(),
            "dictionary index built"
        );
        index
    }

    /// Build an index from newline-delimited text
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Number of distinct entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in lexicographic order
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Case-insensitive exact membership test
    ///
    /// Surrounding whitespace is not stripped, so `" owl "` is not a member.
    /// Blank input is never a member.
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        !word.trim().is_empty() && self.lookup.contains(&word.to_lowercase())
    }

    /// Pick a random word, optionally restricted to an exact length
    ///
    /// Returns `None` if no entry has the requested length.
    #[must_use]
    pub fn random_word(&self, length: Option<usize>) -> Option<&str> {
        self.random_word_with(length, &mut rand::rng())
    }

    /// `random_word` with a caller-supplied RNG
    pub fn random_word_with<R: Rng + ?Sized>(
        &self,
        length: Option<usize>,
        rng: &mut R,
    ) -> Option<&str> {
        let entry = match length {
            None => self.entries.choose(rng)?,
            Some(len) => {
                let pos = self.by_length.get(&len)?.choose(rng)?;
                &self.entries[*pos]
            }
        };
        Some(entry.text())
    }

    /// Resolve a bucket of positions to entries
    fn bucket(&self, positions: &[usize]) -> impl Iterator<Item = &WordEntry> {
        positions.iter().map(|&pos| &self.entries[pos])
    }

    fn length_bucket(&self, len: usize) -> &[usize] {
        self.by_length.get(&len).map(Vec::as_slice).unwrap_or_default()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn build_normalizes_and_dedups() {
        let index = DictionaryIndex::from_text("  Apple\napple\n\n  \nAPPLE\nbanana\r\n");
        assert_eq!(index.len(), 2);
        let texts: Vec<&str> = index.entries().iter().map(WordEntry::text).collect();
        assert_eq!(texts, ["apple", "banana"]);
    }

    #[test]
    fn build_order_independent() {
        let a = DictionaryIndex::from_words(["owl", "low", "yellow"]);
        let b = DictionaryIndex::from_words(["yellow", "owl", "low"]);
        assert_eq!(a.entries(), b.entries());
        assert_eq!(a.sub_words("yellow", None), b.sub_words("yellow", None));
    }

    #[test]
    fn exists_case_insensitive() {
        let index = fixtures::index();
        assert!(index.exists("yellow"));
        assert!(index.exists("YeLLoW"));
        assert!(!index.exists("owls"));
    }

    #[test]
    fn exists_does_not_trim() {
        let index = fixtures::index();
        assert!(index.exists("owl"));
        assert!(!index.exists(" owl "));
        assert!(!index.exists("owl\n"));
    }

    #[test]
    fn exists_blank_is_false() {
        let index = fixtures::index();
        assert!(!index.exists(""));
        assert!(!index.exists("   "));
    }

    #[test]
    fn random_word_any_length() {
        let index = fixtures::index();
        for _ in 0..20 {
            let word = index.random_word(None).unwrap();
            assert!(index.exists(word));
        }
    }

    #[test]
    fn random_word_exact_length() {
        let index = fixtures::index();
        for _ in 0..20 {
            let word = index.random_word(Some(6)).unwrap();
            assert_eq!(word.len(), 6);
            assert!(index.exists(word));
        }
    }

    #[test]
    fn random_word_missing_length_is_none() {
        let index = fixtures::index();
        assert!(index.random_word(Some(42)).is_none());
        assert!(index.random_word(Some(0)).is_none());
    }

    #[test]
    fn random_word_empty_index_is_none() {
        let index = DictionaryIndex::from_text("\n\n");
        assert!(index.is_empty());
        assert!(index.random_word(None).is_none());
    }

    #[test]
    fn random_word_covers_bucket() {
        let index = DictionaryIndex::from_words(["cat", "dog", "owl", "yellow"]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(index.random_word_with(Some(3), &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }
}
