//! Dictionary word representation
//!
//! A `WordEntry` stores a normalized (trimmed, lower-cased) word together with the
//! attributes every lexical query needs: its length, a 26-slot letter-frequency
//! vector and a sorted-letter signature for anagram grouping.

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Number of slots in a letter-frequency vector (`a` through `z`)
pub const ALPHABET_SIZE: usize = 26;

/// Per-letter occurrence counts, indexed by `letter - b'a'`
///
/// A count never exceeds the word's byte length, so `usize` cannot overflow.
pub type LetterCounts = [usize; ALPHABET_SIZE];

/// Error type for words that cannot be normalized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be blank")]
    Blank,
    #[error("Word '{0}' must contain only letters a-z")]
    InvalidCharacters(String),
}

/// A normalized dictionary word with cached attributes
///
/// Immutable once constructed. Ordering and equality follow the normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    text: String,
    len: usize,
    counts: Option<LetterCounts>,
    signature: String,
}

impl WordEntry {
    /// Create a new entry from a raw dictionary line
    ///
    /// The line is trimmed and lower-cased. Entries containing characters outside
    /// `a-z` (e.g. "can't") are accepted but carry no frequency vector, so they
    /// never take part in sub-word derivation.
    ///
    /// # Errors
    /// Returns `WordError::Blank` if the line is empty after trimming.
    ///
    /// # Examples
    /// ```
    /// use jumble_engine::core::WordEntry;
    ///
    /// let entry = WordEntry::new("  Yellow ").unwrap();
    /// assert_eq!(entry.text(), "yellow");
    /// assert_eq!(entry.len(), 6);
    /// assert_eq!(entry.signature(), "ellowy");
    ///
    /// assert!(WordEntry::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, WordError> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(WordError::Blank);
        }

        let len = text.chars().count();
        let counts = letter_counts(&text);

        let mut sorted: Vec<char> = text.chars().collect();
        sorted.sort_unstable();
        let signature = sorted.into_iter().collect();

        Ok(Self {
            text,
            len,
            counts,
            signature,
        })
    }

    /// Create an entry that must consist of letters only
    ///
    /// # Errors
    /// Returns `WordError` if the word is blank or contains anything but `a-z`
    /// (in either case).
    pub fn letters_only(raw: &str) -> Result<Self, WordError> {
        let entry = Self::new(raw)?;
        if entry.counts.is_none() {
            return Err(WordError::InvalidCharacters(entry.text));
        }
        Ok(entry)
    }

    /// Get the normalized word
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Entries are never empty; provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Letter-frequency vector, or `None` for entries with non-letter characters
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> Option<&LetterCounts> {
        self.counts.as_ref()
    }

    /// Sorted-letter signature ("yellow" -> "ellowy")
    #[inline]
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    #[must_use]
    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Check whether this word can be spelled from the letters in `pool`
    ///
    /// Multiset containment: every letter count of this word must be covered by
    /// the pool, so "well" fits in "yellow" but "lull" does not.
    #[must_use]
    pub fn fits_within(&self, pool: &LetterCounts) -> bool {
        self.counts
            .as_ref()
            .is_some_and(|counts| contains_letters(pool, counts))
    }

    /// Palindromes must have at least two characters
    #[must_use]
    pub fn is_palindrome(&self) -> bool {
        self.len >= 2 && self.text.chars().eq(self.text.chars().rev())
    }
}

impl Ord for WordEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl PartialOrd for WordEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Trim and lower-case a raw word
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True if `s` is non-empty and made of ASCII letters only
#[must_use]
pub fn is_letters(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Count letters of a lower-case word
///
/// Returns `None` if any character falls outside `a-z`.
#[must_use]
pub fn letter_counts(word: &str) -> Option<LetterCounts> {
    let mut counts = [0usize; ALPHABET_SIZE];
    for byte in word.bytes() {
        if !byte.is_ascii_lowercase() {
            return None;
        }
        counts[usize::from(byte - b'a')] += 1;
    }
    Some(counts)
}

/// Component-wise `inner <= outer`
#[inline]
#[must_use]
pub fn contains_letters(outer: &LetterCounts, inner: &LetterCounts) -> bool {
    inner.iter().zip(outer).all(|(need, have)| need <= have)
}
