//! Prefix and attribute queries
//!
//! Invalid criteria never raise errors: they yield an empty result.

use super::DictionaryIndex;
use crate::core::{WordEntry, is_letters};
use std::collections::BTreeSet;

/// Attribute filter for `DictionaryIndex::search`
///
/// Criteria that are `None` do not filter; those present combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub start: Option<char>,
    pub end: Option<char>,
    pub length: Option<usize>,
}

impl SearchCriteria {
    #[must_use]
    pub const fn new(start: Option<char>, end: Option<char>, length: Option<usize>) -> Self {
        Self { start, end, length }
    }

    #[must_use]
    pub const fn starting_with(mut self, c: char) -> Self {
        self.start = Some(c);
        self
    }

    #[must_use]
    pub const fn ending_with(mut self, c: char) -> Self {
        self.end = Some(c);
        self
    }

    #[must_use]
    pub const fn of_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// True if no criterion is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.length.is_none()
    }

    /// Validate and lower-case the criteria
    ///
    /// Returns `None` when the search must yield nothing: no criterion at all,
    /// a non-alphabetic character, or a zero length.
    fn normalized(self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        let start = match self.start {
            Some(c) => Some(lower_letter(c)?),
            None => None,
        };
        let end = match self.end {
            Some(c) => Some(lower_letter(c)?),
            None => None,
        };
        if self.length == Some(0) {
            return None;
        }
        Some(Self {
            start,
            end,
            length: self.length,
        })
    }

    fn matches(&self, entry: &WordEntry) -> bool {
        self.start.is_none_or(|c| entry.first_char() == Some(c))
            && self.end.is_none_or(|c| entry.last_char() == Some(c))
            && self.length.is_none_or(|len| entry.len() == len)
    }
}

/// Lower-case an alphabetic character that maps to exactly one character
fn lower_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

impl DictionaryIndex {
    /// All words starting with `prefix` (case-insensitive)
    ///
    /// A blank prefix, or one containing anything other than letters, yields an
    /// empty set.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> BTreeSet<String> {
        if !is_letters(prefix) {
            return BTreeSet::new();
        }
        let prefix = prefix.to_ascii_lowercase();

        // Entries are sorted, so the matches form one contiguous run.
        let start = self
            .entries
            .partition_point(|entry| entry.text() < prefix.as_str());
        self.entries[start..]
            .iter()
            .take_while(|entry| entry.text().starts_with(&prefix))
            .map(|entry| entry.text().to_string())
            .collect()
    }

    /// All words matching every provided criterion
    ///
    /// Scans only the smallest bucket selected by the criteria.
    #[must_use]
    pub fn search(&self, criteria: SearchCriteria) -> BTreeSet<String> {
        let Some(criteria) = criteria.normalized() else {
            return BTreeSet::new();
        };

        let mut buckets: Vec<&[usize]> = Vec::with_capacity(3);
        if let Some(c) = criteria.start {
            buckets.push(self.by_first.get(&c).map(Vec::as_slice).unwrap_or_default());
        }
        if let Some(c) = criteria.end {
            buckets.push(self.by_last.get(&c).map(Vec::as_slice).unwrap_or_default());
        }
        if let Some(len) = criteria.length {
            buckets.push(self.length_bucket(len));
        }

        let Some(smallest) = buckets.into_iter().min_by_key(|bucket| bucket.len()) else {
            return BTreeSet::new();
        };

        self.bucket(smallest)
            .filter(|entry| criteria.matches(entry))
            .map(|entry| entry.text().to_string())
            .collect()
    }
}
