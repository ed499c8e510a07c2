//! Core domain types for the puzzle engine
//!
//! Pure, dependency-light building blocks: normalized dictionary words and the
//! letter scrambler. Nothing here touches shared state.

mod scramble;
mod word;

pub use scramble::{has_distinct_permutation, scramble, scramble_with};
pub use word::{
    ALPHABET_SIZE, LetterCounts, WordEntry, WordError, contains_letters, is_letters,
    letter_counts, normalize,
};
