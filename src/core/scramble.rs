//! Letter scrambling
//!
//! Produces a rearrangement of a word's characters that differs from the input
//! whenever such a rearrangement exists.

use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffles attempted before falling back to a deterministic swap
const MAX_SHUFFLES: usize = 16;

/// Scramble the characters of `word` using the thread-local RNG
///
/// Words of length <= 1, or made of a single repeated character, have no
/// distinct arrangement and are returned unchanged.
///
/// # Examples
/// ```
/// use jumble_engine::core::scramble;
///
/// let scrambled = scramble("yellow");
/// assert_ne!(scrambled, "yellow");
///
/// let mut a: Vec<char> = scrambled.chars().collect();
/// let mut b: Vec<char> = "yellow".chars().collect();
/// a.sort_unstable();
/// b.sort_unstable();
/// assert_eq!(a, b);
///
/// assert_eq!(scramble("zzz"), "zzz");
/// ```
#[must_use]
pub fn scramble(word: &str) -> String {
    scramble_with(word, &mut rand::rng())
}

/// Scramble using a caller-supplied RNG
///
/// Only guarantees the output differs from the input; it does not sample
/// uniformly among the distinct permutations.
pub fn scramble_with<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    if !has_distinct_permutation(&original) {
        return word.to_string();
    }

    let mut letters = original.clone();
    for _ in 0..MAX_SHUFFLES {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }

    // Still identical after MAX_SHUFFLES: swap the first character with the
    // first one that differs from it.
    if let Some(pos) = letters.iter().position(|&c| c != letters[0]) {
        letters.swap(0, pos);
    }
    letters.into_iter().collect()
}

/// True if some rearrangement of `letters` differs from it
#[must_use]
pub fn has_distinct_permutation(letters: &[char]) -> bool {
    match letters.split_first() {
        Some((first, rest)) => rest.iter().any(|c| c != first),
        None => false,
    }
}
