//! Word lists for the puzzle engine
//!
//! Provides the embedded default dictionary and a process-wide index built from
//! it on first use.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::index::DictionaryIndex;
use std::sync::{Arc, OnceLock};

static EMBEDDED_INDEX: OnceLock<Arc<DictionaryIndex>> = OnceLock::new();

/// Shared index over the embedded dictionary
///
/// Built exactly once: concurrent first callers block until the single builder
/// finishes, then all of them receive the same instance.
#[must_use]
pub fn embedded_index() -> Arc<DictionaryIndex> {
    Arc::clone(EMBEDDED_INDEX.get_or_init(|| Arc::new(loader::index_from_slice(WORDS))))
}
