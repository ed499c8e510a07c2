//! Word list loading utilities
//!
//! Parses line-oriented word sources into a `DictionaryIndex`.

use crate::index::DictionaryIndex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error type for word list sources that cannot be read
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Split newline-delimited text into trimmed, non-blank lines
///
/// Case and duplicates are left as-is; the index normalizes them.
#[must_use]
pub fn parse_words(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Load a word list file into an index
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use jumble_engine::wordlists::loader::load_from_file;
///
/// let index = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", index.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<DictionaryIndex, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading word list");

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(DictionaryIndex::from_words(parse_words(&content)))
}

/// Build an index from an embedded string slice
#[must_use]
pub fn index_from_slice(slice: &[&str]) -> DictionaryIndex {
    DictionaryIndex::from_words(slice)
}
