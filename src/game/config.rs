//! Game creation settings

use crate::index::DEFAULT_MIN_LENGTH;

/// Shortest seed word a game may use
pub const MIN_GAME_LENGTH: usize = 3;

/// Default seed word length for a new board
pub const DEFAULT_GAME_LENGTH: usize = 6;

/// Configuration for creating a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub length: usize,
    pub min_length: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GAME_LENGTH)
    }
}
