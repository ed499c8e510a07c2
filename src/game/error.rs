//! Game session errors

use thiserror::Error;

/// Failures raised by the game session manager
///
/// Validation and creation failures abort `create_game`. Lookup failures come in
/// two levels: `InvalidId` (the identifier never reached the registry) and
/// `RecordNotFound` (well-formed identifier, no session).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("length must be provided")]
    MissingLength,
    #[error("Invalid length=[{length}], expect greater than or equals 3")]
    LengthTooShort { length: usize },
    #[error("Invalid minLength=[{min_length}], expect positive integer")]
    InvalidMinLength { min_length: usize },
    #[error("Expect minLength=[{min_length}] not greater than length=[{length}]")]
    MinLengthExceedsLength { min_length: usize, length: usize },
    #[error("Cannot find valid word of length {length} to create game state")]
    NoWordAvailable { length: usize },
    #[error("Invalid Game ID.")]
    InvalidId,
    #[error("Game board/state not found.")]
    RecordNotFound,
}

impl GameError {
    /// True for argument validation failures of `create_game`
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingLength
                | Self::LengthTooShort { .. }
                | Self::InvalidMinLength { .. }
                | Self::MinLengthExceedsLength { .. }
        )
    }

    /// True for session lookup failures
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::InvalidId | Self::RecordNotFound)
    }
}
