//! Jumble game sessions
//!
//! Puzzles are created from a `DictionaryIndex` and tracked in a shared
//! registry keyed by UUID. Each session moves Created -> InProgress -> Complete
//! as its targets are found.

mod config;
mod error;
mod manager;
mod registry;
mod state;

pub use config::{DEFAULT_GAME_LENGTH, GameConfig, MIN_GAME_LENGTH};
pub use error::GameError;
pub use manager::GameManager;
pub use registry::{SessionHandle, SessionRegistry};
pub use state::{GamePhase, GameSnapshot, GameState, GuessOutcome};
