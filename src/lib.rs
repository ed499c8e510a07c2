//! Jumble Engine
//!
//! A dictionary-backed word-puzzle engine: membership, prefix and attribute
//! queries, sub-word derivation by letter-frequency containment, and concurrent
//! jumble game sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use jumble_engine::game::GameManager;
//! use jumble_engine::wordlists::embedded_index;
//!
//! let index = embedded_index();
//! assert!(index.sub_words("yellow", None).contains("yowl"));
//!
//! let manager = GameManager::new(index);
//! let game = manager.create_game(Some(6), None).unwrap();
//! println!("Unscramble: {}", game.scrambled_word);
//! ```

// Core domain types
pub mod core;

// Dictionary index and queries
pub mod index;

// Word lists
pub mod wordlists;

// Game sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
