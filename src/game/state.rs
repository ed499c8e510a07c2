//! Per-session puzzle state
//!
//! A `GameState` owns the seed word, its scrambled display form and the target
//! set. Target keys are fixed at creation; flags only ever move false -> true.

use crate::core::normalize;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Outcome of a game operation, rendered as the user-facing result line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    Created,
    Incorrect,
    Correct,
    /// Resubmission of a target already found; reported like a correct guess
    AlreadyGuessed,
    AllGuessed,
}

impl GuessOutcome {
    /// Result string returned to callers
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Created => "Created new game.",
            Self::Incorrect => "Guessed incorrectly.",
            Self::Correct | Self::AlreadyGuessed => "Guessed correctly.",
            Self::AllGuessed => "All words guessed.",
        }
    }

    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct | Self::AlreadyGuessed | Self::AllGuessed)
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Progress of a single puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No target guessed yet
    Created,
    InProgress,
    /// Every target guessed; terminal
    Complete,
}

/// Point-in-time view of a session returned by every game operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub outcome: GuessOutcome,
    pub id: Uuid,
    pub original_word: String,
    pub scrambled_word: String,
    pub guess_word: Option<String>,
    pub total_words: usize,
    pub remaining_words: usize,
    /// Guessed targets in lexicographic order
    pub guessed_words: Vec<String>,
}

impl GameSnapshot {
    /// Result string for this snapshot
    #[must_use]
    pub const fn result(&self) -> &'static str {
        self.outcome.message()
    }
}

/// Mutable state of one puzzle
#[derive(Debug, Clone)]
pub struct GameState {
    id: Uuid,
    original_word: String,
    scrambled_word: String,
    targets: BTreeMap<String, bool>,
    remaining: usize,
}

impl GameState {
    pub fn new<I>(id: Uuid, original_word: String, scrambled_word: String, targets: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let targets: BTreeMap<String, bool> =
            targets.into_iter().map(|word| (word, false)).collect();
        let remaining = targets.len();
        Self {
            id,
            original_word,
            scrambled_word,
            targets,
            remaining,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn original_word(&self) -> &str {
        &self.original_word
    }

    #[must_use]
    pub fn scrambled_word(&self) -> &str {
        &self.scrambled_word
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.remaining == 0 {
            GamePhase::Complete
        } else if self.remaining == self.targets.len() {
            GamePhase::Created
        } else {
            GamePhase::InProgress
        }
    }

    /// Guessed targets in lexicographic order
    #[must_use]
    pub fn guessed_words(&self) -> Vec<String> {
        self.targets
            .iter()
            .filter(|&(_, &guessed)| guessed)
            .map(|(word, _)| word.clone())
            .collect()
    }

    /// Targets still to be found, in lexicographic order
    pub fn unguessed_words(&self) -> impl Iterator<Item = &str> {
        self.targets
            .iter()
            .filter(|&(_, &guessed)| !guessed)
            .map(|(word, _)| word.as_str())
    }

    /// Apply one guess
    ///
    /// Blank and non-target words leave the state untouched. A new target flips
    /// its flag and decrements `remaining` exactly once; a repeated target is
    /// reported as `AlreadyGuessed` with no further change.
    pub fn apply_guess(&mut self, word: &str) -> GuessOutcome {
        let word = normalize(word);
        let Some(guessed) = self.targets.get_mut(&word) else {
            return GuessOutcome::Incorrect;
        };
        if *guessed {
            return GuessOutcome::AlreadyGuessed;
        }

        *guessed = true;
        self.remaining -= 1;
        debug_assert_eq!(
            self.remaining,
            self.targets.values().filter(|&&g| !g).count()
        );

        if self.remaining == 0 {
            GuessOutcome::AllGuessed
        } else {
            GuessOutcome::Correct
        }
    }

    /// Capture the current state
    #[must_use]
    pub fn snapshot(&self, outcome: GuessOutcome, guess_word: Option<String>) -> GameSnapshot {
        GameSnapshot {
            outcome,
            id: self.id,
            original_word: self.original_word.clone(),
            scrambled_word: self.scrambled_word.clone(),
            guess_word,
            total_words: self.total(),
            remaining_words: self.remaining,
            guessed_words: self.guessed_words(),
        }
    }
}
