//! Game session manager
//!
//! Creates puzzles from a dictionary index and tracks guesses per session.

use super::config::{GameConfig, MIN_GAME_LENGTH};
use super::error::GameError;
use super::registry::{SessionRegistry, lock};
use super::state::{GameSnapshot, GameState, GuessOutcome};
use crate::core::scramble;
use crate::index::{DEFAULT_MIN_LENGTH, DictionaryIndex};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Entry point for creating games and submitting guesses
///
/// Safe to share across threads: the index is immutable and every session is
/// locked independently.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use jumble_engine::game::GameManager;
/// use jumble_engine::index::DictionaryIndex;
///
/// let index = DictionaryIndex::from_words(["yellow", "low", "owl", "well"]);
/// let manager = GameManager::new(Arc::new(index));
///
/// let game = manager.create_game(Some(6), None).unwrap();
/// assert_eq!(game.original_word, "yellow");
/// assert_eq!(game.total_words, 3);
///
/// let id = game.id.to_string();
/// let result = manager.guess(Some(id.as_str()), Some("owl")).unwrap();
/// assert_eq!(result.result(), "Guessed correctly.");
/// assert_eq!(result.remaining_words, 2);
/// ```
#[derive(Debug)]
pub struct GameManager {
    index: Arc<DictionaryIndex>,
    registry: SessionRegistry,
}

impl GameManager {
    #[must_use]
    pub fn new(index: Arc<DictionaryIndex>) -> Self {
        Self {
            index,
            registry: SessionRegistry::new(),
        }
    }

    /// Dictionary backing this manager
    #[must_use]
    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    /// Create and register a new game
    ///
    /// `length` is required and must be at least 3. `min_length` defaults to 3,
    /// must be positive and must not exceed `length`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range arguments, or
    /// `GameError::NoWordAvailable` if the dictionary has no word of `length`.
    pub fn create_game(
        &self,
        length: Option<usize>,
        min_length: Option<usize>,
    ) -> Result<GameSnapshot, GameError> {
        let length = length.ok_or(GameError::MissingLength)?;
        let min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        if min_length == 0 {
            return Err(GameError::InvalidMinLength { min_length });
        }
        if length < MIN_GAME_LENGTH {
            return Err(GameError::LengthTooShort { length });
        }
        if min_length > length {
            return Err(GameError::MinLengthExceedsLength { min_length, length });
        }

        let original = self
            .index
            .random_word(Some(length))
            .ok_or(GameError::NoWordAvailable { length })?;
        let scrambled = scramble(original);
        let targets = self.index.sub_words(original, Some(min_length));

        let state = GameState::new(Uuid::new_v4(), original.to_string(), scrambled, targets);
        let snapshot = state.snapshot(GuessOutcome::Created, None);
        self.registry.insert(state);

        info!(
            id = %snapshot.id,
            length,
            min_length,
            targets = snapshot.total_words,
            "created game"
        );
        Ok(snapshot)
    }

    /// Create a game from a `GameConfig`
    ///
    /// # Errors
    ///
    /// Same as `create_game`.
    pub fn create_game_with(&self, config: &GameConfig) -> Result<GameSnapshot, GameError> {
        self.create_game(Some(config.length), Some(config.min_length))
    }

    /// Submit a guess for a session
    ///
    /// A blank or absent word counts as an incorrect guess and is echoed back as
    /// `None`; any other word is echoed back as submitted.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidId` if `id` is absent, blank or not a UUID;
    /// `GameError::RecordNotFound` if no session has that ID.
    pub fn guess(&self, id: Option<&str>, word: Option<&str>) -> Result<GameSnapshot, GameError> {
        let id = parse_id(id)?;
        let handle = self.registry.get(&id).ok_or(GameError::RecordNotFound)?;

        let guess_word = word.filter(|w| !w.trim().is_empty());
        let mut state = lock(&handle);
        let outcome = match guess_word {
            Some(word) => state.apply_guess(word),
            None => GuessOutcome::Incorrect,
        };
        let snapshot = state.snapshot(outcome, guess_word.map(str::to_string));
        drop(state);

        debug!(
            id = %id,
            outcome = ?outcome,
            remaining = snapshot.remaining_words,
            "guess"
        );
        Ok(snapshot)
    }

    /// Current view of a session without guessing
    ///
    /// The snapshot reports `GuessOutcome::Created` while nothing has been
    /// guessed, otherwise the outcome a correct guess would have produced.
    ///
    /// # Errors
    ///
    /// Same lookup errors as `guess`.
    pub fn snapshot(&self, id: Option<&str>) -> Result<GameSnapshot, GameError> {
        let id = parse_id(id)?;
        let handle = self.registry.get(&id).ok_or(GameError::RecordNotFound)?;
        let state = lock(&handle);
        let outcome = match state.remaining() {
            0 => GuessOutcome::AllGuessed,
            r if r == state.total() => GuessOutcome::Created,
            _ => GuessOutcome::Correct,
        };
        Ok(state.snapshot(outcome, None))
    }

    /// Up to `count` unguessed targets, shortest first
    ///
    /// # Errors
    ///
    /// Same lookup errors as `guess`.
    pub fn hints(&self, id: Option<&str>, count: usize) -> Result<Vec<String>, GameError> {
        let id = parse_id(id)?;
        let handle = self.registry.get(&id).ok_or(GameError::RecordNotFound)?;
        let state = lock(&handle);
        let mut unguessed: Vec<&str> = state.unguessed_words().collect();
        unguessed.sort_by_key(|word| word.len());
        Ok(unguessed
            .into_iter()
            .take(count)
            .map(str::to_string)
            .collect())
    }

    /// Number of sessions ever created; sessions are never evicted
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.registry.len()
    }
}

/// Validate a session identifier before touching the registry
fn parse_id(id: Option<&str>) -> Result<Uuid, GameError> {
    let id = id.map(str::trim).filter(|id| !id.is_empty());
    id.and_then(|id| Uuid::parse_str(id).ok())
        .ok_or(GameError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_index;
    use std::thread;

    fn yellow_manager() -> GameManager {
        let index = DictionaryIndex::from_words([
            "yellow", "low", "lye", "owl", "well", "yell", "yowl", "lull", "cat",
        ]);
        GameManager::new(Arc::new(index))
    }

    #[test]
    fn create_game_snapshot() {
        let manager = yellow_manager();
        let game = manager.create_game(Some(6), Some(3)).unwrap();

        assert_eq!(game.result(), "Created new game.");
        assert_eq!(game.original_word, "yellow");
        assert_ne!(game.scrambled_word, "yellow");
        assert_eq!(game.total_words, 6);
        assert_eq!(game.remaining_words, game.total_words);
        assert!(game.guessed_words.is_empty());
        assert!(game.guess_word.is_none());
        assert_eq!(manager.session_count(), 1);
    }

    #[test]
    fn create_game_embedded_six_letters() {
        let manager = GameManager::new(embedded_index());
        let game = manager.create_game_with(&GameConfig::default()).unwrap();

        assert_eq!(game.original_word.len(), 6);
        assert!(game.total_words > 0);
        assert_eq!(game.total_words, game.remaining_words);
        assert!(game.guessed_words.is_empty());
    }

    #[test]
    fn create_game_validation() {
        let manager = yellow_manager();
        assert_eq!(
            manager.create_game(None, None),
            Err(GameError::MissingLength)
        );
        assert_eq!(
            manager.create_game(Some(2), None),
            Err(GameError::LengthTooShort { length: 2 })
        );
        assert_eq!(
            manager.create_game(Some(6), Some(0)),
            Err(GameError::InvalidMinLength { min_length: 0 })
        );
        assert_eq!(
            manager.create_game(Some(6), Some(7)),
            Err(GameError::MinLengthExceedsLength {
                min_length: 7,
                length: 6
            })
        );
        assert_eq!(manager.session_count(), 0);
    }

    #[test]
    fn create_game_no_word_available() {
        let manager = yellow_manager();
        assert_eq!(
            manager.create_game(Some(9), None),
            Err(GameError::NoWordAvailable { length: 9 })
        );
        assert_eq!(manager.session_count(), 0);
    }

    #[test]
    fn guess_missing_id_is_invalid() {
        let manager = yellow_manager();
        manager.create_game(Some(6), None).unwrap();
        assert_eq!(manager.guess(None, Some("owl")), Err(GameError::InvalidId));
        assert_eq!(manager.guess(Some(""), Some("owl")), Err(GameError::InvalidId));
        assert_eq!(manager.guess(Some("  "), None), Err(GameError::InvalidId));
        assert_eq!(
            manager.guess(Some("not-a-uuid"), Some("owl")),
            Err(GameError::InvalidId)
        );
    }

    #[test]
    fn guess_unknown_id_not_found() {
        let manager = yellow_manager();
        let id = Uuid::new_v4().to_string();
        assert_eq!(
            manager.guess(Some(id.as_str()), Some("test")),
            Err(GameError::RecordNotFound)
        );
    }

    #[test]
    fn guess_null_word_incorrect() {
        let manager = yellow_manager();
        let game = manager.create_game(Some(6), None).unwrap();
        let id = game.id.to_string();

        for word in [None, Some(""), Some("   ")] {
            let result = manager.guess(Some(id.as_str()), word).unwrap();
            assert_eq!(result.result(), "Guessed incorrectly.");
            assert!(result.guess_word.is_none());
            assert_eq!(result.remaining_words, game.remaining_words);
            assert!(result.guessed_words.is_empty());
        }
    }

    #[test]
    fn guess_wrong_word_incorrect() {
        let manager = yellow_manager();
        let game = manager.create_game(Some(6), None).unwrap();
        let id = game.id.to_string();

        let result = manager.guess(Some(id.as_str()), Some("wrongword")).unwrap();
        assert_eq!(result.result(), "Guessed incorrectly.");
        assert_eq!(result.id, game.id);
        assert_eq!(result.original_word, game.original_word);
        assert_eq!(result.scrambled_word, game.scrambled_word);
        assert_eq!(result.guess_word.as_deref(), Some("wrongword"));
        assert_eq!(result.total_words, game.total_words);
        assert_eq!(result.remaining_words, game.remaining_words);
        assert!(result.guessed_words.is_empty());

        // The seed word itself is never a target
        let result = manager.guess(Some(id.as_str()), Some("yellow")).unwrap();
        assert_eq!(result.outcome, GuessOutcome::Incorrect);
    }

    #[test]
    fn guess_correct_then_repeat() {
        let manager = yellow_manager();
        let game = manager.create_game(Some(6), None).unwrap();
        let id = game.id.to_string();

        let first = manager.guess(Some(id.as_str()), Some("Owl")).unwrap();
        assert_eq!(first.result(), "Guessed correctly.");
        assert_eq!(first.guess_word.as_deref(), Some("Owl"));
        assert_eq!(first.remaining_words, game.remaining_words - 1);
        assert_eq!(first.guessed_words, ["owl"]);

        let again = manager.guess(Some(id.as_str()), Some("owl")).unwrap();
        assert_eq!(again.outcome, GuessOutcome::AlreadyGuessed);
        assert_eq!(again.result(), "Guessed correctly.");
        assert_eq!(again.remaining_words, first.remaining_words);
        assert_eq!(again.guessed_words, ["owl"]);
    }

    #[test]
    fn guess_all_words() {
        let manager = yellow_manager();
        let game = manager.create_game(Some(6), None).unwrap();
        let id = game.id.to_string();
        let targets: Vec<String> = manager
            .index()
            .sub_words(&game.original_word, None)
            .into_iter()
            .collect();
        assert_eq!(targets.len(), game.total_words);

        let (last, rest) = targets.split_last().unwrap();
        for word in rest {
            let result = manager.guess(Some(id.as_str()), Some(word.as_str())).unwrap();
            assert_eq!(result.outcome, GuessOutcome::Correct);
        }

        let result = manager.guess(Some(id.as_str()), Some(last.as_str())).unwrap();
        assert_eq!(result.result(), "All words guessed.");
        assert_eq!(result.remaining_words, 0);
        assert_eq!(result.guessed_words, targets);
        assert_eq!(result.guess_word.as_deref(), Some(last.as_str()));
    }

    #[test]
    fn snapshot_tracks_progress() {
        let manager = yellow_manager();
        let game = manager.create_game(Some(6), None).unwrap();
        let id = game.id.to_string();

        assert_eq!(
            manager.snapshot(Some(id.as_str())).unwrap().outcome,
            GuessOutcome::Created
        );
        manager.guess(Some(id.as_str()), Some("lye")).unwrap();
        let snapshot = manager.snapshot(Some(id.as_str())).unwrap();
        assert_eq!(snapshot.remaining_words, game.total_words - 1);
        assert_eq!(snapshot.guessed_words, ["lye"]);
        assert!(manager.snapshot(None).is_err());
    }

    #[test]
    fn hints_shortest_unguessed_first() {
        let manager = yellow_manager();
        let game = manager.create_game(Some(6), None).unwrap();
        let id = game.id.to_string();

        manager.guess(Some(id.as_str()), Some("low")).unwrap();
        let hints = manager.hints(Some(id.as_str()), 2).unwrap();
        assert_eq!(hints, ["lye", "owl"]);
    }

    #[test]
    fn concurrent_same_word_decrements_once() {
        let manager = yellow_manager();
        let game = manager.create_game(Some(6), None).unwrap();
        let id = game.id.to_string();

        let outcomes: Vec<GuessOutcome> = thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    s.spawn(|| {
                        manager
                            .guess(Some(id.as_str()), Some("well"))
                            .unwrap()
                            .outcome
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let fresh = outcomes
            .iter()
            .filter(|&&o| o == GuessOutcome::Correct)
            .count();
        assert_eq!(fresh, 1);
        assert_eq!(
            outcomes
                .iter()
                .filter(|&&o| o == GuessOutcome::AlreadyGuessed)
                .count(),
            15
        );

        let snapshot = manager.snapshot(Some(id.as_str())).unwrap();
        assert_eq!(snapshot.remaining_words, game.total_words - 1);
    }

    #[test]
    fn concurrent_games_progress_independently() {
        let manager = GameManager::new(embedded_index());

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let game = manager.create_game(Some(6), None).unwrap();
                    let id = game.id.to_string();
                    let targets = manager.index().sub_words(&game.original_word, None);
                    let mut last = None;
                    for word in &targets {
                        let result = manager.guess(Some(id.as_str()), Some(word.as_str()));
                        last = Some(result.unwrap());
                    }
                    let last = last.unwrap();
                    assert_eq!(last.outcome, GuessOutcome::AllGuessed);
                    assert_eq!(last.remaining_words, 0);
                });
            }
        });

        assert_eq!(manager.session_count(), 8);
    }
}
