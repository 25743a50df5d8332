//! Persistence for game logs.
//!
//! The event log is the only durable artifact of a game. This module
//! defines its stored form, the [`GameStore`] gateway that keeps logs by
//! game id, two store implementations, and a debounced autosaver that
//! keeps a store in step with a live [`GameLog`].

use crate::core::{GameEvent, GameState};
use crate::game::{GameLog, SubscriptionId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

pub mod debounce;
pub mod error;
pub mod file;
pub mod memory;

pub use debounce::{AutosaveConfig, DebouncedSaver};
pub use error::PersistError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Version identifier for the stored game format
pub const PERSIST_VERSION: u32 = 1;

fn default_version() -> u32 {
    PERSIST_VERSION
}

/// Stored form of a game: its id and ordered event log.
///
/// Logs that start from a full rack omit `initial_state`; a log started
/// from any other position stores it so a reload replays from the same
/// place.
///
/// # Example
///
/// ```rust
/// use snooker_ledger::game::GameLog;
/// use snooker_ledger::persist::PersistedGame;
///
/// let log = GameLog::with_id("frame-7");
/// let json = log.to_persisted().to_json().unwrap();
/// let game = PersistedGame::from_json(&json).unwrap();
///
/// assert_eq!(game.game_id, "frame-7");
/// assert!(game.events.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedGame {
    /// Stored format version; absent in logs written by older clients
    #[serde(default = "default_version")]
    pub version: u32,

    pub game_id: String,

    /// Position the events are replayed from, when not a full rack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<GameState>,

    pub events: Vec<GameEvent>,
}

impl PersistedGame {
    pub fn new(game_id: impl Into<String>, events: Vec<GameEvent>) -> Self {
        Self {
            version: PERSIST_VERSION,
            game_id: game_id.into(),
            initial_state: None,
            events,
        }
    }

    /// Record a non-default starting position.
    pub fn with_initial_state(mut self, state: GameState) -> Self {
        self.initial_state = (state != GameState::initial()).then_some(state);
        self
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string(self).map_err(|e| PersistError::SerializationFailed(e.to_string()))
    }

    /// Parse and validate a stored game.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let game: Self = serde_json::from_str(json)
            .map_err(|e| PersistError::DeserializationFailed(e.to_string()))?;
        game.validate()?;
        Ok(game)
    }

    /// Check the format version and that sequence numbers match positions.
    pub fn validate(&self) -> Result<(), PersistError> {
        if self.version != PERSIST_VERSION {
            return Err(PersistError::UnsupportedVersion {
                found: self.version,
                supported: PERSIST_VERSION,
            });
        }

        if self.game_id.is_empty() {
            return Err(PersistError::ValidationFailed(
                "game id is empty".to_string(),
            ));
        }

        for (index, event) in self.events.iter().enumerate() {
            if event.sequence_number != index as u64 {
                return Err(PersistError::ValidationFailed(format!(
                    "event {} has sequence number {}",
                    index, event.sequence_number
                )));
            }
        }

        Ok(())
    }
}

/// Gateway to durable storage of game logs, keyed by game id.
///
/// Both operations are idempotent. `get` returns `Ok(None)` when no game
/// is stored under the id.
pub trait GameStore: Send + Sync {
    fn get(&self, game_id: &str) -> Result<Option<PersistedGame>, PersistError>;

    fn put(&self, game_id: &str, game: &PersistedGame) -> Result<(), PersistError>;
}

/// Result of loading a game by id.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The stored log, replayed into a live aggregate
    Loaded(GameLog),

    /// Nothing is stored under the id; the caller should start a new game
    NotFound,
}

/// Load a game from a store and replay it.
pub fn load_game(store: &dyn GameStore, game_id: &str) -> Result<LoadOutcome, PersistError> {
    let Some(game) = store.get(game_id)? else {
        info!(game_id, "game not found");
        return Ok(LoadOutcome::NotFound);
    };

    let log =
        GameLog::from_persisted(game).map_err(|e| PersistError::ValidationFailed(e.to_string()))?;
    debug!(game_id, events = log.events().len(), "game loaded");
    Ok(LoadOutcome::Loaded(log))
}

/// Save `log` through `saver` after every change.
pub fn attach_autosave(log: &mut GameLog, saver: Arc<DebouncedSaver>) -> SubscriptionId {
    log.subscribe(move |log| saver.schedule(log.to_persisted()))
}
