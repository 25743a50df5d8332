//! In-memory key-value store.

use super::{GameStore, PersistError, PersistedGame};
use std::collections::HashMap;
use std::sync::RwLock;

/// Keeps games as JSON strings in memory, like a key-value service would.
///
/// Useful for tests and for single-process use where durability across
/// restarts is not needed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.games.read().map(|games| games.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GameStore for MemoryStore {
    fn get(&self, game_id: &str) -> Result<Option<PersistedGame>, PersistError> {
        let games = self
            .games
            .read()
            .map_err(|e| PersistError::StoreUnavailable(e.to_string()))?;

        games
            .get(game_id)
            .map(|json| PersistedGame::from_json(json))
            .transpose()
    }

    fn put(&self, game_id: &str, game: &PersistedGame) -> Result<(), PersistError> {
        let json = game.to_json()?;
        let mut games = self
            .games
            .write()
            .map_err(|e| PersistError::StoreUnavailable(e.to_string()))?;
        games.insert(game_id.to_string(), json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventKind, GameEvent, Player};

    #[test]
    fn get_missing_game_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("nope").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn put_then_get_returns_game() {
        let store = MemoryStore::new();
        let game = PersistedGame::new(
            "g",
            vec![GameEvent::now(0, Player::Two, EventKind::Miss)],
        );

        store.put("g", &game).unwrap();

        assert_eq!(store.get("g").unwrap(), Some(game));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn put_overwrites_previous_log() {
        let store = MemoryStore::new();
        store.put("g", &PersistedGame::new("g", Vec::new())).unwrap();
        let longer = PersistedGame::new(
            "g",
            vec![GameEvent::now(0, Player::One, EventKind::Miss)],
        );
        store.put("g", &longer).unwrap();

        assert_eq!(store.get("g").unwrap().unwrap().events.len(), 1);
        assert_eq!(store.len(), 1);
    }
}
