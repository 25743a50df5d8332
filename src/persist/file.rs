//! Directory-backed store, one JSON file per game.

use super::{GameStore, PersistError, PersistedGame};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Stores each game as `<dir>/<game_id>.json`.
///
/// Each write goes to its own uniquely named temporary file in the same
/// directory, which is then renamed over the target. A crash mid-write
/// never leaves a truncated log behind, concurrent writers for one game
/// never share a temporary file, and a write that fails to land removes
/// its temporary file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, game_id: &str) -> Result<PathBuf, PersistError> {
        let usable = !game_id.is_empty()
            && !game_id.starts_with('.')
            && !game_id.contains(['/', '\\', '\0']);
        if !usable {
            return Err(PersistError::InvalidGameId(game_id.to_string()));
        }
        Ok(self.dir.join(format!("{game_id}.json")))
    }
}

impl GameStore for FileStore {
    fn get(&self, game_id: &str) -> Result<Option<PersistedGame>, PersistError> {
        let path = self.path_for(game_id)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        PersistedGame::from_json(&json).map(Some)
    }

    fn put(&self, game_id: &str, game: &PersistedGame) -> Result<(), PersistError> {
        let path = self.path_for(game_id)?;
        let json = game.to_json()?;

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(&path).map_err(|e| PersistError::Io(e.error))?;

        debug!(game_id, path = %path.display(), "game written");
        Ok(())
    }
}
