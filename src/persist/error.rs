//! Persistence error types.

use thiserror::Error;

/// Errors that can occur while storing or loading a game
#[derive(Debug, Error)]
pub enum PersistError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Stored game uses a format version this build does not read
    #[error("Unsupported game format version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Stored game failed validation
    #[error("Game validation failed: {0}")]
    ValidationFailed(String),

    /// Game id cannot be used as a storage key
    #[error("Invalid game id {0:?}")]
    InvalidGameId(String),

    /// Backing store could not be reached
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Debounced saving needs a tokio runtime
    #[error("No tokio runtime available for scheduled saves")]
    NoRuntime,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
