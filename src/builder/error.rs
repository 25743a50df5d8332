//! Build errors for game logs.

use thiserror::Error;

/// Errors that can occur when building a game log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Game id must not be empty")]
    EmptyGameId,

    #[error("Initial state has {found} reds, at most {max} allowed")]
    RedsOutOfRange { found: u8, max: u8 },

    #[error("Initial state has {found} colours, at most {max} allowed")]
    ColorsOutOfRange { found: u8, max: u8 },

    #[error("Event at index {index} has sequence number {found}")]
    SequenceMismatch { index: usize, found: u64 },
}
