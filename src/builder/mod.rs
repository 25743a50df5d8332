//! Builder API for game logs.
//!
//! Most callers only need [`GameLog::new`](crate::game::GameLog::new). The
//! builder covers resuming a stored game and starting from a custom
//! position, validating both before any event is replayed.

pub mod error;
pub mod game;

pub use error::BuildError;
pub use game::GameLogBuilder;
