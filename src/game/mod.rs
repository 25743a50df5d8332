//! The live game aggregate.
//!
//! A [`GameLog`] is constructed per game and owned by its caller; there is
//! no shared instance. It is the only thing that mutates a log, and readers
//! see an immutable snapshot through [`GameLog::state`] after each action.

mod log;
mod observer;

pub use log::GameLog;
pub use observer::{Observer, SubscriptionId};
