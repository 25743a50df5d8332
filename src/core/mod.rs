//! Core scoring types and logic.
//!
//! This module contains the pure part of the engine:
//! - Players, balls and foul values
//! - The derived `GameState`
//! - Scoring events and their wire form
//! - The reducer that folds events into state
//! - Break statistics for finished frames
//!
//! Nothing here performs I/O or reads the clock, except
//! [`GameEvent::now`] which stamps a new event.

mod ball;
mod event;
mod reducer;
mod state;
mod stats;

pub use ball::{ColorName, FoulPoints, InvalidFoulPoints, InvalidPlayer, Player};
pub use event::{EventKind, GameEvent};
pub(crate) use reducer::advance;
pub use reducer::{derive_state, derive_state_from, update_state_with_event};
pub use state::{GameState, INITIAL_COLORS, INITIAL_REDS};
pub use stats::{calculate_break_stats, BreakStats};
