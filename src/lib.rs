//! Snooker Ledger: an event-sourced snooker scoring engine
//!
//! A frame is recorded as an ordered log of scoring events. The current
//! state of the frame (scores, balls left, whose turn it is, respots) is
//! never stored: it is always derived by folding the log through a pure
//! reducer. Undo is just dropping the last event and replaying.
//!
//! # Core Concepts
//!
//! - **Events**: `GameEvent` records of pots, misses, fouls and respot
//!   decisions
//! - **Rules**: pure checks deciding whether a pot is legal
//! - **Reducer**: `update_state_with_event` and `derive_state`
//! - **Game log**: the `GameLog` aggregate that validates actions, appends
//!   events and notifies observers
//! - **Persistence**: the `GameStore` gateway and a debounced autosaver
//!
//! # Example
//!
//! ```rust
//! use snooker_ledger::core::{derive_state, ColorName, FoulPoints, Player};
//! use snooker_ledger::game::GameLog;
//!
//! let mut log = GameLog::new();
//! log.pot(ColorName::Red, 1);
//! log.pot(ColorName::Black, 7);
//! log.miss();
//! log.foul(FoulPoints::Four, false);
//!
//! let state = log.state();
//! assert_eq!(state.scores, [12, 0]);
//! assert_eq!(state.current_player, Player::One);
//!
//! // the log alone is enough to rebuild the frame
//! assert_eq!(&derive_state(log.events()), state);
//! ```

pub mod builder;
pub mod core;
pub mod game;
pub mod persist;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{derive_state, ColorName, FoulPoints, GameEvent, GameState, Player};
pub use game::GameLog;
pub use persist::{GameStore, PersistedGame};
