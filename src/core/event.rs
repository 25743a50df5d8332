//! Scoring events.
//!
//! Events are the only durable record of a frame. They are immutable
//! values; the game state is rebuilt by folding them in sequence order.

use super::ball::{ColorName, FoulPoints, Player};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened at the table.
///
/// Closed set: adding a variant forces every `match` over events to be
/// revisited.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// A ball was potted for `points`
    Pot { color: ColorName, points: u32 },

    /// The player failed to pot and the turn passes
    Miss,

    /// The player fouled; the opponent receives `points`
    Foul {
        points: FoulPoints,
        /// The ball being played was lost from the table
        #[serde(rename = "lostBall")]
        lost_ball: bool,
    },

    /// The event's player won the coin toss for the respotted black
    RespotTossWinner,

    /// The toss winner decided whether to play first
    RespotChoice {
        #[serde(rename = "goFirst")]
        go_first: bool,
    },
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pot { .. } => "POT",
            Self::Miss => "MISS",
            Self::Foul { .. } => "FOUL",
            Self::RespotTossWinner => "RESPOT_TOSS_WINNER",
            Self::RespotChoice { .. } => "RESPOT_CHOICE",
        }
    }
}

/// A single entry in a game's event log.
///
/// `sequence_number` is the event's index in the log when it was appended.
/// The timestamp is wall-clock time at append, stored as epoch
/// milliseconds.
///
/// # Example
///
/// ```rust
/// use snooker_ledger::core::{ColorName, EventKind, GameEvent, Player};
/// use chrono::Utc;
///
/// let event = GameEvent {
///     timestamp: Utc::now(),
///     sequence_number: 0,
///     player: Player::One,
///     kind: EventKind::Pot { color: ColorName::Red, points: 1 },
/// };
///
/// assert_eq!(event.to_string(), "Player 1 pots red");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub sequence_number: u64,
    pub player: Player,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl GameEvent {
    /// Event stamped with the current time, truncated to the millisecond
    /// precision it is stored with.
    pub fn now(sequence_number: u64, player: Player, kind: EventKind) -> Self {
        Self {
            timestamp: Utc::now().trunc_subsecs(3),
            sequence_number,
            player,
            kind,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EventKind::Pot { color, .. } => write!(f, "{} pots {}", self.player, color),
            EventKind::Miss => write!(f, "{} misses", self.player),
            EventKind::Foul { points, .. } => {
                write!(f, "{} fouls ({} points)", self.player, points.points())
            }
            EventKind::RespotTossWinner => write!(f, "{} wins respot toss", self.player),
            EventKind::RespotChoice { go_first } => write!(
                f,
                "{} chooses to go {}",
                self.player,
                if *go_first { "first" } else { "second" }
            ),
        }
    }
}
