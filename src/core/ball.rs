//! Players, balls and foul values.
//!
//! These are the constant domains of a frame. None of them carry state of
//! their own; they only describe who is at the table and what is on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the two players in a frame.
///
/// Serialized as the bare index `0` or `1` so persisted logs stay compact
/// and readable by clients that index scores by player.
///
/// # Example
///
/// ```rust
/// use snooker_ledger::core::Player;
///
/// assert_eq!(Player::One.other(), Player::Two);
/// assert_eq!(Player::Two.other(), Player::One);
/// assert_eq!(Player::Two.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Index into per-player arrays such as scores.
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Player for an index into per-player arrays.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::One),
            1 => Some(Self::Two),
            _ => None,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.index() as u8
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayer;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Player::from_index(value as usize).ok_or(InvalidPlayer(value))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A player index outside `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid player index {0}, expected 0 or 1")]
pub struct InvalidPlayer(pub u8);

/// A ball on the table.
///
/// Reds are interchangeable and always worth one point. The six colours
/// have fixed values and a fixed order once the reds are gone.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Red,
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
}

impl ColorName {
    /// The colours in the order they must be potted in the end phase.
    pub const END_GAME_ORDER: [ColorName; 6] = [
        ColorName::Yellow,
        ColorName::Green,
        ColorName::Brown,
        ColorName::Blue,
        ColorName::Pink,
        ColorName::Black,
    ];

    /// Point value of the ball.
    pub fn points(self) -> u32 {
        match self {
            Self::Red => 1,
            Self::Yellow => 2,
            Self::Green => 3,
            Self::Brown => 4,
            Self::Blue => 5,
            Self::Pink => 6,
            Self::Black => 7,
        }
    }

    /// Lowercase name, as used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Brown => "brown",
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Black => "black",
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// The colour that must be potted next when `colors_remaining` colours
    /// are left on the table during the end phase.
    ///
    /// Counts from the end of [`ColorName::END_GAME_ORDER`]: six remaining
    /// means yellow, one remaining means black. Returns `None` when no
    /// colours are left or the count is out of range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snooker_ledger::core::ColorName;
    ///
    /// assert_eq!(ColorName::next_required(6), Some(ColorName::Yellow));
    /// assert_eq!(ColorName::next_required(1), Some(ColorName::Black));
    /// assert_eq!(ColorName::next_required(0), None);
    /// ```
    pub fn next_required(colors_remaining: u8) -> Option<ColorName> {
        let remaining = colors_remaining as usize;
        if remaining == 0 || remaining > Self::END_GAME_ORDER.len() {
            return None;
        }
        Some(Self::END_GAME_ORDER[Self::END_GAME_ORDER.len() - remaining])
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Penalty awarded to the opponent for a foul.
///
/// Fouls are worth at least four points and at most seven, the value of
/// the highest ball involved.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FoulPoints {
    Four,
    Five,
    Six,
    Seven,
}

impl FoulPoints {
    pub const ALL: [FoulPoints; 4] = [
        FoulPoints::Four,
        FoulPoints::Five,
        FoulPoints::Six,
        FoulPoints::Seven,
    ];

    pub fn points(self) -> u32 {
        match self {
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
        }
    }
}

impl From<FoulPoints> for u8 {
    fn from(foul: FoulPoints) -> Self {
        foul.points() as u8
    }
}

impl TryFrom<u8> for FoulPoints {
    type Error = InvalidFoulPoints;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            other => Err(InvalidFoulPoints(other)),
        }
    }
}

/// A foul value outside `4..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid foul value {0}, fouls are worth 4 to 7 points")]
pub struct InvalidFoulPoints(pub u8);
