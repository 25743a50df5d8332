//! Derived game state.
//!
//! A `GameState` is never stored on its own. It is always the result of
//! folding an event log over an initial state, so every field here is a
//! projection of the log.

use super::ball::{ColorName, Player};
use serde::{Deserialize, Serialize};

/// Number of reds racked at the start of a frame.
pub const INITIAL_REDS: u8 = 15;

/// Number of colours on the table once the reds are gone.
pub const INITIAL_COLORS: u8 = 6;

/// Snapshot of a frame at one point in its event log.
///
/// # Example
///
/// ```rust
/// use snooker_ledger::core::{GameState, Player};
///
/// let state = GameState::initial();
/// assert_eq!(state.current_player, Player::One);
/// assert_eq!(state.reds_remaining, 15);
/// assert!(state.on_red);
/// assert!(!state.is_over);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Player at the table
    pub current_player: Player,
    /// Points per player, indexed by [`Player::index`]
    pub scores: [u32; 2],
    /// The next legal ball is a red
    pub on_red: bool,
    pub reds_remaining: u8,
    /// Colours left for the end phase; back to one during a respot
    pub colors_remaining: u8,
    /// Points in the current player's uninterrupted run
    pub current_break: u32,
    /// Set by potting the last red; any colour may follow
    pub is_free_ball: bool,
    pub is_respot: bool,
    /// Winner of the respot toss, pending their turn choice
    pub respot_choice: Option<Player>,
    pub is_over: bool,
    pub winner: Option<Player>,
    /// Longest break (in pots) per player, set once the frame is over
    pub longest_breaks: Option<[u32; 2]>,
    /// Highest break (in points) per player, set once the frame is over
    pub highest_breaks: Option<[u32; 2]>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl GameState {
    /// A freshly racked frame with player one to break.
    pub fn initial() -> Self {
        Self {
            current_player: Player::One,
            scores: [0, 0],
            on_red: true,
            reds_remaining: INITIAL_REDS,
            colors_remaining: INITIAL_COLORS,
            current_break: 0,
            is_free_ball: false,
            is_respot: false,
            respot_choice: None,
            is_over: false,
            winner: None,
            longest_breaks: None,
            highest_breaks: None,
        }
    }

    /// Score of a single player.
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Sum of both scores.
    pub fn total_score(&self) -> u32 {
        self.scores[0] + self.scores[1]
    }

    /// All reds are gone and colours must be potted in order.
    pub fn is_end_phase(&self) -> bool {
        self.reds_remaining == 0
    }

    /// Points still on the table, ignoring fouls and free balls.
    ///
    /// Every remaining red is counted with a black after it.
    pub fn points_remaining(&self) -> u32 {
        let reds = self.reds_remaining as u32 * 8;
        let colors: u32 = ColorName::END_GAME_ORDER
            .iter()
            .rev()
            .take(self.colors_remaining as usize)
            .map(|c| c.points())
            .sum();
        reds + colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_a_full_rack() {
        let state = GameState::initial();
        assert_eq!(state.scores, [0, 0]);
        assert_eq!(state.reds_remaining, INITIAL_REDS);
        assert_eq!(state.colors_remaining, INITIAL_COLORS);
        assert!(state.on_red);
        assert!(!state.is_free_ball);
        assert!(!state.is_respot);
        assert!(state.respot_choice.is_none());
        assert!(state.winner.is_none());
        assert!(state.longest_breaks.is_none());
    }

    #[test]
    fn default_matches_initial() {
        assert_eq!(GameState::default(), GameState::initial());
    }

    #[test]
    fn points_remaining_counts_reds_with_blacks() {
        assert_eq!(GameState::initial().points_remaining(), 147);

        let end_phase = GameState {
            reds_remaining: 0,
            colors_remaining: 2,
            ..GameState::initial()
        };
        assert_eq!(end_phase.points_remaining(), 13);
    }

    #[test]
    fn score_reads_by_player() {
        let state = GameState {
            scores: [12, 30],
            ..GameState::initial()
        };
        assert_eq!(state.score(Player::One), 12);
        assert_eq!(state.score(Player::Two), 30);
        assert_eq!(state.total_score(), 42);
    }

    #[test]
    fn state_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(GameState::initial()).unwrap();
        assert_eq!(json["redsRemaining"], 15);
        assert_eq!(json["currentPlayer"], 0);
        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, GameState::initial());
    }
}
