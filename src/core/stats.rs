//! Break statistics for a finished frame.

use super::ball::Player;
use super::event::{EventKind, GameEvent};
use serde::{Deserialize, Serialize};

/// Best breaks per player, indexed by [`Player::index`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakStats {
    /// Most consecutive pots
    pub longest_breaks: [u32; 2],
    /// Most points in one visit
    pub highest_breaks: [u32; 2],
}

#[derive(Default)]
struct RunningBreak {
    owner: Option<Player>,
    length: u32,
    score: u32,
}

impl RunningBreak {
    fn commit(&mut self, stats: &mut BreakStats) {
        if let Some(owner) = self.owner {
            let i = owner.index();
            stats.longest_breaks[i] = stats.longest_breaks[i].max(self.length);
            stats.highest_breaks[i] = stats.highest_breaks[i].max(self.score);
        }
        *self = RunningBreak::default();
    }
}

/// Walk a log and find each player's longest and highest break.
///
/// A break is a run of consecutive pot events. Any other event, from either
/// player, closes it and credits it to the player who made the pots. A
/// break still open at the end of the log is credited too. A pot by the
/// other player also closes the running break; a `GameLog` only changes
/// turn through a non-pot event, so this only matters for hand-built logs.
///
/// # Example
///
/// ```rust
/// use snooker_ledger::core::{calculate_break_stats, ColorName, EventKind, GameEvent, Player};
///
/// let events = vec![
///     GameEvent::now(0, Player::One, EventKind::Pot { color: ColorName::Red, points: 1 }),
///     GameEvent::now(1, Player::One, EventKind::Pot { color: ColorName::Black, points: 7 }),
///     GameEvent::now(2, Player::One, EventKind::Miss),
/// ];
///
/// let stats = calculate_break_stats(&events);
/// assert_eq!(stats.longest_breaks, [2, 0]);
/// assert_eq!(stats.highest_breaks, [8, 0]);
/// ```
pub fn calculate_break_stats(events: &[GameEvent]) -> BreakStats {
    let mut stats = BreakStats::default();
    let mut running = RunningBreak::default();

    for event in events {
        match &event.kind {
            EventKind::Pot { points, .. } => {
                if running.owner.is_some_and(|owner| owner != event.player) {
                    running.commit(&mut stats);
                }
                running.owner = Some(event.player);
                running.length += 1;
                running.score += points;
            }
            EventKind::Miss
            | EventKind::Foul { .. }
            | EventKind::RespotTossWinner
            | EventKind::RespotChoice { .. } => running.commit(&mut stats),
        }
    }
    running.commit(&mut stats);

    stats
}
