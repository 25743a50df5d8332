//! The event reducer.
//!
//! `update_state_with_event` is a pure fold step: it takes a state and an
//! event and returns the next state. It never fails. Illegal pots are
//! absorbed as no-ops, and every other event kind is well-formed by
//! construction.

use super::ball::{ColorName, Player};
use super::event::{EventKind, GameEvent};
use super::state::GameState;
use super::stats::calculate_break_stats;
use crate::rules::validate_pot;

/// Apply one event to a state, returning the next state.
///
/// # Example
///
/// ```rust
/// use snooker_ledger::core::{update_state_with_event, ColorName, EventKind, GameEvent, GameState, Player};
///
/// let event = GameEvent::now(0, Player::One, EventKind::Pot { color: ColorName::Red, points: 1 });
/// let state = update_state_with_event(&GameState::initial(), &event);
///
/// assert_eq!(state.scores, [1, 0]);
/// assert_eq!(state.reds_remaining, 14);
/// assert!(!state.on_red);
/// ```
pub fn update_state_with_event(state: &GameState, event: &GameEvent) -> GameState {
    match &event.kind {
        EventKind::Pot { color, points } => {
            if !validate_pot(state, *color) {
                return state.clone();
            }
            apply_pot(state, *color, *points, event.player)
        }

        EventKind::Miss => GameState {
            current_player: state.current_player.other(),
            current_break: 0,
            on_red: state.reds_remaining > 0,
            is_free_ball: false,
            ..state.clone()
        },

        EventKind::Foul { points, lost_ball } => {
            let mut next = state.clone();
            let opponent = state.current_player.other();
            next.scores[opponent.index()] += points.points();

            if *lost_ball {
                if state.on_red {
                    next.reds_remaining = next.reds_remaining.saturating_sub(1);
                } else {
                    next.colors_remaining = next.colors_remaining.saturating_sub(1);
                }
            }

            next.current_player = opponent;
            next.current_break = 0;
            next.on_red = next.reds_remaining > 0;
            next.is_free_ball = false;
            next
        }

        EventKind::RespotTossWinner => GameState {
            is_respot: true,
            respot_choice: Some(event.player),
            is_free_ball: false,
            ..state.clone()
        },

        EventKind::RespotChoice { go_first } => GameState {
            current_player: if *go_first {
                event.player
            } else {
                event.player.other()
            },
            respot_choice: None,
            is_respot: true,
            is_free_ball: false,
            ..state.clone()
        },
    }
}

fn apply_pot(state: &GameState, color: ColorName, points: u32, player: Player) -> GameState {
    let was_free_ball = state.is_free_ball;
    let end_phase = state.is_end_phase();

    let mut next = state.clone();
    next.scores[player.index()] += points;
    next.current_break += points;
    next.is_free_ball = false;

    if color.is_red() {
        next.reds_remaining = next.reds_remaining.saturating_sub(1);
        next.on_red = false;
        if next.reds_remaining == 0 {
            next.is_free_ball = true;
        }
    } else if !end_phase {
        next.on_red = true;
    } else if was_free_ball {
        // the free-ball colour does not take a slot in the sequence
        next.on_red = false;
    } else {
        next.colors_remaining = next.colors_remaining.saturating_sub(1);
        next.on_red = false;
        if next.colors_remaining == 0 {
            resolve_end_of_frame(&mut next);
        }
    }

    next
}

/// Decide the frame once the last colour is down: respot the black on a
/// tie, otherwise declare the higher score the winner.
fn resolve_end_of_frame(state: &mut GameState) {
    let [first, second] = state.scores;
    if first == second {
        state.colors_remaining = 1;
        state.is_respot = true;
        return;
    }

    state.is_over = true;
    state.winner = Some(if first > second {
        Player::One
    } else {
        Player::Two
    });
}

/// Apply the last event of `events` to `state`, attaching break statistics
/// if that event ends the frame.
///
/// `events` must be the full log up to and including the event being
/// applied; statistics are computed from it.
pub(crate) fn advance(state: &GameState, events: &[GameEvent]) -> GameState {
    let Some(event) = events.last() else {
        return state.clone();
    };

    let mut next = update_state_with_event(state, event);
    if !state.is_over && next.is_over {
        let stats = calculate_break_stats(events);
        next.longest_breaks = Some(stats.longest_breaks);
        next.highest_breaks = Some(stats.highest_breaks);
    }
    next
}

/// Replay a log from a fresh rack.
///
/// Pure: the same events always produce the same state.
pub fn derive_state(events: &[GameEvent]) -> GameState {
    derive_state_from(&GameState::initial(), events)
}

/// Replay a log from an explicit starting state.
pub fn derive_state_from(initial: &GameState, events: &[GameEvent]) -> GameState {
    (1..=events.len()).fold(initial.clone(), |state, end| {
        advance(&state, &events[..end])
    })
}
