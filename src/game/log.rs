//! The game log aggregate.

use super::observer::{Observers, SubscriptionId};
use crate::core::{
    advance, derive_state_from, ColorName, EventKind, FoulPoints, GameEvent, GameState, Player,
};
use crate::persist::PersistedGame;
use crate::rules::validate_pot;
use rand::Rng;
use std::fmt;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Owner of one game's event log and its derived state.
///
/// Every action either appends exactly one event or does nothing. The state
/// is kept current incrementally on append and rebuilt by full replay on
/// undo. Observers are told after every change.
///
/// # Example
///
/// ```rust
/// use snooker_ledger::core::{ColorName, Player};
/// use snooker_ledger::game::GameLog;
///
/// let mut log = GameLog::with_id("frame-1");
/// assert!(log.pot(ColorName::Red, 1));
/// assert!(log.pot(ColorName::Black, 7));
/// assert!(!log.pot(ColorName::Black, 7)); // a red is on
///
/// assert_eq!(log.state().scores, [8, 0]);
/// assert_eq!(log.state().current_break, 8);
///
/// log.miss();
/// assert_eq!(log.state().current_player, Player::Two);
///
/// log.undo_last_event();
/// assert_eq!(log.state().current_player, Player::One);
/// ```
pub struct GameLog {
    game_id: String,
    events: Vec<GameEvent>,
    initial: GameState,
    state: GameState,
    observers: Observers,
}

impl GameLog {
    /// A fresh frame under a newly generated id.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// A fresh frame under the given id.
    pub fn with_id(game_id: impl Into<String>) -> Self {
        Self::from_parts(game_id.into(), GameState::initial(), Vec::new())
    }

    /// Rebuild a live log from a persisted one.
    pub fn from_persisted(game: PersistedGame) -> Result<Self, crate::builder::BuildError> {
        crate::builder::GameLogBuilder::new().persisted(game).build()
    }

    pub(crate) fn from_parts(game_id: String, initial: GameState, events: Vec<GameEvent>) -> Self {
        let state = derive_state_from(&initial, &events);
        Self {
            game_id,
            events,
            initial,
            state,
            observers: Observers::default(),
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Current derived state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The state the log is replayed from.
    pub fn initial_state(&self) -> &GameState {
        &self.initial
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn last_event(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    /// Snapshot of the durable part of the log, including the starting
    /// position when it is not a full rack.
    pub fn to_persisted(&self) -> PersistedGame {
        PersistedGame::new(self.game_id.clone(), self.events.clone())
            .with_initial_state(self.initial.clone())
    }

    /// Run `observer` after every change to this log.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&GameLog) + Send + Sync + 'static,
    {
        self.observers.add(Box::new(observer))
    }

    /// Stop notifying an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Pot a ball for the player at the table.
    ///
    /// Does nothing and returns false if the pot breaks a sequencing rule.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn pot(&mut self, color: ColorName, points: u32) -> bool {
        if !validate_pot(&self.state, color) {
            debug!("invalid pot, state unchanged");
            return false;
        }
        self.append(self.state.current_player, EventKind::Pot { color, points })
    }

    /// End the current player's visit.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn miss(&mut self) -> bool {
        self.append(self.state.current_player, EventKind::Miss)
    }

    /// Record a foul by the player at the table.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn foul(&mut self, points: FoulPoints, lost_ball: bool) -> bool {
        self.append(
            self.state.current_player,
            EventKind::Foul { points, lost_ball },
        )
    }

    /// Toss a fair coin for the respotted black.
    pub fn toss_for_respot(&mut self) -> bool {
        self.toss_for_respot_with(&mut rand::thread_rng())
    }

    /// Toss for the respotted black using the given random source.
    #[instrument(skip(self, rng), fields(game_id = %self.game_id))]
    pub fn toss_for_respot_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let winner = if rng.gen_bool(0.5) {
            Player::One
        } else {
            Player::Two
        };
        self.append(winner, EventKind::RespotTossWinner)
    }

    /// Let the toss winner decide whether to play first.
    ///
    /// Does nothing and returns false if no toss is awaiting a choice.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn choose_respot_turn(&mut self, go_first: bool) -> bool {
        let Some(winner) = self.state.respot_choice else {
            debug!("needs respot toss winner, state unchanged");
            return false;
        };
        self.append(winner, EventKind::RespotChoice { go_first })
    }

    /// Drop the last event and replay the rest from the initial state.
    ///
    /// The reducer has no inverse, so the state is rebuilt from scratch
    /// rather than stepped back.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn undo_last_event(&mut self) -> bool {
        let Some(undone) = self.events.pop() else {
            debug!("nothing to undo");
            return false;
        };
        debug!(sequence = undone.sequence_number, event = %undone, "undoing event");
        self.state = derive_state_from(&self.initial, &self.events);
        self.observers.notify(self);
        true
    }

    /// Discard the log and start a new frame under a new id.
    ///
    /// Subscriptions survive the reset.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn reset_game(&mut self) {
        self.game_id = Uuid::new_v4().to_string();
        self.events.clear();
        self.initial = GameState::initial();
        self.state = self.initial.clone();
        info!(new_game_id = %self.game_id, "game reset");
        self.observers.notify(self);
    }

    fn append(&mut self, player: Player, kind: EventKind) -> bool {
        let event = GameEvent::now(self.events.len() as u64, player, kind);
        debug!(sequence = event.sequence_number, event = %event, "appending event");

        let was_over = self.state.is_over;
        self.events.push(event);
        self.state = advance(&self.state, &self.events);

        if !was_over && self.state.is_over {
            info!(
                winner = ?self.state.winner,
                scores = ?self.state.scores,
                "frame over"
            );
        }

        self.observers.notify(self);
        true
    }
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameLog")
            .field("game_id", &self.game_id)
            .field("events", &self.events.len())
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
