//! Builder for constructing game logs.

use crate::builder::error::BuildError;
use crate::core::{GameEvent, GameState, INITIAL_COLORS, INITIAL_REDS};
use crate::game::GameLog;
use crate::persist::PersistedGame;
use uuid::Uuid;

/// Builder for a [`GameLog`] with a fluent API.
///
/// Used to resume a persisted game or to start from a position other than
/// a full rack.
///
/// # Example
///
/// ```rust
/// use snooker_ledger::builder::GameLogBuilder;
/// use snooker_ledger::core::{ColorName, GameState};
///
/// let mut log = GameLogBuilder::new()
///     .game_id("final-frame")
///     .initial_state(GameState {
///         on_red: false,
///         reds_remaining: 0,
///         colors_remaining: 1,
///         scores: [50, 45],
///         ..GameState::initial()
///     })
///     .build()
///     .unwrap();
///
/// log.pot(ColorName::Black, 7);
/// assert!(log.is_over());
/// ```
#[derive(Debug, Default)]
pub struct GameLogBuilder {
    game_id: Option<String>,
    initial: Option<GameState>,
    events: Vec<GameEvent>,
}

impl GameLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game id. A random one is generated if this is not called.
    pub fn game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }

    /// Set the state the log is replayed from (defaults to a full rack).
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the events already in the log.
    pub fn events(mut self, events: Vec<GameEvent>) -> Self {
        self.events = events;
        self
    }

    /// Take the id, events and any starting position from a persisted game.
    pub fn persisted(self, game: PersistedGame) -> Self {
        let builder = self.game_id(game.game_id).events(game.events);
        match game.initial_state {
            Some(state) => builder.initial_state(state),
            None => builder,
        }
    }

    /// Build the log, replaying any events.
    /// Returns an error if the id, initial state or event numbering is
    /// invalid.
    pub fn build(self) -> Result<GameLog, BuildError> {
        let game_id = match self.game_id {
            Some(id) if id.is_empty() => return Err(BuildError::EmptyGameId),
            Some(id) => id,
            None => Uuid::new_v4().to_string(),
        };

        let initial = self.initial.unwrap_or_default();
        if initial.reds_remaining > INITIAL_REDS {
            return Err(BuildError::RedsOutOfRange {
                found: initial.reds_remaining,
                max: INITIAL_REDS,
            });
        }
        if initial.colors_remaining > INITIAL_COLORS {
            return Err(BuildError::ColorsOutOfRange {
                found: initial.colors_remaining,
                max: INITIAL_COLORS,
            });
        }

        if let Some((index, event)) = self
            .events
            .iter()
            .enumerate()
            .find(|(index, event)| event.sequence_number != *index as u64)
        {
            return Err(BuildError::SequenceMismatch {
                index,
                found: event.sequence_number,
            });
        }

        Ok(GameLog::from_parts(game_id, initial, self.events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorName, EventKind, Player};

    fn red(sequence_number: u64) -> GameEvent {
        GameEvent::now(
            sequence_number,
            Player::One,
            EventKind::Pot {
                color: ColorName::Red,
                points: 1,
            },
        )
    }

    #[test]
    fn builder_defaults_to_fresh_rack() {
        let log = GameLogBuilder::new().build().unwrap();

        assert!(!log.game_id().is_empty());
        assert_eq!(log.state(), &GameState::initial());
        assert!(log.events().is_empty());
    }

    #[test]
    fn builder_rejects_empty_id() {
        let result = GameLogBuilder::new().game_id("").build();
        assert!(matches!(result, Err(BuildError::EmptyGameId)));
    }

    #[test]
    fn builder_rejects_too_many_reds() {
        let result = GameLogBuilder::new()
            .initial_state(GameState {
                reds_remaining: 16,
                ..GameState::initial()
            })
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::RedsOutOfRange { found: 16, max: 15 }
        );
    }

    #[test]
    fn builder_rejects_too_many_colours() {
        let result = GameLogBuilder::new()
            .initial_state(GameState {
                colors_remaining: 7,
                ..GameState::initial()
            })
            .build();

        assert!(matches!(
            result,
            Err(BuildError::ColorsOutOfRange { found: 7, .. })
        ));
    }

    #[test]
    fn builder_rejects_gaps_in_sequence() {
        let result = GameLogBuilder::new()
            .events(vec![red(0), red(2)])
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::SequenceMismatch { index: 1, found: 2 }
        );
    }

    #[test]
    fn builder_replays_events() {
        let log = GameLogBuilder::new()
            .game_id("replayed")
            .events(vec![red(0)])
            .build()
            .unwrap();

        assert_eq!(log.game_id(), "replayed");
        assert_eq!(log.state().scores, [1, 0]);
        assert_eq!(log.state().reds_remaining, 14);
    }

    #[test]
    fn builder_takes_persisted_game() {
        let game = PersistedGame::new("stored", vec![red(0)]);
        let log = GameLogBuilder::new().persisted(game).build().unwrap();

        assert_eq!(log.game_id(), "stored");
        assert_eq!(log.events().len(), 1);
    }
}
