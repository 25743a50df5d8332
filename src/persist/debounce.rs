//! Debounced background saving.
//!
//! Every change to a game reschedules a single pending save; the save only
//! runs once the game has been idle for the configured delay. Durability is
//! best effort: a crash before the timer fires loses the latest actions
//! from the store, while the in-memory log stays authoritative.

use super::{GameStore, PersistError, PersistedGame};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Settings for debounced saving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutosaveConfig {
    /// Idle time after the last change before the game is written
    pub delay: Duration,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

impl AutosaveConfig {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

/// Writes games to a store after a quiet period, coalescing bursts of
/// changes into one write.
///
/// Scheduling a save cancels the pending one and starts the timer again.
/// Failed writes are logged and not retried; the next change schedules a
/// fresh attempt.
pub struct DebouncedSaver {
    store: Arc<dyn GameStore>,
    config: AutosaveConfig,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DebouncedSaver {
    /// Create a saver on the current tokio runtime.
    pub fn new(store: Arc<dyn GameStore>, config: AutosaveConfig) -> Result<Self, PersistError> {
        let runtime = Handle::try_current().map_err(|_| PersistError::NoRuntime)?;
        Ok(Self::with_runtime(store, config, runtime))
    }

    /// Create a saver that spawns its timers on `runtime`.
    pub fn with_runtime(store: Arc<dyn GameStore>, config: AutosaveConfig, runtime: Handle) -> Self {
        Self {
            store,
            config,
            runtime,
            pending: Mutex::new(None),
        }
    }

    pub fn config(&self) -> AutosaveConfig {
        self.config
    }

    /// Replace any pending save with one for `game` after the delay.
    pub fn schedule(&self, game: PersistedGame) {
        let store = Arc::clone(&self.store);
        let delay = self.config.delay;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            save(store.as_ref(), &game);
        });

        if let Some(previous) = self.lock_pending().replace(task) {
            previous.abort();
        }
    }

    /// Drop the pending save, if any.
    pub fn cancel(&self) {
        if let Some(task) = self.lock_pending().take() {
            task.abort();
        }
    }

    /// A save is scheduled and has not run yet.
    pub fn has_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Wait for the pending save, if any, to run.
    pub async fn flush(&self) {
        let task = self.lock_pending().take();
        if let Some(task) = task {
            // an aborted task is the only way this errors
            let _ = task.await;
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn save(store: &dyn GameStore, game: &PersistedGame) {
    match store.put(&game.game_id, game) {
        Ok(()) => debug!(
            game_id = %game.game_id,
            events = game.events.len(),
            "game saved"
        ),
        Err(e) => error!(game_id = %game.game_id, error = %e, "failed to save game"),
    }
}
