//! Autosave and reload of live games through the store gateway.

use snooker_ledger::core::{ColorName, FoulPoints};
use snooker_ledger::game::GameLog;
use snooker_ledger::persist::{
    attach_autosave, load_game, AutosaveConfig, DebouncedSaver, FileStore, GameStore,
    LoadOutcome, MemoryStore,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn actions_are_saved_after_idle_window() {
    let store = Arc::new(MemoryStore::new());
    let saver = Arc::new(DebouncedSaver::new(store.clone(), AutosaveConfig::default()).unwrap());

    let mut log = GameLog::with_id("autosaved");
    attach_autosave(&mut log, Arc::clone(&saver));

    log.pot(ColorName::Red, 1);
    log.pot(ColorName::Pink, 6);
    log.miss();
    assert!(store.get("autosaved").unwrap().is_none());

    tokio::time::sleep(Duration::from_secs(2)).await;

    let saved = store.get("autosaved").unwrap().unwrap();
    assert_eq!(saved.events.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn undo_is_saved_too() {
    let store = Arc::new(MemoryStore::new());
    let saver = Arc::new(DebouncedSaver::new(store.clone(), AutosaveConfig::default()).unwrap());

    let mut log = GameLog::with_id("undone");
    attach_autosave(&mut log, Arc::clone(&saver));

    log.pot(ColorName::Red, 1);
    log.foul(FoulPoints::Five, false);
    saver.flush().await;
    assert_eq!(store.get("undone").unwrap().unwrap().events.len(), 2);

    log.undo_last_event();
    saver.flush().await;
    assert_eq!(store.get("undone").unwrap().unwrap().events.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn reset_saves_under_the_new_id() {
    let store = Arc::new(MemoryStore::new());
    let saver = Arc::new(DebouncedSaver::new(store.clone(), AutosaveConfig::default()).unwrap());

    let mut log = GameLog::with_id("first");
    attach_autosave(&mut log, Arc::clone(&saver));
    log.pot(ColorName::Red, 1);
    saver.flush().await;

    log.reset_game();
    saver.flush().await;

    assert_eq!(store.get("first").unwrap().unwrap().events.len(), 1);
    let fresh = store.get(log.game_id()).unwrap().unwrap();
    assert!(fresh.events.is_empty());
}

#[tokio::test(start_paused = true)]
async fn saved_game_reloads_into_same_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()).unwrap());
    let saver = Arc::new(
        DebouncedSaver::new(
            store.clone(),
            AutosaveConfig::with_delay(Duration::from_millis(200)),
        )
        .unwrap(),
    );

    let mut log = GameLog::with_id("on-disk");
    attach_autosave(&mut log, Arc::clone(&saver));
    log.pot(ColorName::Red, 1);
    log.pot(ColorName::Black, 7);
    log.miss();
    saver.flush().await;

    match load_game(&*store, "on-disk").unwrap() {
        LoadOutcome::Loaded(reloaded) => {
            assert_eq!(reloaded.state(), log.state());
            assert_eq!(reloaded.events(), log.events());
        }
        LoadOutcome::NotFound => panic!("Expected saved game"),
    }

    assert!(matches!(
        load_game(&*store, "never-saved").unwrap(),
        LoadOutcome::NotFound
    ));
}
