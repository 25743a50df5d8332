//! Frame scenarios driven through the public game log API.

use snooker_ledger::builder::GameLogBuilder;
use snooker_ledger::core::{ColorName, FoulPoints, GameState, Player};
use snooker_ledger::game::GameLog;

fn log_at(initial: GameState) -> GameLog {
    GameLogBuilder::new()
        .game_id("scenario")
        .initial_state(initial)
        .build()
        .unwrap()
}

fn end_phase(colors_remaining: u8, scores: [u32; 2]) -> GameState {
    GameState {
        on_red: false,
        reds_remaining: 0,
        colors_remaining,
        scores,
        ..GameState::initial()
    }
}

#[test]
fn opening_red() {
    let mut log = GameLog::new();
    log.pot(ColorName::Red, 1);

    let state = log.state();
    assert_eq!(state.scores, [1, 0]);
    assert_eq!(state.current_break, 1);
    assert!(!state.on_red);
    assert_eq!(state.reds_remaining, 14);
}

#[test]
fn blue_before_yellow_is_rejected() {
    let mut log = log_at(end_phase(6, [20, 10]));
    let before = log.state().clone();

    assert!(!log.pot(ColorName::Blue, 5));

    assert_eq!(log.state(), &before);
    assert!(log.events().is_empty());
}

#[test]
fn final_black_wins_the_frame() {
    let mut log = log_at(end_phase(1, [50, 45]));
    log.pot(ColorName::Black, 7);

    let state = log.state();
    assert_eq!(state.scores, [57, 45]);
    assert!(state.is_over);
    assert_eq!(state.winner, Some(Player::One));
}

#[test]
fn tie_on_final_black_goes_to_respot() {
    let mut log = log_at(end_phase(1, [43, 50]));
    log.pot(ColorName::Black, 7);

    let state = log.state();
    assert_eq!(state.scores, [50, 50]);
    assert!(state.is_respot);
    assert_eq!(state.colors_remaining, 1);
    assert!(!state.is_over);
}

#[test]
fn respot_is_tossed_chosen_and_decided() {
    let mut log = log_at(end_phase(1, [43, 50]));
    log.pot(ColorName::Black, 7);
    log.toss_for_respot();

    let winner = log.state().respot_choice.expect("toss winner");
    assert!(log.choose_respot_turn(false));
    assert_eq!(log.state().current_player, winner.other());
    assert!(log.state().respot_choice.is_none());

    assert!(log.pot(ColorName::Black, 7));
    let state = log.state();
    assert!(state.is_over);
    assert_eq!(state.winner, Some(winner.other()));
    assert!(state.highest_breaks.is_some());
}

#[test]
fn free_ball_after_last_red() {
    let mut log = log_at(GameState {
        reds_remaining: 1,
        ..GameState::initial()
    });

    log.pot(ColorName::Red, 1);
    assert_eq!(log.state().reds_remaining, 0);
    assert!(log.state().is_free_ball);

    // yellow would be next in sequence, but the free ball allows any colour
    assert!(log.pot(ColorName::Black, 7));
    assert_eq!(log.state().colors_remaining, 6);
    assert!(!log.state().is_free_ball);

    assert!(!log.pot(ColorName::Black, 7));
    assert!(log.pot(ColorName::Yellow, 2));
    assert_eq!(log.state().colors_remaining, 5);
}

#[test]
fn foul_losing_a_red() {
    let mut log = log_at(GameState {
        scores: [10, 5],
        current_break: 10,
        reds_remaining: 3,
        ..GameState::initial()
    });

    log.foul(FoulPoints::Four, true);

    let state = log.state();
    assert_eq!(state.scores, [10, 9]);
    assert_eq!(state.reds_remaining, 2);
    assert_eq!(state.current_player, Player::Two);
    assert_eq!(state.current_break, 0);
}

#[test]
fn foul_on_last_colour_leaves_frame_unresolved() {
    let mut log = log_at(end_phase(1, [60, 20]));
    log.foul(FoulPoints::Seven, true);

    let state = log.state();
    assert_eq!(state.colors_remaining, 0);
    assert!(!state.is_over);
    assert!(state.winner.is_none());
    assert!(!log.pot(ColorName::Black, 7));
}

#[test]
fn undo_of_respot_choice_restores_toss_winner() {
    let mut log = log_at(end_phase(1, [43, 50]));
    log.pot(ColorName::Black, 7);
    log.toss_for_respot();
    let winner = log.state().respot_choice;

    log.choose_respot_turn(true);
    log.undo_last_event();

    assert_eq!(log.state().respot_choice, winner);
    assert!(log.choose_respot_turn(true));
}

#[test]
fn maximum_break() {
    let mut log = GameLog::new();

    // player one clears the reds with blacks
    for _ in 0..15 {
        assert!(log.pot(ColorName::Red, 1));
        assert!(log.pot(ColorName::Black, 7));
    }
    assert_eq!(log.state().reds_remaining, 0);
    assert_eq!(log.state().scores, [120, 0]);
    assert!(!log.state().is_free_ball);

    for color in ColorName::END_GAME_ORDER {
        assert!(log.pot(color, color.points()));
    }

    let state = log.state();
    assert_eq!(state.scores, [147, 0]);
    assert!(state.is_over);
    assert_eq!(state.winner, Some(Player::One));
    assert_eq!(state.longest_breaks, Some([36, 0]));
    assert_eq!(state.highest_breaks, Some([147, 0]));
}
