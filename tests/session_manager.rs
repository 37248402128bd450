use exodus_bot::commands::games::engine::{AdvanceOutcome, GameManager, GameUpdate, SessionKey};
use exodus_bot::commands::roulette::game::RouletteGame;
use serenity::model::id::{ChannelId, UserId};
use std::time::Duration;

fn key(user: u64, channel: u64) -> SessionKey {
    SessionKey {
        user: UserId::new(user),
        channel: ChannelId::new(channel),
    }
}

#[test]
fn unknown_key_has_no_session() {
    let mut manager = GameManager::new();
    assert!(matches!(
        manager.advance(&key(1, 1), "rr_pull"),
        AdvanceOutcome::NoSession
    ));
}

#[test]
fn sessions_are_keyed_per_user_and_channel() {
    let mut manager = GameManager::new();
    manager.start_session(key(1, 10), Box::new(RouletteGame::new()));
    assert_eq!(manager.session_count(), 1);
    // Same user, different channel: no session.
    assert!(matches!(
        manager.advance(&key(1, 11), "rr_pull"),
        AdvanceOutcome::NoSession
    ));
    // Different user, same channel: no session.
    assert!(matches!(
        manager.advance(&key(2, 10), "rr_pull"),
        AdvanceOutcome::NoSession
    ));
}

#[test]
fn game_over_removes_the_session() {
    let mut manager = GameManager::new();
    manager.start_session(key(1, 1), Box::new(RouletteGame::new()));
    let outcome = manager.advance(&key(1, 1), "rr_walk");
    match outcome {
        AdvanceOutcome::Update { update, components, .. } => {
            assert!(matches!(update, GameUpdate::GameOver(_)));
            assert!(components.is_empty());
        }
        _ => panic!("expected an update"),
    }
    assert_eq!(manager.session_count(), 0);
}

#[test]
fn starting_a_new_game_replaces_the_old_session() {
    let mut manager = GameManager::new();
    manager.start_session(key(1, 1), Box::new(RouletteGame::new()));
    manager.start_session(key(1, 1), Box::new(RouletteGame::new()));
    assert_eq!(manager.session_count(), 1);
}

#[test]
fn idle_sessions_expire_on_input() {
    let mut manager = GameManager::with_idle_timeout(Duration::from_millis(1));
    manager.start_session(key(1, 1), Box::new(RouletteGame::new()));
    std::thread::sleep(Duration::from_millis(10));
    assert!(matches!(
        manager.advance(&key(1, 1), "rr_pull"),
        AdvanceOutcome::Expired
    ));
    assert_eq!(manager.session_count(), 0);
}

#[test]
fn sweeper_drops_only_idle_sessions() {
    let mut manager = GameManager::with_idle_timeout(Duration::from_millis(20));
    manager.start_session(key(1, 1), Box::new(RouletteGame::new()));
    std::thread::sleep(Duration::from_millis(40));
    manager.start_session(key(2, 2), Box::new(RouletteGame::new()));
    let swept = manager.sweep_idle();
    assert_eq!(swept, vec![key(1, 1)]);
    assert_eq!(manager.session_count(), 1);
}

#[test]
fn roulette_is_one_shot() {
    let mut manager = GameManager::new();
    manager.start_session(key(1, 1), Box::new(RouletteGame::new()));
    let outcome = manager.advance(&key(1, 1), "rr_pull");
    match outcome {
        AdvanceOutcome::Update { update, .. } => {
            assert!(matches!(update, GameUpdate::GameOver(_)));
        }
        _ => panic!("expected an update"),
    }
    // Either way the pull ends the game.
    assert_eq!(manager.session_count(), 0);
}
