use exodus_bot::commands::blackjack::state::{BlackjackGame, GamePhase, Hand, Outcome};
use exodus_bot::commands::games::card::{Card, Rank, Suit};
use exodus_bot::commands::games::engine::{Game, GameUpdate};
use exodus_bot::constants::{BLACKJACK_TARGET, DEALER_STANDS_AT};

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(Card {
            suit: Suit::Spades,
            rank,
        });
    }
    hand
}

#[test]
fn ace_king_is_twenty_one() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::King]).score(), 21);
}

#[test]
fn double_ace_reduces_once() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).score(), 21);
}

#[test]
fn face_cards_can_bust() {
    assert_eq!(hand_of(&[Rank::King, Rank::Queen, Rank::Two]).score(), 22);
}

#[test]
fn all_aces_reduce_as_needed() {
    // Four aces: 11 + 1 + 1 + 1.
    assert_eq!(
        hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).score(),
        14
    );
}

#[test]
fn opening_deal_gives_two_cards_each() {
    for _ in 0..50 {
        let game = BlackjackGame::new().expect("fresh deck covers the deal");
        assert_eq!(game.player.cards.len(), 2);
        assert_eq!(game.dealer.cards.len(), 2);
        assert_eq!(game.deck.remaining(), 48);
        match game.phase {
            GamePhase::Settled => {
                // Only an initial 21 settles immediately, as a blackjack.
                assert_eq!(game.player.score(), BLACKJACK_TARGET);
                assert_eq!(game.outcome, Some(Outcome::PlayerBlackjack));
            }
            GamePhase::PlayerTurn => assert!(game.player.score() < BLACKJACK_TARGET),
            other => panic!("unexpected phase after deal: {:?}", other),
        }
    }
}

#[test]
fn stand_makes_dealer_draw_to_seventeen() {
    for _ in 0..50 {
        let mut game = BlackjackGame::new().expect("fresh deck covers the deal");
        if game.phase != GamePhase::PlayerTurn {
            continue;
        }
        game.stand().expect("one round never exhausts the deck");
        assert_eq!(game.phase, GamePhase::Settled);
        assert!(game.dealer.score() >= DEALER_STANDS_AT);
        let outcome = game.outcome.expect("settled round has an outcome");
        let (player, dealer) = (game.player.score(), game.dealer.score());
        match outcome {
            Outcome::DealerBust => assert!(dealer > BLACKJACK_TARGET),
            Outcome::PlayerWin => assert!(player > dealer),
            Outcome::DealerWin => assert!(dealer > player && dealer <= BLACKJACK_TARGET),
            Outcome::Push => assert_eq!(player, dealer),
            other => panic!("unexpected stand outcome: {:?}", other),
        }
    }
}

#[test]
fn hitting_until_the_end_busts_or_settles() {
    for _ in 0..50 {
        let mut game = BlackjackGame::new().expect("fresh deck covers the deal");
        let mut hits = 0;
        while game.phase == GamePhase::PlayerTurn && game.player.score() < BLACKJACK_TARGET {
            game.hit().expect("one round never exhausts the deck");
            hits += 1;
            assert_eq!(game.player.cards.len(), 2 + hits);
        }
        if game.phase == GamePhase::Settled && game.outcome == Some(Outcome::PlayerBust) {
            assert!(game.player.score() > BLACKJACK_TARGET);
        }
    }
}

#[test]
fn play_again_starts_a_fresh_round() {
    let mut game = BlackjackGame::new().expect("fresh deck covers the deal");
    let first_round = game.rounds_played;
    // Reach Settled through whatever path the deal allows.
    if game.phase == GamePhase::PlayerTurn {
        game.stand().expect("one round never exhausts the deck");
    }
    assert!(matches!(
        game.handle_input("bj_again"),
        GameUpdate::ReRender
    ));
    assert_eq!(game.rounds_played, first_round + 1);
    assert_eq!(game.player.cards.len(), 2);
    assert_eq!(game.dealer.cards.len(), 2);
}

#[test]
fn stale_inputs_are_ignored() {
    let mut game = BlackjackGame::new().expect("fresh deck covers the deal");
    if game.phase == GamePhase::PlayerTurn {
        // Settled-phase buttons do nothing during the player turn.
        assert!(matches!(game.handle_input("bj_again"), GameUpdate::NoOp));
        assert!(matches!(game.handle_input("bj_quit"), GameUpdate::NoOp));
    } else {
        // And vice versa.
        assert!(matches!(game.handle_input("bj_hit"), GameUpdate::NoOp));
        assert!(matches!(game.handle_input("bj_stand"), GameUpdate::NoOp));
    }
}

#[test]
fn quit_ends_the_session() {
    let mut game = BlackjackGame::new().expect("fresh deck covers the deal");
    if game.phase == GamePhase::PlayerTurn {
        game.stand().expect("one round never exhausts the deck");
    }
    assert!(matches!(
        game.handle_input("bj_quit"),
        GameUpdate::GameOver(_)
    ));
}
