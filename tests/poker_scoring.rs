use exodus_bot::commands::games::card::{Card, Rank, Suit};
use exodus_bot::commands::poker::score::hand_score;
use exodus_bot::commands::poker::state::PokerGame;
use std::collections::HashSet;

fn hand(layout: &[(Rank, Suit)]) -> Vec<Card> {
    layout.iter().map(|&(rank, suit)| Card { suit, rank }).collect()
}

#[test]
fn straight_flush_stacks_both_bonuses() {
    let cards = hand(&[
        (Rank::Two, Suit::Hearts),
        (Rank::Three, Suit::Hearts),
        (Rank::Four, Suit::Hearts),
        (Rank::Five, Suit::Hearts),
        (Rank::Six, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 1100);
}

#[test]
fn plain_straight_scores_100() {
    let cards = hand(&[
        (Rank::Seven, Suit::Hearts),
        (Rank::Eight, Suit::Clubs),
        (Rank::Nine, Suit::Spades),
        (Rank::Ten, Suit::Diamonds),
        (Rank::Jack, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 100);
}

#[test]
fn ace_high_straight_counts() {
    let cards = hand(&[
        (Rank::Ten, Suit::Hearts),
        (Rank::Jack, Suit::Clubs),
        (Rank::Queen, Suit::Spades),
        (Rank::King, Suit::Diamonds),
        (Rank::Ace, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 100);
}

#[test]
fn wheel_is_not_a_straight() {
    // Ace is strictly high in this evaluator; A-2-3-4-5 spans 12 ranks.
    let cards = hand(&[
        (Rank::Ace, Suit::Hearts),
        (Rank::Two, Suit::Clubs),
        (Rank::Three, Suit::Spades),
        (Rank::Four, Suit::Diamonds),
        (Rank::Five, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 0);
}

#[test]
fn plain_flush_scores_1000() {
    let cards = hand(&[
        (Rank::Two, Suit::Spades),
        (Rank::Five, Suit::Spades),
        (Rank::Nine, Suit::Spades),
        (Rank::Jack, Suit::Spades),
        (Rank::King, Suit::Spades),
    ]);
    assert_eq!(hand_score(&cards), 1000);
}

#[test]
fn four_of_a_kind_scores_750() {
    let cards = hand(&[
        (Rank::Nine, Suit::Hearts),
        (Rank::Nine, Suit::Clubs),
        (Rank::Nine, Suit::Spades),
        (Rank::Nine, Suit::Diamonds),
        (Rank::Two, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 750);
}

#[test]
fn full_house_scores_500() {
    let cards = hand(&[
        (Rank::Nine, Suit::Hearts),
        (Rank::Nine, Suit::Clubs),
        (Rank::Nine, Suit::Spades),
        (Rank::Two, Suit::Diamonds),
        (Rank::Two, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 500);
}

#[test]
fn three_of_a_kind_scores_250() {
    let cards = hand(&[
        (Rank::Seven, Suit::Hearts),
        (Rank::Seven, Suit::Clubs),
        (Rank::Seven, Suit::Spades),
        (Rank::Two, Suit::Diamonds),
        (Rank::Nine, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 250);
}

#[test]
fn two_pair_scores_100() {
    let cards = hand(&[
        (Rank::Seven, Suit::Hearts),
        (Rank::Seven, Suit::Clubs),
        (Rank::Nine, Suit::Spades),
        (Rank::Nine, Suit::Diamonds),
        (Rank::Two, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 100);
}

#[test]
fn one_pair_scores_50() {
    let cards = hand(&[
        (Rank::Seven, Suit::Hearts),
        (Rank::Seven, Suit::Clubs),
        (Rank::Nine, Suit::Spades),
        (Rank::Jack, Suit::Diamonds),
        (Rank::Two, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 50);
}

#[test]
fn high_card_scores_zero() {
    let cards = hand(&[
        (Rank::Seven, Suit::Hearts),
        (Rank::Four, Suit::Clubs),
        (Rank::Nine, Suit::Spades),
        (Rank::Jack, Suit::Diamonds),
        (Rank::Two, Suit::Hearts),
    ]);
    assert_eq!(hand_score(&cards), 0);
}

#[test]
fn deal_shares_one_deck_without_replacement() {
    for _ in 0..50 {
        let game = PokerGame::new().expect("fresh deck covers both hands");
        assert_eq!(game.player.len(), 5);
        assert_eq!(game.dealer.len(), 5);
        assert_eq!(game.deck.remaining(), 42);
        let all: HashSet<Card> = game.player.iter().chain(game.dealer.iter()).copied().collect();
        assert_eq!(all.len(), 10, "player and dealer hands overlap");
    }
}

#[test]
fn discards_are_replaced_from_the_same_deck() {
    let mut game = PokerGame::new().expect("fresh deck covers both hands");
    let dealer_before = game.dealer.clone();
    game.toggle_mark(0);
    game.toggle_mark(3);
    game.draw_and_settle().expect("deck covers two replacements");
    assert_eq!(game.player.len(), 5);
    assert_eq!(game.deck.remaining(), 40);
    // The dealer hand is fixed; only the player redraws.
    assert_eq!(game.dealer, dealer_before);
    assert!(game.player_score.is_some());
    assert!(game.dealer_score.is_some());
    assert!(game.outcome.is_some());
    let all: HashSet<Card> = game.player.iter().chain(game.dealer.iter()).copied().collect();
    assert_eq!(all.len(), 10, "replacement introduced a duplicate card");
}

#[test]
fn keeping_everything_scores_the_dealt_hand() {
    let mut game = PokerGame::new().expect("fresh deck covers both hands");
    let player_before = game.player.clone();
    game.draw_and_settle().expect("no replacements needed");
    assert_eq!(game.player, player_before);
    assert_eq!(game.player_score, Some(hand_score(&player_before)));
}
