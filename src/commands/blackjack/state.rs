//! Defines all data structures (structs and enums) for the Blackjack game.

use crate::commands::games::card::Card;
use crate::commands::games::deck::Deck;
use crate::constants::BLACKJACK_TARGET;

/// The round state machine: Dealing -> PlayerTurn -> DealerTurn -> Settled.
/// Dealing and DealerTurn are passed through synchronously; they never wait
/// for input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GamePhase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Initial two cards scored exactly 21; immediate win, the dealer never plays.
    PlayerBlackjack,
    /// Player went over 21; the dealer wins without playing.
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Push,
}

#[derive(Debug, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Blackjack score with ace adjustment: every Ace counts 11 first, then
    /// while the total busts and a soft ace remains, one ace drops to 1.
    pub fn score(&self) -> u8 {
        let (mut total, mut soft_aces): (u8, u8) = (0, 0);
        for card in &self.cards {
            let (value, is_ace) = card.rank.blackjack_value();
            total = total.saturating_add(value);
            if is_ace {
                soft_aces += 1;
            }
        }
        while total > BLACKJACK_TARGET && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        total
    }

    pub fn display(&self) -> String {
        self.cards
            .iter()
            .map(|c| format!("`{}`", c))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct BlackjackGame {
    pub deck: Deck,
    pub player: Hand,
    pub dealer: Hand,
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
    pub rounds_played: u32,
}
