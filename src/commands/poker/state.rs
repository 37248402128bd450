//! Defines all data structures (structs and enums) for the five-card draw game.

use crate::commands::games::card::Card;
use crate::commands::games::deck::Deck;

/// Draw poker has a single decision point: which cards to throw away.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GamePhase {
    /// The player is marking cards to discard.
    Draw,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    DealerWin,
    Tie,
}

pub const HAND_SIZE: usize = 5;

pub struct PokerGame {
    pub deck: Deck,
    pub player: Vec<Card>,
    /// The dealer hand is dealt from the same deck and never redrawn; only the
    /// player gets a discard round. Intentional asymmetry.
    pub dealer: Vec<Card>,
    /// Which player cards are currently marked for discard.
    pub marked: [bool; HAND_SIZE],
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
    pub player_score: Option<u32>,
    pub dealer_score: Option<u32>,
    pub rounds_played: u32,
}
