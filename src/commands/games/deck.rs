//! A standard 52-card playing deck.

use super::card::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("the deck is empty")]
    Empty,
}

pub struct Deck {
    // Private so other modules must go through `draw`, which enforces the
    // no-card-twice invariant.
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a full 52-card deck in a fixed base ordering.
    /// Callers are expected to `shuffle` before play.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        Deck { cards }
    }

    /// Shuffles the deck into a uniform random permutation.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::rng());
    }

    /// Removes and returns the top card of the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Draws `count` cards, failing up front if the deck cannot cover them.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if self.remaining() < count {
            return Err(DeckError::Empty);
        }
        let mut hand = Vec::with_capacity(count);
        for _ in 0..count {
            hand.push(self.draw()?);
        }
        Ok(hand)
    }

    /// The number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
