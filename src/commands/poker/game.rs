//! The draw-poker round logic and its `Game` implementation.

use super::score::hand_score;
use super::state::{GamePhase, Outcome, PokerGame, HAND_SIZE};
use crate::commands::games::deck::{Deck, DeckError};
use crate::commands::games::engine::{Game, GameUpdate};
use serenity::builder::{CreateActionRow, CreateEmbed};

impl PokerGame {
    pub fn new() -> Result<Self, DeckError> {
        let mut game = Self {
            deck: Deck::new(),
            player: Vec::new(),
            dealer: Vec::new(),
            marked: [false; HAND_SIZE],
            phase: GamePhase::Draw,
            outcome: None,
            player_score: None,
            dealer_score: None,
            rounds_played: 0,
        };
        game.deal_round()?;
        Ok(game)
    }

    /// Deals five cards each to player and dealer from one shared shuffled deck.
    pub fn deal_round(&mut self) -> Result<(), DeckError> {
        self.deck = Deck::new();
        self.deck.shuffle();
        self.player = self.deck.draw_many(HAND_SIZE)?;
        self.dealer = self.deck.draw_many(HAND_SIZE)?;
        self.marked = [false; HAND_SIZE];
        self.outcome = None;
        self.player_score = None;
        self.dealer_score = None;
        self.phase = GamePhase::Draw;
        self.rounds_played += 1;
        Ok(())
    }

    pub fn toggle_mark(&mut self, position: usize) {
        if position < HAND_SIZE {
            self.marked[position] = !self.marked[position];
        }
    }

    /// Replaces every marked card from the shared deck, then scores both hands.
    /// The dealer keeps its dealt hand.
    pub fn draw_and_settle(&mut self) -> Result<(), DeckError> {
        for position in 0..HAND_SIZE {
            if self.marked[position] {
                self.player[position] = self.deck.draw()?;
            }
        }
        self.marked = [false; HAND_SIZE];

        let player_score = hand_score(&self.player);
        let dealer_score = hand_score(&self.dealer);
        self.player_score = Some(player_score);
        self.dealer_score = Some(dealer_score);
        self.outcome = Some(if player_score > dealer_score {
            Outcome::PlayerWin
        } else if dealer_score > player_score {
            Outcome::DealerWin
        } else {
            Outcome::Tie
        });
        self.phase = GamePhase::Settled;
        Ok(())
    }
}

impl Game for PokerGame {
    fn handle_input(&mut self, input: &str) -> GameUpdate {
        if self.phase == GamePhase::Draw {
            if let Some(position) = input
                .strip_prefix("poker_card_")
                .and_then(|n| n.parse::<usize>().ok())
            {
                self.toggle_mark(position);
                return GameUpdate::ReRender;
            }
        }
        let result = match (self.phase, input) {
            (GamePhase::Draw, "poker_draw") => self.draw_and_settle(),
            (GamePhase::Settled, "poker_again") => self.deal_round(),
            (GamePhase::Settled, "poker_quit") => {
                return GameUpdate::GameOver("Thanks for playing!".to_string());
            }
            _ => return GameUpdate::NoOp,
        };
        match result {
            Ok(()) => GameUpdate::ReRender,
            Err(DeckError::Empty) => {
                GameUpdate::GameOver("The deck ran out of cards; round abandoned.".to_string())
            }
        }
    }

    fn render(&self) -> (CreateEmbed, Vec<CreateActionRow>) {
        self.render_table()
    }
}
