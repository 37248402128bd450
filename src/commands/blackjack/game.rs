//! The Blackjack round logic and its `Game` implementation.

use super::state::{BlackjackGame, GamePhase, Hand, Outcome};
use crate::commands::games::deck::{Deck, DeckError};
use crate::commands::games::engine::{Game, GameUpdate};
use crate::constants::{BLACKJACK_TARGET, DEALER_STANDS_AT};
use serenity::builder::{CreateActionRow, CreateEmbed};

impl BlackjackGame {
    pub fn new() -> Result<Self, DeckError> {
        let mut game = Self {
            deck: Deck::new(),
            player: Hand::new(),
            dealer: Hand::new(),
            phase: GamePhase::Dealing,
            outcome: None,
            rounds_played: 0,
        };
        game.deal_round()?;
        Ok(game)
    }

    /// Starts a fresh round: new shuffled deck, two cards each.
    /// An initial 21 settles immediately as a player blackjack.
    pub fn deal_round(&mut self) -> Result<(), DeckError> {
        self.phase = GamePhase::Dealing;
        self.deck = Deck::new();
        self.deck.shuffle();
        self.player = Hand::new();
        self.dealer = Hand::new();
        self.outcome = None;
        self.rounds_played += 1;

        for _ in 0..2 {
            self.player.add_card(self.deck.draw()?);
            self.dealer.add_card(self.deck.draw()?);
        }

        if self.player.score() == BLACKJACK_TARGET {
            self.outcome = Some(Outcome::PlayerBlackjack);
            self.phase = GamePhase::Settled;
        } else {
            self.phase = GamePhase::PlayerTurn;
        }
        Ok(())
    }

    /// Draws one card into the player hand. Busting settles the round without
    /// the dealer playing.
    pub fn hit(&mut self) -> Result<(), DeckError> {
        self.player.add_card(self.deck.draw()?);
        if self.player.score() > BLACKJACK_TARGET {
            self.outcome = Some(Outcome::PlayerBust);
            self.phase = GamePhase::Settled;
        }
        Ok(())
    }

    /// Ends the player turn: the dealer draws to 17, then the round settles.
    pub fn stand(&mut self) -> Result<(), DeckError> {
        self.phase = GamePhase::DealerTurn;
        while self.dealer.score() < DEALER_STANDS_AT {
            self.dealer.add_card(self.deck.draw()?);
        }
        self.settle();
        Ok(())
    }

    fn settle(&mut self) {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        self.outcome = Some(if dealer_score > BLACKJACK_TARGET {
            Outcome::DealerBust
        } else if player_score > dealer_score {
            Outcome::PlayerWin
        } else if dealer_score > player_score {
            Outcome::DealerWin
        } else {
            Outcome::Push
        });
        self.phase = GamePhase::Settled;
    }
}

impl Game for BlackjackGame {
    fn handle_input(&mut self, input: &str) -> GameUpdate {
        let result = match (self.phase, input) {
            (GamePhase::PlayerTurn, "bj_hit") => self.hit(),
            (GamePhase::PlayerTurn, "bj_stand") => self.stand(),
            (GamePhase::Settled, "bj_again") => self.deal_round(),
            (GamePhase::Settled, "bj_quit") => {
                return GameUpdate::GameOver("Thanks for playing!".to_string());
            }
            // Inputs that do not fit the current phase (stale clicks) are ignored.
            _ => return GameUpdate::NoOp,
        };
        match result {
            Ok(()) => GameUpdate::ReRender,
            // Practically unreachable with one player per deck, but fatal to the round.
            Err(DeckError::Empty) => {
                GameUpdate::GameOver("The deck ran out of cards; round abandoned.".to_string())
            }
        }
    }

    fn render(&self) -> (CreateEmbed, Vec<CreateActionRow>) {
        self.render_table()
    }
}
