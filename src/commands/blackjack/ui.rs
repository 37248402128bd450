//! Rendering for the Blackjack game message.

use super::state::{BlackjackGame, GamePhase, Outcome};
use crate::constants::{COLOR_LOSS, COLOR_PUSH, COLOR_TABLE, COLOR_WIN};
use serenity::builder::{CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter};
use serenity::model::application::ButtonStyle;

impl BlackjackGame {
    pub(super) fn render_table(&self) -> (CreateEmbed, Vec<CreateActionRow>) {
        let player_field = format!("{}\n`Score: {}`", self.player.display(), self.player.score());

        // The dealer's second card stays hidden until the player stands.
        let dealer_field = if self.phase == GamePhase::PlayerTurn {
            match self.dealer.cards.first() {
                Some(up_card) => format!("`{}` `??`", up_card),
                None => String::new(),
            }
        } else {
            format!("{}\n`Score: {}`", self.dealer.display(), self.dealer.score())
        };

        let (color, status) = match self.outcome {
            None => (COLOR_TABLE, "Hit or stand?".to_string()),
            Some(outcome) => {
                let (color, text) = match outcome {
                    Outcome::PlayerBlackjack => (COLOR_WIN, "Blackjack! You win!"),
                    Outcome::PlayerBust => (COLOR_LOSS, "Bust! You lose."),
                    Outcome::DealerBust => (COLOR_WIN, "Dealer busts! You win!"),
                    Outcome::PlayerWin => (COLOR_WIN, "You win!"),
                    Outcome::DealerWin => (COLOR_LOSS, "Dealer wins!"),
                    Outcome::Push => (COLOR_PUSH, "Push!"),
                };
                (color, text.to_string())
            }
        };

        let embed = CreateEmbed::new()
            .title("♠ Blackjack ♥")
            .description(status)
            .field("Your hand", player_field, true)
            .field("Dealer hand", dealer_field, true)
            .color(color)
            .footer(CreateEmbedFooter::new(format!(
                "Round {}",
                self.rounds_played
            )));

        let buttons = match self.phase {
            GamePhase::PlayerTurn => vec![
                CreateButton::new("bj_hit")
                    .label("Hit")
                    .style(ButtonStyle::Primary),
                CreateButton::new("bj_stand")
                    .label("Stand")
                    .style(ButtonStyle::Secondary),
            ],
            GamePhase::Settled => vec![
                CreateButton::new("bj_again")
                    .label("Play Again")
                    .style(ButtonStyle::Success),
                CreateButton::new("bj_quit")
                    .label("Quit")
                    .style(ButtonStyle::Danger),
            ],
            // Transient phases never render.
            GamePhase::Dealing | GamePhase::DealerTurn => Vec::new(),
        };
        (embed, vec![CreateActionRow::Buttons(buttons)])
    }
}
