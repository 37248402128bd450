//! Rendering for the poker game message.

use super::state::{GamePhase, Outcome, PokerGame};
use crate::constants::{COLOR_LOSS, COLOR_PUSH, COLOR_TABLE, COLOR_WIN};
use serenity::builder::{CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter};
use serenity::model::application::ButtonStyle;

fn hand_line(cards: &[crate::commands::games::card::Card]) -> String {
    cards
        .iter()
        .map(|c| format!("`{}`", c))
        .collect::<Vec<_>>()
        .join(" ")
}

impl PokerGame {
    pub(super) fn render_table(&self) -> (CreateEmbed, Vec<CreateActionRow>) {
        match self.phase {
            GamePhase::Draw => self.render_draw(),
            GamePhase::Settled => self.render_settled(),
        }
    }

    fn render_draw(&self) -> (CreateEmbed, Vec<CreateActionRow>) {
        let marked_note = if self.marked.iter().any(|&m| m) {
            let marked = self
                .player
                .iter()
                .zip(self.marked.iter())
                .filter(|(_, &m)| m)
                .map(|(c, _)| format!("`{}`", c))
                .collect::<Vec<_>>()
                .join(" ");
            format!("Discarding: {}", marked)
        } else {
            "Keeping everything.".to_string()
        };
        let embed = CreateEmbed::new()
            .title("♣ Five-Card Draw ♦")
            .description("Toggle the cards you want to throw away, then draw.")
            .field("Your hand", hand_line(&self.player), false)
            .field("Discards", marked_note, false)
            .color(COLOR_TABLE)
            .footer(CreateEmbedFooter::new(format!(
                "Round {}",
                self.rounds_played
            )));

        let card_buttons = self
            .player
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let style = if self.marked[i] {
                    ButtonStyle::Danger
                } else {
                    ButtonStyle::Secondary
                };
                CreateButton::new(format!("poker_card_{}", i))
                    .label(card.to_string())
                    .style(style)
            })
            .collect();
        let draw_row = vec![CreateButton::new("poker_draw")
            .label("Draw")
            .style(ButtonStyle::Primary)];
        (
            embed,
            vec![
                CreateActionRow::Buttons(card_buttons),
                CreateActionRow::Buttons(draw_row),
            ],
        )
    }

    fn render_settled(&self) -> (CreateEmbed, Vec<CreateActionRow>) {
        let (color, status) = match self.outcome {
            Some(Outcome::PlayerWin) => (COLOR_WIN, "You win!"),
            Some(Outcome::DealerWin) => (COLOR_LOSS, "Dealer wins!"),
            Some(Outcome::Tie) => (COLOR_PUSH, "Tie!"),
            None => (COLOR_TABLE, "…"),
        };
        let player_field = format!(
            "{}\n`Score: {}`",
            hand_line(&self.player),
            self.player_score.unwrap_or(0)
        );
        let dealer_field = format!(
            "{}\n`Score: {}`",
            hand_line(&self.dealer),
            self.dealer_score.unwrap_or(0)
        );
        let embed = CreateEmbed::new()
            .title("♣ Five-Card Draw ♦")
            .description(status)
            .field("Your hand", player_field, true)
            .field("Dealer hand", dealer_field, true)
            .color(color)
            .footer(CreateEmbedFooter::new(format!(
                "Round {}",
                self.rounds_played
            )));
        let buttons = vec![
            CreateButton::new("poker_again")
                .label("Play Again")
                .style(ButtonStyle::Success),
            CreateButton::new("poker_quit")
                .label("Quit")
                .style(ButtonStyle::Danger),
        ];
        (embed, vec![CreateActionRow::Buttons(buttons)])
    }
}
