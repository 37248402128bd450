//! Russian roulette: six chambers, one bullet, one pull.

use crate::commands::games::engine::{Game, GameUpdate};
use crate::constants::{COLOR_LOSS, COLOR_TABLE, COLOR_WIN};
use rand::seq::SliceRandom;
use serenity::builder::{CreateActionRow, CreateButton, CreateEmbed};
use serenity::model::application::ButtonStyle;

pub const CHAMBER_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Dead,
    Survived,
    WalkedAway,
}

pub struct RouletteGame {
    chambers: [bool; CHAMBER_COUNT],
    outcome: Option<Outcome>,
}

impl Default for RouletteGame {
    fn default() -> Self {
        Self::new()
    }
}

impl RouletteGame {
    /// Loads one bullet and spins the cylinder.
    pub fn new() -> Self {
        let mut chambers = [false; CHAMBER_COUNT];
        chambers[0] = true;
        chambers.shuffle(&mut rand::rng());
        Self {
            chambers,
            outcome: None,
        }
    }

    /// Fires the first chamber. One-shot: the game ends either way.
    pub fn pull_trigger(&mut self) -> Outcome {
        let outcome = if self.chambers[0] {
            Outcome::Dead
        } else {
            Outcome::Survived
        };
        self.outcome = Some(outcome);
        outcome
    }

    #[cfg(test)]
    fn bullet_count(&self) -> usize {
        self.chambers.iter().filter(|&&loaded| loaded).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cylinder_holds_exactly_one_bullet() {
        for _ in 0..100 {
            assert_eq!(RouletteGame::new().bullet_count(), 1);
        }
    }

    #[test]
    fn pull_resolves_and_locks_the_game() {
        let mut game = RouletteGame::new();
        let outcome = game.pull_trigger();
        assert!(matches!(outcome, Outcome::Dead | Outcome::Survived));
        // Further input is ignored once resolved.
        assert!(matches!(game.handle_input("rr_pull"), GameUpdate::NoOp));
    }
}

impl Game for RouletteGame {
    fn handle_input(&mut self, input: &str) -> GameUpdate {
        if self.outcome.is_some() {
            return GameUpdate::NoOp;
        }
        match input {
            "rr_pull" => match self.pull_trigger() {
                Outcome::Dead => GameUpdate::GameOver("BLAMMO! You are dead!".to_string()),
                _ => GameUpdate::GameOver("Click! You survived!".to_string()),
            },
            "rr_walk" => {
                self.outcome = Some(Outcome::WalkedAway);
                GameUpdate::GameOver("You walked away. Probably wise.".to_string())
            }
            _ => GameUpdate::NoOp,
        }
    }

    fn render(&self) -> (CreateEmbed, Vec<CreateActionRow>) {
        let (color, description) = match self.outcome {
            None => (
                COLOR_TABLE,
                "Six chambers. One bullet. Are you ready to pull the trigger?",
            ),
            Some(Outcome::Dead) => (COLOR_LOSS, "BLAMMO! You are dead!"),
            Some(Outcome::Survived) => (COLOR_WIN, "Click! You survived!"),
            Some(Outcome::WalkedAway) => (COLOR_TABLE, "You walked away. Probably wise."),
        };
        let embed = CreateEmbed::new()
            .title("🔫 Russian Roulette")
            .description(description)
            .color(color);
        let components = if self.outcome.is_none() {
            vec![CreateActionRow::Buttons(vec![
                CreateButton::new("rr_pull")
                    .label("Pull the Trigger")
                    .style(ButtonStyle::Danger),
                CreateButton::new("rr_walk")
                    .label("Walk Away")
                    .style(ButtonStyle::Secondary),
            ])]
        } else {
            Vec::new()
        };
        (embed, components)
    }
}
