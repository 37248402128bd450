//! Entry point for the `/blackjack` slash command.

use super::state::BlackjackGame;
use crate::interactions::game_handler;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    match BlackjackGame::new() {
        Ok(game) => game_handler::start_session(ctx, interaction, Box::new(game)).await,
        Err(e) => {
            tracing::error!(target = "games.blackjack", error = %e, "failed to deal opening round");
            game_handler::reply_error(ctx, interaction, "Could not start the game.").await;
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("blackjack").description("Play blackjack!")
}
