//! Entry point for the `/poker` slash command.

use super::state::PokerGame;
use crate::interactions::game_handler;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    match PokerGame::new() {
        Ok(game) => game_handler::start_session(ctx, interaction, Box::new(game)).await,
        Err(e) => {
            tracing::error!(target = "games.poker", error = %e, "failed to deal opening hands");
            game_handler::reply_error(ctx, interaction, "Could not start the game.").await;
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("poker").description("Play five-card draw poker!")
}
