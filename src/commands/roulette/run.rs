//! Entry point for the `/roulette` slash command.

use super::game::RouletteGame;
use crate::interactions::game_handler;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    game_handler::start_session(ctx, interaction, Box::new(RouletteGame::new())).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("roulette").description("Play Russian roulette!")
}
