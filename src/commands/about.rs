//! About this bot.

use super::util;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    util::say(
        ctx,
        interaction,
        "Exodus is the successor to the old Exodus IRC bot, rewritten for Discord. \
         Card games, weather, and reminders in one place.",
    )
    .await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("about").description("About this bot")
}
