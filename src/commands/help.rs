//! The help command: one embed listing every command.

use crate::constants::COLOR_INFO;
use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

const COMMANDS: [(&str, &str); 14] = [
    ("blackjack", "Play blackjack!"),
    ("poker", "Play five-card draw poker!"),
    ("roulette", "Play Russian roulette!"),
    ("weather", "Fetch the weather!"),
    ("remind", "Set a reminder!"),
    ("setlocation", "Set your preferred weather location"),
    ("setunit", "Set your preferred temperature unit"),
    ("8ball", "Magic 8ball!"),
    ("quote", "Get a random quote from the old IRC days"),
    ("flip", "Flip a coin"),
    ("ping", "Ping command"),
    ("about", "About this bot"),
    ("help", "Show help information"),
    ("shutdown", "Gracefully stop the bot (owner only)"),
];

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let mut embed = CreateEmbed::new().title("Help").color(COLOR_INFO);
    for (name, description) in COMMANDS {
        embed = embed.field(format!("/{}", name), description, false);
    }
    let builder = CreateInteractionResponseMessage::new().embed(embed);
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
    {
        tracing::error!(target = "commands", error = ?e, "failed to send help");
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("Show help information")
}
