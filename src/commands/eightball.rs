//! The magic 8-ball.

use super::util;
use rand::seq::IndexedRandom;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;

const RESPONSES: [&str; 20] = [
    "It is certain.",
    "It is decidedly so.",
    "Without a doubt.",
    "Yes - definitely.",
    "You may rely on it.",
    "As I see it, yes.",
    "Most likely.",
    "Outlook good.",
    "Yes.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again.",
    "Don't count on it.",
    "My reply is no.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    if util::option_str(interaction, "question").is_none() {
        util::say_ephemeral(ctx, interaction, "Please specify a question to use the 8ball.").await;
        return;
    }
    let answer = RESPONSES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("Reply hazy, try again.");
    util::say(ctx, interaction, answer).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("8ball")
        .description("Magic 8ball!")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "question", "What do you ask?")
                .required(true),
        )
}
