//! Coin flip.

use super::util;
use rand::seq::IndexedRandom;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let side = ["Heads", "Tails"]
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("Heads");
    util::say(ctx, interaction, side).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("flip").description("Flip a coin")
}
