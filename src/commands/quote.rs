//! Random quotes from the bot's IRC days.

use super::util;
use rand::seq::IndexedRandom;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

const QUOTES: [&str; 6] = [
    "<Leo7Mario> I want to make an IRC Bot, is there a way to make one in HTML?",
    "<`> Gerbils",
    "<|> Morse code is the best encryption algorhythm ever.",
    "<erno> Hmmm. I've lost a machine. Literally LOST. It responds to ping, it works completely, I just can't figure out where in my apartment it is.",
    "<KomputerKid> Hey did you know if you type your password in it shows up as stars! *********** See?",
    "<maxell> He just needs to realize we're one giant schizophrenic cat floating in a void...",
];

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let quote = QUOTES.choose(&mut rand::rng()).copied().unwrap_or(QUOTES[0]);
    util::say(ctx, interaction, quote).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("quote").description("Get a random quote from the old IRC days")
}
