//! Stores a user's preferred temperature unit.

use super::util;
use crate::database;
use crate::model::AppState;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let unit = util::option_str(interaction, "unit")
        .map(str::to_uppercase)
        .unwrap_or_default();
    if !matches!(unit.as_str(), "C" | "F" | "K") {
        util::say_ephemeral(
            ctx,
            interaction,
            "Invalid unit. Please specify `C` for Celsius, `F` for Fahrenheit, or `K` for Kelvin.",
        )
        .await;
        return;
    }

    let app_state = AppState::from_ctx(ctx).await;
    match database::users::set_unit(&app_state.db, interaction.user.id, &unit).await {
        Ok(()) => {
            util::say(
                ctx,
                interaction,
                format!("Your preferred temperature unit has been set to {}.", unit),
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target = "db.users", error = %e, "failed to store unit");
            util::say_ephemeral(ctx, interaction, "Could not save your unit, sorry.").await;
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("setunit")
        .description("Set your preferred units")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "unit", "Temperature unit")
                .required(true)
                .add_string_choice("Celsius", "C")
                .add_string_choice("Fahrenheit", "F")
                .add_string_choice("Kelvin", "K"),
        )
}
