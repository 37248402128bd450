//! Stores a user's preferred weather location.

use super::util;
use crate::database;
use crate::model::AppState;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(location) = util::option_str(interaction, "location") else {
        util::say_ephemeral(ctx, interaction, "Please provide a location.").await;
        return;
    };
    let state_province = util::option_str(interaction, "state_province");
    let country = util::option_str(interaction, "country");

    let full_location = [Some(location), state_province, country]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let app_state = AppState::from_ctx(ctx).await;
    match database::users::set_location(&app_state.db, interaction.user.id, &full_location).await {
        Ok(()) => {
            util::say(
                ctx,
                interaction,
                format!("Your location has been set to {}.", full_location),
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target = "db.users", error = %e, "failed to store location");
            util::say_ephemeral(ctx, interaction, "Could not save your location, sorry.").await;
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("setlocation")
        .description("Set your preferred location")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "location", "City name")
                .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "state_province",
            "State or province",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "country",
            "Country",
        ))
}
