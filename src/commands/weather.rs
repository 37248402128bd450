//! The weather command: geocode a location, fetch current conditions, and
//! format them in the user's preferred unit.
//!
//! Location precedence is explicit argument > stored preference, and within
//! the location the explicitly supplied city/state/country parts win over
//! whatever the geocoder resolves, which fills any missing parts. All
//! collaborator failures degrade to an "unable to fetch" reply.

use super::util;
use crate::database;
use crate::model::AppState;
use crate::services::{geocode, weather};
use serenity::builder::{CreateCommand, CreateCommandOption, EditInteractionResponse};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::id::UserId;
use serenity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub fn parse(raw: &str) -> Option<Unit> {
        match raw.trim().to_uppercase().as_str() {
            "C" => Some(Unit::Celsius),
            "F" => Some(Unit::Fahrenheit),
            "K" => Some(Unit::Kelvin),
            _ => None,
        }
    }

    /// Formats a metric temperature in this unit.
    pub fn format(self, temp_celsius: f64) -> String {
        match self {
            Unit::Celsius => format!("{:.1}°C", temp_celsius),
            Unit::Fahrenheit => format!("{:.1}°F", temp_celsius * 9.0 / 5.0 + 32.0),
            Unit::Kelvin => format!("{:.2}K", temp_celsius + 273.15),
        }
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    // Two network hops; acknowledge first so the token does not expire.
    if let Err(e) = interaction.defer(&ctx.http).await {
        tracing::error!(target = "weather", error = ?e, "failed to defer interaction");
        return;
    }
    let app_state = AppState::from_ctx(ctx).await;
    let content = weather_reply(
        &app_state,
        interaction.user.id,
        util::option_str(interaction, "location"),
        util::option_str(interaction, "unit"),
    )
    .await;
    if let Err(e) = interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!(target = "weather", error = ?e, "failed to edit weather response");
    }
}

async fn weather_reply(
    app_state: &AppState,
    user_id: UserId,
    location_arg: Option<&str>,
    unit_arg: Option<&str>,
) -> String {
    let (Some(opencage_key), Some(owm_key)) = (
        app_state.opencage_api_key.as_deref(),
        app_state.openweathermap_api_key.as_deref(),
    ) else {
        return "Weather lookups are not configured on this bot.".to_string();
    };

    // Unit: explicit argument > stored preference > Celsius.
    let stored_unit = match database::users::get_unit(&app_state.db, user_id).await {
        Ok(unit) => unit,
        Err(e) => {
            tracing::warn!(target = "db.users", error = %e, "failed to load stored unit");
            None
        }
    };
    let unit = unit_arg
        .and_then(Unit::parse)
        .or_else(|| stored_unit.as_deref().and_then(Unit::parse))
        .unwrap_or_default();

    // Location: explicit argument > stored preference.
    let location = match location_arg {
        Some(arg) => arg.to_string(),
        None => match database::users::get_location(&app_state.db, user_id).await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                return "Please specify a location or set one with `/setlocation`.".to_string();
            }
            Err(e) => {
                tracing::warn!(target = "db.users", error = %e, "failed to load stored location");
                return "Please specify a location or set one with `/setlocation`.".to_string();
            }
        },
    };

    if location.trim().is_empty() {
        return "Please specify a location or set one with `/setlocation`.".to_string();
    }
    let mut parts = location.split(',').map(str::trim);
    let city_arg = parts.next().filter(|p| !p.is_empty()).map(str::to_string);
    let state_arg = parts.next().filter(|p| !p.is_empty()).map(str::to_string);
    let country_arg = parts.next().filter(|p| !p.is_empty()).map(str::to_string);

    let place = match geocode::resolve_place(&app_state.http_client, opencage_key, &location).await
    {
        Ok(Some(place)) => place,
        Ok(None) => {
            return format!("Unable to determine coordinates for {}.", location);
        }
        Err(e) => {
            tracing::warn!(target = "weather", error = %e, "geocoding request failed");
            return "Unable to fetch weather information.".to_string();
        }
    };

    let full_location = compose_location(city_arg, state_arg, country_arg, &place);

    match weather::current_weather(&app_state.http_client, owm_key, place.lat, place.lon).await {
        Ok(Some(current)) => format!(
            "The current temperature in {} is {} with {}.",
            full_location,
            unit.format(current.temp_celsius),
            current.description
        ),
        Ok(None) => "Unable to fetch weather information.".to_string(),
        Err(e) => {
            tracing::warn!(target = "weather", error = %e, "weather request failed");
            "Unable to fetch weather information.".to_string()
        }
    }
}

/// Merges explicitly supplied city/state/country parts with the geocoder's
/// resolution. Explicit parts win; resolved components fill the gaps.
pub fn compose_location(
    city: Option<String>,
    state_province: Option<String>,
    country: Option<String>,
    place: &geocode::ResolvedPlace,
) -> String {
    let city = city.or_else(|| place.city.clone());
    let state_province = state_province.or_else(|| place.state_province.clone());
    let country = country.or_else(|| place.country.clone());
    [city, state_province, country]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn register() -> CreateCommand {
    CreateCommand::new("weather")
        .description("Fetch the weather!")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "location",
            "City, optionally with state/province and country",
        ))
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "unit", "Temperature unit")
                .add_string_choice("Celsius", "C")
                .add_string_choice("Fahrenheit", "F")
                .add_string_choice("Kelvin", "K"),
        )
}
