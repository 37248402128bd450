//! The `/remind` command and its duration-string parser.

use super::util;
use crate::database;
use crate::model::AppState;
use chrono::{Duration, Utc};
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration '{0}': expected hours/minutes/seconds like `2h30m` or `45s`")]
pub struct DurationParseError(pub String);

/// Parses a duration of the form `[<n>h][<n>m][<n>s]`.
///
/// Each segment is optional, but those present must appear in h-then-m-then-s
/// order. Missing segments are zero. Non-numeric segments, out-of-order unit
/// letters, trailing garbage, and the empty string are all rejected.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let fail = || DurationParseError(input.to_string());
    if input.is_empty() {
        return Err(fail());
    }

    fn segment(rest: &str, marker: char) -> Option<(u32, &str)> {
        match rest.find(marker) {
            Some(idx) => {
                let value = rest[..idx].parse::<u32>().ok()?;
                Some((value, &rest[idx + 1..]))
            }
            None => Some((0, rest)),
        }
    }

    let (hours, rest) = segment(input, 'h').ok_or_else(fail)?;
    let (minutes, rest) = segment(rest, 'm').ok_or_else(fail)?;
    let (seconds, rest) = segment(rest, 's').ok_or_else(fail)?;
    if !rest.is_empty() {
        return Err(fail());
    }
    Ok(Duration::hours(i64::from(hours))
        + Duration::minutes(i64::from(minutes))
        + Duration::seconds(i64::from(seconds)))
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let (Some(duration_str), Some(message)) = (
        util::option_str(interaction, "duration"),
        util::option_str(interaction, "message"),
    ) else {
        util::say_ephemeral(ctx, interaction, "Please provide a duration and a message.").await;
        return;
    };

    let duration = match parse_duration(duration_str) {
        Ok(d) => d,
        Err(e) => {
            util::say_ephemeral(ctx, interaction, e.to_string()).await;
            return;
        }
    };
    let due_time = Utc::now() + duration;

    let app_state = AppState::from_ctx(ctx).await;
    match database::reminders::create_reminder(
        &app_state.db,
        interaction.user.id.get() as i64,
        message,
        due_time,
    )
    .await
    {
        Ok(()) => {
            util::say(
                ctx,
                interaction,
                format!(
                    "Reminder set! I will remind you at {}.",
                    due_time.format("%Y-%m-%d %H:%M:%S UTC")
                ),
            )
            .await;
        }
        Err(e) => {
            tracing::error!(target = "db.reminders", error = %e, "failed to store reminder");
            util::say_ephemeral(ctx, interaction, "Could not save your reminder, sorry.").await;
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("remind")
        .description("Set a reminder!")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "duration",
                "How long from now, like 2h30m or 45s",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "message", "What to remind you of")
                .required(true),
        )
}
