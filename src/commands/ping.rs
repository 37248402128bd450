//! Ping, reporting gateway heartbeat latency when available.

use super::util;
use crate::model::ShardManagerContainer;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let latency = {
        let data = ctx.data.read().await;
        match data.get::<ShardManagerContainer>() {
            Some(shard_manager) => {
                let runners = shard_manager.runners.lock().await;
                runners
                    .get(&ctx.shard_id)
                    .and_then(|runner| runner.latency)
            }
            None => None,
        }
    };
    let response = match latency {
        Some(latency) => format!("Pong! Heartbeat latency: `{}`", format_latency(latency)),
        None => "Pong!".to_string(),
    };
    util::say(ctx, interaction, response).await;
}

fn format_latency(latency: std::time::Duration) -> String {
    // `as_millis` truncates; keep the fractional part.
    format!("{:.2} ms", latency.as_secs_f64() * 1000.0)
}

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Ping command")
}

#[cfg(test)]
mod tests {
    use super::format_latency;
    use std::time::Duration;

    #[test]
    fn latency_keeps_fractional_milliseconds() {
        assert_eq!(format_latency(Duration::from_micros(42_500)), "42.50 ms");
        assert_eq!(format_latency(Duration::from_millis(7)), "7.00 ms");
    }
}
