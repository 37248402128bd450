use crate::model::AppState;
use crate::{commands, interactions, scheduler};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::EventHandler;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct Handler {
    guild_id: GuildId,
    /// `ready` fires again on every reconnect; the background tasks must only
    /// be spawned once. Two reminder loops would double-deliver.
    background_started: AtomicBool,
}

impl Handler {
    pub fn new(guild_id: GuildId) -> Self {
        Self {
            guild_id,
            background_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = &interaction {
            match command.data.name.as_str() {
                "blackjack" => commands::blackjack::run::run_slash(&ctx, command).await,
                "poker" => commands::poker::run::run_slash(&ctx, command).await,
                "roulette" => commands::roulette::run::run_slash(&ctx, command).await,
                "weather" => commands::weather::run_slash(&ctx, command).await,
                "remind" => commands::remind::run_slash(&ctx, command).await,
                "setlocation" => commands::setlocation::run_slash(&ctx, command).await,
                "setunit" => commands::setunit::run_slash(&ctx, command).await,
                "8ball" => commands::eightball::run_slash(&ctx, command).await,
                "quote" => commands::quote::run_slash(&ctx, command).await,
                "flip" => commands::flip::run_slash(&ctx, command).await,
                "ping" => commands::ping::run_slash(&ctx, command).await,
                "about" => commands::about::run_slash(&ctx, command).await,
                "help" => commands::help::run_slash(&ctx, command).await,
                "shutdown" => commands::shutdown::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &interaction {
            let command_family = component.data.custom_id.split('_').next().unwrap_or("");
            match command_family {
                "bj" | "poker" | "rr" => {
                    let app_state = AppState::from_ctx(&ctx).await;
                    interactions::game_handler::handle(&ctx, component, &app_state).await;
                }
                _ => {}
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target = "startup", user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![
            commands::blackjack::run::register(),
            commands::poker::run::register(),
            commands::roulette::run::register(),
            commands::weather::register(),
            commands::remind::register(),
            commands::setlocation::register(),
            commands::setunit::register(),
            commands::eightball::register(),
            commands::quote::register(),
            commands::flip::register(),
            commands::ping::register(),
            commands::about::register(),
            commands::help::register(),
            commands::shutdown::register(),
        ];
        if let Err(e) = self
            .guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            tracing::error!(target = "startup", error = ?e, "error creating guild commands");
        } else {
            tracing::info!(target = "startup", "registered guild commands");
        }

        if !self.background_started.swap(true, Ordering::SeqCst) {
            let app_state = AppState::from_ctx(&ctx).await;
            tokio::spawn(scheduler::run_reminder_loop(
                ctx.http.clone(),
                app_state.db.clone(),
            ));
            tokio::spawn(scheduler::run_session_sweeper(
                app_state.game_manager.clone(),
            ));
        }
    }
}
