//! Owner-only graceful shutdown: stops every shard, which lets `main` return
//! and drop the database pool.

use super::util;
use crate::model::{AppState, ShardManagerContainer};
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let app_state = AppState::from_ctx(ctx).await;
    if app_state.owner_id != Some(interaction.user.id) {
        util::say_ephemeral(
            ctx,
            interaction,
            "You do not have permission to shut down the bot.",
        )
        .await;
        return;
    }
    util::say(ctx, interaction, "Shutting down...").await;
    tracing::info!(target = "commands", user_id = interaction.user.id.get(), "owner requested shutdown");

    let shard_manager = {
        let data = ctx.data.read().await;
        data.get::<ShardManagerContainer>().cloned()
    };
    if let Some(shard_manager) = shard_manager {
        shard_manager.shutdown_all().await;
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("shutdown").description("Gracefully stop the bot. OWNER ONLY!")
}
