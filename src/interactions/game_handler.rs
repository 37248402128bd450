//! Routes component interactions into the `GameManager` and translates the
//! outcome back into Discord responses.

use crate::commands::games::engine::{AdvanceOutcome, Game, GameUpdate, SessionKey};
use crate::model::AppState;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::{CommandInteraction, ComponentInteraction};
use serenity::prelude::Context;

pub async fn handle(ctx: &Context, component: &ComponentInteraction, app_state: &AppState) {
    let key = SessionKey {
        user: component.user.id,
        channel: component.channel_id,
    };
    let outcome = {
        let mut manager = app_state.game_manager.write().await;
        manager.advance(&key, &component.data.custom_id)
    };

    let response = match outcome {
        AdvanceOutcome::NoSession => CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content("You have no game running in this channel. Start one with a slash command.")
                .ephemeral(true),
        ),
        AdvanceOutcome::Expired => CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content("That game sat idle too long and was abandoned.")
                .ephemeral(true),
        ),
        AdvanceOutcome::Update {
            update,
            embed,
            components,
        } => match update {
            GameUpdate::NoOp => CreateInteractionResponse::Acknowledge,
            GameUpdate::ReRender => CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .components(components),
            ),
            GameUpdate::GameOver(message) => CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .content(message)
                    .embed(embed)
                    .components(Vec::new()),
            ),
        },
    };
    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!(target = "games.session", cid = %component.data.custom_id, error = ?e, "failed to respond to component");
    }
}

/// Sends a freshly constructed game as the command response and registers the
/// session, replacing whatever the user had running in this channel.
pub async fn start_session(ctx: &Context, interaction: &CommandInteraction, game: Box<dyn Game>) {
    let app_state = AppState::from_ctx(ctx).await;
    let (embed, components) = game.render();
    let builder = CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(components);
    let response = CreateInteractionResponse::Message(builder);
    if let Err(e) = interaction.create_response(&ctx.http, response).await {
        tracing::error!(target = "games.session", error = ?e, "failed to send initial game message");
        return;
    }
    let key = SessionKey {
        user: interaction.user.id,
        channel: interaction.channel_id,
    };
    app_state
        .game_manager
        .write()
        .await
        .start_session(key, game);
}

/// Ephemeral error reply for a failed command invocation.
pub async fn reply_error(ctx: &Context, interaction: &CommandInteraction, content: &str) {
    let builder = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    let response = CreateInteractionResponse::Message(builder);
    interaction.create_response(&ctx.http, response).await.ok();
}
