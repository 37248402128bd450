//! Small helpers shared by the command modules.

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

/// Replies to a slash command with plain text.
pub async fn say(ctx: &Context, interaction: &CommandInteraction, content: impl Into<String>) {
    respond(ctx, interaction, content.into(), false).await;
}

/// Replies with text only the invoking user can see.
pub async fn say_ephemeral(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: impl Into<String>,
) {
    respond(ctx, interaction, content.into(), true).await;
}

async fn respond(ctx: &Context, interaction: &CommandInteraction, content: String, ephemeral: bool) {
    let builder = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(ephemeral);
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
    {
        tracing::error!(
            target = "commands",
            command = %interaction.data.name,
            error = ?e,
            "failed to send command response"
        );
    }
}

/// Looks up a string option by name.
pub fn option_str<'a>(interaction: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_str())
}
