//! `/youtube query:<string>`: reply with the top video for the query
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{anyhow, Result};
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

use crate::commands::context::CommandContext;
use crate::commands::slash::get_string_option;

pub async fn handle(
    ctx: &CommandContext,
    serenity_ctx: &Context,
    command: &ApplicationCommandInteraction,
) -> Result<()> {
    let query = get_string_option(&command.data.options, "query")
        .ok_or_else(|| anyhow!("Missing required option 'query'"))?;

    let reply = ctx.youtube_reply(&query).await?;

    command
        .create_interaction_response(&serenity_ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(reply))
        })
        .await?;

    info!("YouTube command completed for user {}", command.user.id);
    Ok(())
}
