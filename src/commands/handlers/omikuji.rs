//! `/omikuji`: reply with a freshly drawn fortune

use anyhow::Result;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

use crate::features::omikuji::{draw, fortune_reply};

pub async fn handle(serenity_ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
    // ThreadRng is !Send, keep it out of the await below
    let outcome = draw(&mut rand::rng());
    let reply = fortune_reply(outcome);

    command
        .create_interaction_response(&serenity_ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(reply))
        })
        .await?;

    info!("Omikuji drawn for user {}: {outcome}", command.user.id);
    Ok(())
}
