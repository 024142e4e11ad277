use crate::commands::context::CommandContext;
use crate::commands::handlers::{self, SlashCommand};
use crate::features::youtube::text_query;
use anyhow::{anyhow, Result};
use log::{debug, info};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use uuid::Uuid;

/// Dispatches slash commands and the `!youtube` text command
#[derive(Clone)]
pub struct CommandHandler {
    context: CommandContext,
}

impl CommandHandler {
    pub fn new(context: CommandContext) -> Self {
        CommandHandler { context }
    }

    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        let name = command.data.name.as_str();
        info!(
            "[{request_id}] 📥 Slash command /{name} | User: {} | Channel: {}",
            command.user.id, command.channel_id
        );

        match SlashCommand::from_name(name) {
            Some(SlashCommand::Omikuji) => handlers::omikuji::handle(ctx, command).await?,
            Some(SlashCommand::YouTube) => {
                handlers::youtube::handle(&self.context, ctx, command).await?
            }
            None => return Err(anyhow!("Unknown command: {name}")),
        }

        debug!("[{request_id}] ✅ /{name} completed");
        Ok(())
    }

    /// Handle a guild or DM message; only `!youtube` messages from humans produce a reply
    pub async fn handle_message(&self, ctx: &Context, msg: &Message) -> Result<()> {
        let Some(query) = text_query(msg.author.bot, &msg.content) else {
            return Ok(());
        };

        let request_id = Uuid::new_v4();
        info!(
            "[{request_id}] 📥 !youtube | User: {} | Channel: {} | Query: '{query}'",
            msg.author.id, msg.channel_id
        );

        let reply = self.context.youtube_reply(query).await?;
        msg.channel_id.say(&ctx.http, reply).await?;

        debug!("[{request_id}] ✅ !youtube reply sent");
        Ok(())
    }
}
