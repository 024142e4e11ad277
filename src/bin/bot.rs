use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::voice::VoiceState;
use serenity::prelude::*;
use std::sync::Arc;

use omikuji_bot::commands::{refresh_guild_commands, CommandContext, CommandHandler};
use omikuji_bot::core::Config;
use omikuji_bot::features::get_bot_version;
use omikuji_bot::features::presence::PresenceAnnouncer;
use omikuji_bot::features::youtube::YouTubeClient;

struct Handler {
    command_handler: Arc<CommandHandler>,
    presence: Arc<PresenceAnnouncer>,
}

impl Handler {
    fn new(command_handler: CommandHandler, presence: PresenceAnnouncer) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
            presence: Arc::new(presence),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);
        info!("📦 Version: {}", get_bot_version());

        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        // Only slash commands are registered; other interaction kinds are ignored
        if let Interaction::ApplicationCommand(command) = interaction {
            if let Err(e) = self
                .command_handler
                .handle_slash_command(&ctx, &command)
                .await
            {
                error!(
                    "Error handling slash command '{}': {}",
                    command.data.name, e
                );
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if let Err(e) = self.command_handler.handle_message(&ctx, &msg).await {
            error!("Error handling message {}: {e}", msg.id);
        }
    }

    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        if let Err(e) = self
            .presence
            .handle_voice_state(&ctx, old.as_ref(), &new)
            .await
        {
            error!("Error announcing voice state for user {}: {e}", new.user_id);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Omikuji Discord Bot v{}...", get_bot_version());

    let youtube = YouTubeClient::new(config.youtube_api_key.clone());
    let command_handler = CommandHandler::new(CommandContext::new(Arc::new(youtube)));

    if config.announce_channel_id.is_none() {
        info!("🔇 ANNOUNCE_CHANNEL_ID not set - voice announcements disabled");
    } else {
        info!(
            "🔊 Watching {} voice channel(s) for join/leave announcements",
            config.watched_voice_channels.len()
        );
    }
    let presence = PresenceAnnouncer::new(
        config.announce_channel_id,
        config.watched_voice_channels.clone(),
    );

    let handler = Handler::new(command_handler, presence);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_VOICE_STATES;

    let mut client = Client::builder(&config.discord_token, intents)
        .application_id(config.application_id)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    // Registration failures are logged inside and never stop the gateway from starting
    refresh_guild_commands(&*client.cache_and_http.http, config.guild_id).await;

    info!("Establishing WebSocket connection to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
