//! # Slash Commands (/)
//!
//! Command definitions and guild command registration.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: `/omikuji` and `/youtube`, registered per guild at startup

mod omikuji;
mod youtube;

use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use serenity::builder::CreateApplicationCommand;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::CommandDataOption;
use serenity::model::id::GuildId;

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<CreateApplicationCommand> {
    let mut commands = Vec::new();
    commands.extend(omikuji::create_commands());
    commands.extend(youtube::create_commands());
    commands
}

/// Destination for a guild's application command set
#[async_trait]
pub trait CommandCatalog: Send + Sync {
    /// Replace the guild's whole command set in one call, returning how many commands it now has
    async fn overwrite_guild_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateApplicationCommand>,
    ) -> Result<usize>;
}

#[async_trait]
impl CommandCatalog for Http {
    async fn overwrite_guild_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateApplicationCommand>,
    ) -> Result<usize> {
        let registered = guild_id
            .set_application_commands(self, |builder| {
                for command in commands {
                    builder.add_application_command(command);
                }
                builder
            })
            .await?;
        Ok(registered.len())
    }
}

/// Registers all slash commands for a guild
pub async fn register_guild_commands(
    catalog: &dyn CommandCatalog,
    guild_id: GuildId,
) -> Result<usize> {
    catalog
        .overwrite_guild_commands(guild_id, create_slash_commands())
        .await
}

/// Registers guild commands, logging and swallowing any failure
///
/// Returns whether registration succeeded. The bot keeps running either way.
pub async fn refresh_guild_commands(catalog: &dyn CommandCatalog, guild_id: GuildId) -> bool {
    info!("Started refreshing application (/) commands.");
    match register_guild_commands(catalog, guild_id).await {
        Ok(count) => {
            info!("✅ Successfully reloaded {count} application (/) commands for guild {guild_id}.");
            true
        }
        Err(e) => {
            error!("❌ Failed to register guild slash commands: {e}");
            false
        }
    }
}

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingCatalog {
        calls: Mutex<Vec<(GuildId, Vec<String>)>>,
    }

    #[async_trait]
    impl CommandCatalog for RecordingCatalog {
        async fn overwrite_guild_commands(
            &self,
            guild_id: GuildId,
            commands: Vec<CreateApplicationCommand>,
        ) -> Result<usize> {
            let names: Vec<String> = commands
                .iter()
                .map(|cmd| cmd.0.get("name").unwrap().as_str().unwrap().to_string())
                .collect();
            let count = names.len();
            self.calls.lock().unwrap().push((guild_id, names));
            Ok(count)
        }
    }

    struct UnreachableCatalog;

    #[async_trait]
    impl CommandCatalog for UnreachableCatalog {
        async fn overwrite_guild_commands(
            &self,
            _guild_id: GuildId,
            _commands: Vec<CreateApplicationCommand>,
        ) -> Result<usize> {
            Err(anyhow!("connection refused"))
        }
    }

    #[test]
    fn test_create_slash_commands() {
        let command_names: Vec<String> = create_slash_commands()
            .iter()
            .map(|cmd| cmd.0.get("name").unwrap().as_str().unwrap().to_string())
            .collect();

        assert_eq!(command_names, vec!["omikuji", "youtube"]);
    }

    #[tokio::test]
    async fn test_refresh_overwrites_full_set_once() {
        let catalog = RecordingCatalog::default();
        assert!(refresh_guild_commands(&catalog, GuildId(99)).await);

        let calls = catalog.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, GuildId(99));
        assert_eq!(calls[0].1, vec!["omikuji", "youtube"]);
    }

    #[tokio::test]
    async fn test_refresh_failure_is_swallowed() {
        assert!(!refresh_guild_commands(&UnreachableCatalog, GuildId(99)).await);
    }

    #[tokio::test]
    async fn test_register_surfaces_error() {
        let err = register_guild_commands(&UnreachableCatalog, GuildId(1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_get_string_option_missing() {
        assert_eq!(get_string_option(&[], "query"), None);
    }
}
