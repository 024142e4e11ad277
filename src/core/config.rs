//! Environment-driven bot configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Token, application/guild ids, YouTube key and voice announcement channels

use anyhow::{anyhow, Context, Result};
use serenity::model::id::{ChannelId, GuildId};
use std::fmt;

use crate::features::presence::WatchedChannels;

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub application_id: u64,
    pub guild_id: GuildId,
    pub youtube_api_key: String,
    /// Text channel that receives voice join/leave notices. `None` disables announcing.
    pub announce_channel_id: Option<ChannelId>,
    pub watched_voice_channels: WatchedChannels,
    pub log_level: String,
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &REDACTED)
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .field("youtube_api_key", &REDACTED)
            .field("announce_channel_id", &self.announce_channel_id)
            .field("watched_voice_channels", &self.watched_voice_channels)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    ///
    /// `from_env` delegates here; tests pass a map instead of touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("{key} must be set"))
        };

        let discord_token = required("BOT_TOKEN")?;
        let application_id = parse_id(&required("CLIENT_ID")?).context("CLIENT_ID")?;
        let guild_id = GuildId(parse_id(&required("GUILD_ID")?).context("GUILD_ID")?);
        let youtube_api_key = required("YOUTUBE_API_KEY")?;

        let announce_channel_id = match lookup("ANNOUNCE_CHANNEL_ID") {
            Some(raw) if !raw.trim().is_empty() => {
                Some(ChannelId(parse_id(&raw).context("ANNOUNCE_CHANNEL_ID")?))
            }
            _ => None,
        };

        let watched_voice_channels = parse_channel_ids(
            &lookup("WATCHED_VOICE_CHANNEL_IDS").unwrap_or_default(),
        )
        .context("WATCHED_VOICE_CHANNEL_IDS")?
        .into_iter()
        .collect();

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            discord_token,
            application_id,
            guild_id,
            youtube_api_key,
            announce_channel_id,
            watched_voice_channels,
            log_level,
        })
    }
}

fn parse_id(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    raw.parse::<u64>()
        .map_err(|e| anyhow!("'{raw}' is not a valid Discord id: {e}"))
}

/// Parse a comma separated list of channel ids, skipping blank entries
pub fn parse_channel_ids(raw: &str) -> Result<Vec<ChannelId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_id(s).map(ChannelId))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, String> {
        HashMap::from([
            ("BOT_TOKEN", "token".to_string()),
            ("CLIENT_ID", "1111".to_string()),
            ("GUILD_ID", "2222".to_string()),
            ("YOUTUBE_API_KEY", "yt-key".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<Config> {
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_minimal_config() {
        let config = load(&base_env()).unwrap();
        assert_eq!(config.discord_token, "token");
        assert_eq!(config.application_id, 1111);
        assert_eq!(config.guild_id, GuildId(2222));
        assert_eq!(config.youtube_api_key, "yt-key");
        assert_eq!(config.announce_channel_id, None);
        assert!(config.watched_voice_channels.is_empty());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_required_var() {
        let mut env = base_env();
        env.remove("YOUTUBE_API_KEY");
        let err = load(&env).unwrap_err();
        assert!(err.to_string().contains("YOUTUBE_API_KEY"));
    }

    #[test]
    fn test_blank_required_var_is_missing() {
        let mut env = base_env();
        env.insert("BOT_TOKEN", "   ".to_string());
        assert!(load(&env).is_err());
    }

    #[test]
    fn test_invalid_guild_id() {
        let mut env = base_env();
        env.insert("GUILD_ID", "not-a-number".to_string());
        let err = load(&env).unwrap_err();
        assert!(format!("{err:#}").contains("GUILD_ID"));
    }

    #[test]
    fn test_presence_settings() {
        let mut env = base_env();
        env.insert("ANNOUNCE_CHANNEL_ID", "42".to_string());
        env.insert("WATCHED_VOICE_CHANNEL_IDS", "10, 20,,30 ".to_string());
        let config = load(&env).unwrap();

        assert_eq!(config.announce_channel_id, Some(ChannelId(42)));
        assert_eq!(config.watched_voice_channels.len(), 3);
        assert!(config.watched_voice_channels.contains(ChannelId(20)));
        assert!(!config.watched_voice_channels.contains(ChannelId(42)));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let mut env = base_env();
        env.insert("BOT_TOKEN", "super-secret-token".to_string());
        env.insert("YOUTUBE_API_KEY", "AIza-secret-key".to_string());
        let printed = format!("{:?}", load(&env).unwrap());

        assert!(!printed.contains("super-secret-token"));
        assert!(!printed.contains("AIza-secret-key"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("2222"));
    }

    #[test]
    fn test_parse_channel_ids_rejects_garbage() {
        assert!(parse_channel_ids("10,abc").is_err());
        assert!(parse_channel_ids("").unwrap().is_empty());
        assert!(parse_channel_ids(" , ").unwrap().is_empty());
    }
}
