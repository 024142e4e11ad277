//! # Features
//!
//! - `omikuji`: fortune draw for `/omikuji`
//! - `youtube`: video search for `/youtube` and `!youtube`
//! - `presence`: voice channel join/leave announcements

pub mod omikuji;
pub mod presence;
pub mod youtube;

pub use presence::{PresenceAnnouncer, WatchedChannels};
pub use youtube::{VideoSearch, YouTubeClient};

/// Bot version from Cargo.toml
pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
