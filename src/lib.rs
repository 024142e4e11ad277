// Core layer - configuration
pub mod core;

// Features layer - omikuji, YouTube search, voice presence
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;

pub use core::Config;

pub use features::{PresenceAnnouncer, VideoSearch, WatchedChannels, YouTubeClient};
