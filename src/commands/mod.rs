//! # Command System
//!
//! Slash command (/) definitions, registration and dispatch, plus the legacy
//! `!youtube` text command.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod context;
pub mod handlers;
pub mod slash;

pub use crate::command_handler::CommandHandler;

pub use context::CommandContext;
pub use handlers::SlashCommand;

pub use slash::{
    create_slash_commands, get_string_option, refresh_guild_commands, register_guild_commands,
    CommandCatalog,
};
