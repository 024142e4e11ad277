//! Per-command handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Dispatch on a closed `SlashCommand` enum instead of a name map
//! - 1.0.0: `/omikuji` and `/youtube` handlers

pub mod omikuji;
pub mod youtube;

/// The slash commands this bot registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Omikuji,
    YouTube,
}

impl SlashCommand {
    pub const ALL: [SlashCommand; 2] = [SlashCommand::Omikuji, SlashCommand::YouTube];

    /// Registered command name, as sent back in interaction data
    pub fn name(self) -> &'static str {
        match self {
            SlashCommand::Omikuji => "omikuji",
            SlashCommand::YouTube => "youtube",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::slash::create_slash_commands;

    #[test]
    fn test_every_registered_command_dispatches() {
        let registered: Vec<String> = create_slash_commands()
            .iter()
            .map(|cmd| cmd.0.get("name").unwrap().as_str().unwrap().to_string())
            .collect();

        assert_eq!(registered.len(), SlashCommand::ALL.len());
        for name in &registered {
            let command = SlashCommand::from_name(name)
                .unwrap_or_else(|| panic!("no handler for /{name}"));
            assert_eq!(command.name(), name);
        }
    }

    #[test]
    fn test_unknown_command_name() {
        assert_eq!(SlashCommand::from_name("ping"), None);
        assert_eq!(SlashCommand::from_name("YouTube"), None);
        assert_eq!(SlashCommand::from_name(""), None);
    }
}
