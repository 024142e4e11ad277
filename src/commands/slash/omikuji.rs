//! # Omikuji Command
//!
//! Draw today's fortune.

use serenity::builder::CreateApplicationCommand;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_omikuji_command()]
}

fn create_omikuji_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command.name("omikuji").description("今日の運勢を占います");
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_omikuji_command() {
        let commands = create_commands();
        assert_eq!(commands.len(), 1);

        let omikuji = &commands[0];
        assert_eq!(omikuji.0.get("name").unwrap().as_str().unwrap(), "omikuji");
        assert_eq!(
            omikuji.0.get("description").unwrap().as_str().unwrap(),
            "今日の運勢を占います"
        );
        assert!(omikuji.0.get("options").is_none());
    }
}
