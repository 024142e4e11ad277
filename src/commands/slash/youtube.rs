//! # YouTube Command
//!
//! Search YouTube and reply with the top video.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_youtube_command()]
}

fn create_youtube_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name("youtube")
        .description("YouTubeで動画を検索します")
        .create_option(|option| {
            option
                .name("query")
                .description("検索クエリ")
                .kind(CommandOptionType::String)
                .required(true)
        });
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_youtube_command() {
        let commands = create_commands();
        assert_eq!(commands.len(), 1);

        let youtube = &commands[0];
        assert_eq!(youtube.0.get("name").unwrap().as_str().unwrap(), "youtube");

        let options = youtube.0.get("options").unwrap().as_array().unwrap();
        assert_eq!(options.len(), 1);
        let query = &options[0];
        assert_eq!(query["name"], "query");
        assert_eq!(query["description"], "検索クエリ");
        assert_eq!(query["required"], true);
        // CommandOptionType::String
        assert_eq!(query["type"], 3);
    }
}
