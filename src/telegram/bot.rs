//! Bot initialization and command definitions
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command list registration in the Telegram UI

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::utils::command::BotCommands;
use unic_langid::LanguageIdentifier;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::i18n;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case", description = "Я умею:")]
pub enum Command {
    #[command(description = "показать меню")]
    Start,
    #[command(description = "показать содержимое таблицы")]
    ViewSheet,
    #[command(description = "изменить ячейку: /edit_sheet <ячейка> <текст>")]
    EditSheet(String),
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError)` - Missing token, invalid BOT_API_URL, or HTTP client setup failure
pub fn create_bot() -> AppResult<Bot> {
    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        return Err(AppError::Config("BOT_TOKEN environment variable not set".to_string()));
    }

    let client = teloxide::net::default_reqwest_settings()
        .timeout(config::network::timeout())
        .build()?;
    let bot = Bot::with_client(token, client);

    let bot = match config::BOT_API_URL.as_deref() {
        Some(bot_api_url) => {
            log::info!("Using custom Bot API URL: {}", bot_api_url);
            bot.set_api_url(url::Url::parse(bot_api_url)?)
        }
        None => bot,
    };

    Ok(bot)
}

/// Localized command list shown in the Telegram UI
pub fn command_list(lang: &LanguageIdentifier) -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", i18n::t(lang, "command-start")),
        BotCommand::new("view_sheet", i18n::t(lang, "command-view-sheet")),
        BotCommand::new("edit_sheet", i18n::t(lang, "command-edit-sheet")),
    ]
}

/// Sets up bot commands in Telegram UI
///
/// Russian is registered as the default list, English for `en` clients.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(command_list(&i18n::lang_from_code("ru"))).await?;
    bot.set_my_commands(command_list(&i18n::lang_from_code("en")))
        .language_code("en")
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_descriptions() {
        let command_list = format!("{}", Command::descriptions());

        assert!(command_list.contains("Я умею"));
        assert!(command_list.contains("/start"));
        assert!(command_list.contains("/view_sheet"));
        assert!(command_list.contains("/edit_sheet"));
    }

    #[test]
    fn parses_commands_with_snake_case_names() {
        assert_eq!(Command::parse("/start", "sheetbot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/view_sheet", "sheetbot").unwrap(), Command::ViewSheet);
        assert_eq!(
            Command::parse("/edit_sheet B3 hello world", "sheetbot").unwrap(),
            Command::EditSheet("B3 hello world".to_string())
        );
    }

    #[test]
    fn unknown_commands_do_not_parse() {
        assert!(Command::parse("/foo", "sheetbot").is_err());
    }

    #[test]
    fn command_list_matches_enum() {
        let names: Vec<_> = command_list(&i18n::lang_from_code("en"))
            .into_iter()
            .map(|c| c.command)
            .collect();
        assert_eq!(names, vec!["start", "view_sheet", "edit_sheet"]);
    }
}
