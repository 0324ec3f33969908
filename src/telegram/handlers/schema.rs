//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{Me, Message};
use teloxide::utils::command::BotCommands;

use super::callbacks::handle_menu_callback;
use super::commands::{handle_edit_sheet_command, handle_start_command, handle_view_sheet_command};
use super::text::handle_date_message;
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

/// Where an incoming message goes.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageRoute {
    Command(Command),
    /// Free text, checked as a date.
    Text,
    /// Unknown commands and non-text messages.
    Unhandled,
}

/// Routes a message by its text.
///
/// Anything starting with `/` is a command candidate and never reaches the
/// text branch, even when it fails to parse.
pub fn route_message(text: Option<&str>, bot_username: &str) -> MessageRoute {
    match text {
        None => MessageRoute::Unhandled,
        Some(text) if !text.starts_with('/') => MessageRoute::Text,
        Some(text) => Command::parse(text, bot_username)
            .map(MessageRoute::Command)
            .unwrap_or(MessageRoute::Unhandled),
    }
}

/// Creates the dispatcher schema for the bot.
///
/// Branches are tried in order: commands, plain text, callback queries.
/// Updates that match none of them fall through to the dispatcher's
/// default handler.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_text = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(text_handler(deps_text))
        .branch(callback_handler(deps_callback))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_map(|msg: Message, me: Me| match route_message(msg.text(), me.username()) {
            MessageRoute::Command(cmd) => Some(cmd),
            _ => None,
        })
        .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => handle_start_command(&bot, &msg, &deps).await,
                    Command::ViewSheet => handle_view_sheet_command(&bot, &msg, &deps).await,
                    Command::EditSheet(args) => handle_edit_sheet_command(&bot, &msg, &args, &deps).await,
                }
            }
        })
}

fn text_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message, me: Me| route_message(msg.text(), me.username()) == MessageRoute::Text)
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();
                log::info!("Received text from chat {}", msg.chat.id);
                handle_date_message(&bot, &msg, text, &deps).await
            }
        })
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move { handle_menu_callback(&bot, &q, &deps).await }
    })
}
