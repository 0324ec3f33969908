//! Command handler implementations (/start, /view_sheet, /edit_sheet)

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{send_text, user_lang, HandlerDeps, HandlerError};
use crate::i18n;
use crate::telegram::menu::build_start_menu;
use crate::telegram::replies;

/// Handle /start command
pub(super) async fn handle_start_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let lang = user_lang(msg.from.as_ref());
    let menu = build_start_menu(&lang, &deps.map_url, &deps.payment_page_url)?;

    bot.send_message(msg.chat.id, i18n::t(&lang, "menu-prompt"))
        .reply_markup(menu)
        .await?;
    Ok(())
}

/// Handle /view_sheet command
pub(super) async fn handle_view_sheet_command(
    bot: &Bot,
    msg: &Message,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let lang = user_lang(msg.from.as_ref());
    let reply = replies::respond(replies::view_sheet(deps.sheets.as_ref(), &lang).await, &lang)?;

    send_text(bot, msg.chat.id, &reply).await
}

/// Handle /edit_sheet <cell> <text...> command
pub(super) async fn handle_edit_sheet_command(
    bot: &Bot,
    msg: &Message,
    args: &str,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let lang = user_lang(msg.from.as_ref());
    let reply = replies::respond(replies::edit_sheet(deps.sheets.as_ref(), args, &lang).await, &lang)?;

    send_text(bot, msg.chat.id, &reply).await
}
