//! Free-text handler: date check and record

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{send_text, user_lang, HandlerDeps, HandlerError};
use crate::core::dates;
use crate::telegram::replies;

/// Handle a non-command text message as a `DD.MM.YYYY` date.
pub(super) async fn handle_date_message(
    bot: &Bot,
    msg: &Message,
    text: &str,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let lang = user_lang(msg.from.as_ref());
    let today = dates::today();
    let reply = replies::respond(
        replies::record_date(deps.sheets.as_ref(), text, today, &lang).await,
        &lang,
    )?;

    send_text(bot, msg.chat.id, &reply).await
}
