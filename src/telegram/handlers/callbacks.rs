//! Menu button callbacks (send_image, get_sheet_value)

use teloxide::prelude::*;
use teloxide::types::InputFile;

use super::types::{send_text, user_lang, HandlerDeps, HandlerError};
use crate::i18n;
use crate::telegram::menu::CallbackAction;
use crate::telegram::replies;

/// Chat to reply in and the action to run, `None` when nothing is sent.
fn callback_target(q: &CallbackQuery) -> Option<(ChatId, CallbackAction)> {
    let chat_id = q.message.as_ref()?.chat().id;
    let action = CallbackAction::from_tag(q.data.as_deref()?)?;
    Some((chat_id, action))
}

/// Handle a menu button press.
///
/// The query is always answered first so the client stops its spinner.
/// Unknown tags and queries without a chat are ignored.
pub(super) async fn handle_menu_callback(bot: &Bot, q: &CallbackQuery, deps: &HandlerDeps) -> Result<(), HandlerError> {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some((chat_id, action)) = callback_target(q) else {
        log::debug!("Ignoring callback data {:?}", q.data);
        return Ok(());
    };

    let lang = user_lang(Some(&q.from));
    log::info!("Callback {:?} from chat {}", action, chat_id);

    match action {
        CallbackAction::SendImage => {
            bot.send_photo(chat_id, InputFile::file(deps.image_path.clone()))
                .caption(i18n::t(&lang, "image-caption"))
                .await?;
        }
        CallbackAction::GetSheetValue => {
            let reply = replies::respond(replies::sheet_value(deps.sheets.as_ref(), &lang).await, &lang)?;
            send_text(bot, chat_id, &reply).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(data: Option<&str>, with_message: bool) -> CallbackQuery {
        let mut value = json!({
            "id": "q1",
            "from": {"id": 42, "is_bot": false, "first_name": "Ann"},
            "chat_instance": "ci",
        });
        if let Some(data) = data {
            value["data"] = json!(data);
        }
        if with_message {
            value["message"] = json!({
                "message_id": 7,
                "date": 1700000000,
                "chat": {"id": 42, "type": "private", "first_name": "Ann"},
                "text": "menu",
            });
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn known_tags_target_the_message_chat() {
        assert_eq!(
            callback_target(&query(Some("send_image"), true)),
            Some((ChatId(42), CallbackAction::SendImage))
        );
        assert_eq!(
            callback_target(&query(Some("get_sheet_value"), true)),
            Some((ChatId(42), CallbackAction::GetSheetValue))
        );
    }

    #[test]
    fn unknown_or_missing_data_targets_nothing() {
        assert_eq!(callback_target(&query(Some("bogus"), true)), None);
        assert_eq!(callback_target(&query(None, true)), None);
        assert_eq!(callback_target(&query(Some("send_image"), false)), None);
    }
}
