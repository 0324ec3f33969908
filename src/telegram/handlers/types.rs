//! Handler types, dependencies, and reply helpers

use std::path::PathBuf;
use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::User;
use unic_langid::LanguageIdentifier;

use crate::i18n;
use crate::sheets::SpreadsheetService;
use crate::telegram::replies::{split_message, MESSAGE_LIMIT};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub sheets: Arc<dyn SpreadsheetService>,
    pub image_path: PathBuf,
    pub map_url: String,
    pub payment_page_url: String,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(
        sheets: Arc<dyn SpreadsheetService>,
        image_path: impl Into<PathBuf>,
        map_url: impl Into<String>,
        payment_page_url: impl Into<String>,
    ) -> Self {
        Self {
            sheets,
            image_path: image_path.into(),
            map_url: map_url.into(),
            payment_page_url: payment_page_url.into(),
        }
    }
}

/// Reply language for the sender of an update.
pub fn user_lang(user: Option<&User>) -> LanguageIdentifier {
    i18n::lang_for_user(user.and_then(|u| u.language_code.as_deref()))
}

/// Sends a text reply, split into several messages when it exceeds the Telegram limit.
pub(super) async fn send_text(bot: &Bot, chat_id: ChatId, text: &str) -> Result<(), HandlerError> {
    for chunk in split_message(text, MESSAGE_LIMIT) {
        bot.send_message(chat_id, chunk).await?;
    }
    Ok(())
}
