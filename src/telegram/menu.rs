//! The /start menu and its callback tags

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use unic_langid::LanguageIdentifier;
use url::Url;

use crate::core::config::menu::{GET_SHEET_VALUE, SEND_IMAGE};
use crate::i18n;

/// Action selected by a menu button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    SendImage,
    GetSheetValue,
}

impl CallbackAction {
    /// Maps a callback tag to its action; unknown tags map to `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            SEND_IMAGE => Some(Self::SendImage),
            GET_SHEET_VALUE => Some(Self::GetSheetValue),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::SendImage => SEND_IMAGE,
            Self::GetSheetValue => GET_SHEET_VALUE,
        }
    }
}

/// Builds the four-button menu: two links, then the image and sheet-value actions.
pub fn build_start_menu(
    lang: &LanguageIdentifier,
    map_url: &str,
    payment_page_url: &str,
) -> Result<InlineKeyboardMarkup, url::ParseError> {
    Ok(InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::url(
            i18n::t(lang, "menu-button-map"),
            Url::parse(map_url)?,
        )],
        vec![InlineKeyboardButton::url(
            i18n::t(lang, "menu-button-payment"),
            Url::parse(payment_page_url)?,
        )],
        vec![InlineKeyboardButton::callback(
            i18n::t(lang, "menu-button-image"),
            CallbackAction::SendImage.tag(),
        )],
        vec![InlineKeyboardButton::callback(
            i18n::t(lang, "menu-button-sheet-value"),
            CallbackAction::GetSheetValue.tag(),
        )],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn callback_tags_round_trip() {
        for action in [CallbackAction::SendImage, CallbackAction::GetSheetValue] {
            assert_eq!(CallbackAction::from_tag(action.tag()), Some(action));
        }
        assert_eq!(CallbackAction::from_tag("send_images"), None);
        assert_eq!(CallbackAction::from_tag(""), None);
    }

    #[test]
    fn start_menu_has_two_links_then_two_actions() {
        let ru = i18n::lang_from_code("ru");
        let menu = build_start_menu(
            &ru,
            "https://yandex.ru/maps/?text=Ленина%201",
            "https://example.com/payment/payment.html",
        )
        .unwrap();

        let rows = &menu.inline_keyboard;
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 1));

        assert!(matches!(&rows[0][0].kind, InlineKeyboardButtonKind::Url(url) if url.host_str() == Some("yandex.ru")));
        assert!(
            matches!(&rows[1][0].kind, InlineKeyboardButtonKind::Url(url) if url.path() == "/payment/payment.html")
        );
        assert!(matches!(&rows[2][0].kind, InlineKeyboardButtonKind::CallbackData(tag) if tag == "send_image"));
        assert!(matches!(&rows[3][0].kind, InlineKeyboardButtonKind::CallbackData(tag) if tag == "get_sheet_value"));
        assert_eq!(rows[0][0].text, "Кнопка 1");
        assert_eq!(rows[3][0].text, "Кнопка 4");
    }

    #[test]
    fn invalid_link_is_reported() {
        let en = i18n::lang_from_code("en");
        assert!(build_start_menu(&en, "not a url", "https://example.com").is_err());
    }
}
