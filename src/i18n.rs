use std::collections::HashMap;

use fluent_templates::{
    fluent_bundle::{FluentArgs, FluentValue},
    static_loader, Loader,
};
use once_cell::sync::Lazy;
use unic_langid::LanguageIdentifier;

static_loader! {
    static LOCALES = {
        locales: "./locales",
        fallback_language: "ru",
        // Keep interpolated values free of Unicode isolation marks
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

/// Supported languages (code, human-readable name).
pub static SUPPORTED_LANGS: &[(&str, &str)] = &[("ru", "Русский"), ("en", "English")];

/// Default language identifier used as a fallback.
static DEFAULT_LANG: Lazy<LanguageIdentifier> = Lazy::new(|| "ru".parse().unwrap_or_default());

/// Normalizes a language code into a LanguageIdentifier (falls back to default).
pub fn lang_from_code(code: &str) -> LanguageIdentifier {
    let code_normalized = code.to_lowercase();
    let normalized = match code_normalized.as_str() {
        "en" | "en-us" | "en-gb" => "en-US",
        "ru" | "ru-ru" => "ru",
        other => other,
    };

    normalized.parse().unwrap_or_else(|_| DEFAULT_LANG.clone())
}

/// Picks the reply language from the Telegram user's `language_code`.
///
/// Unsupported or missing codes fall back to Russian.
pub fn lang_for_user(telegram_lang_code: Option<&str>) -> LanguageIdentifier {
    telegram_lang_code
        .and_then(is_language_supported)
        .map(lang_from_code)
        .unwrap_or_else(|| DEFAULT_LANG.clone())
}

/// Returns a localized string for the given key.
/// Converts literal `\n` sequences to actual newlines for proper Telegram formatting.
pub fn t(lang: &LanguageIdentifier, key: &str) -> String {
    let text = LOCALES
        .lookup(lang, key)
        .unwrap_or_else(|| LOCALES.lookup(&DEFAULT_LANG, key).unwrap_or_else(|| key.to_string()));
    text.replace("\\n", "\n")
}

/// Returns a localized string with arguments for interpolation.
/// Converts literal `\n` sequences to actual newlines for proper Telegram formatting.
pub fn t_args(lang: &LanguageIdentifier, key: &str, args: &FluentArgs) -> String {
    let args_map: HashMap<String, FluentValue> = args.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();

    let text = LOCALES.lookup_with_args(lang, key, &args_map).unwrap_or_else(|| {
        LOCALES
            .lookup_with_args(&DEFAULT_LANG, key, &args_map)
            .unwrap_or_else(|| key.to_string())
    });
    text.replace("\\n", "\n")
}

/// Checks if a language code is supported by the bot.
/// Returns the normalized language code if supported, None otherwise.
pub fn is_language_supported(code: &str) -> Option<&'static str> {
    // Normalize the code (e.g., "en-US" -> "en", "ru-RU" -> "ru")
    let normalized = code.split('-').next().unwrap_or(code).to_lowercase();

    SUPPORTED_LANGS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(&normalized))
        .map(|(c, _)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_known_translation() {
        let ru = lang_from_code("ru");
        let en = lang_from_code("en");

        assert_eq!(t(&ru, "date-accepted"), "Дата верна");
        assert_eq!(t(&en, "date-accepted"), "The date is correct");
    }

    #[test]
    fn interpolates_without_isolation_marks() {
        let mut args = FluentArgs::new();
        args.set("today", "19.10.2026");
        assert_eq!(t_args(&lang_from_code("ru"), "date-invalid", &args), "Неверно, сегодня 19.10.2026");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(&lang_from_code("en"), "no-such-key"), "no-such-key");
    }

    #[test]
    fn test_is_language_supported() {
        assert_eq!(is_language_supported("en"), Some("en"));
        assert_eq!(is_language_supported("ru"), Some("ru"));
        assert_eq!(is_language_supported("en-GB"), Some("en"));
        assert_eq!(is_language_supported("RU"), Some("ru"));
        assert_eq!(is_language_supported("de"), None);
    }

    #[test]
    fn user_language_defaults_to_russian() {
        assert_eq!(lang_for_user(None), lang_from_code("ru"));
        assert_eq!(lang_for_user(Some("es")), lang_from_code("ru"));
        assert_eq!(lang_for_user(Some("en-US")), lang_from_code("en"));
    }
}
