use thiserror::Error;

use crate::sheets::SheetError;

/// Centralized error types for the application
///
/// Startup and runtime failures outside the per-update handlers are
/// converted to this enum. Handlers themselves return
/// [`HandlerError`](crate::telegram::HandlerError) so teloxide can log them.
///
/// # Example
///
/// ```no_run
/// use sheetbot::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Spreadsheet adapter errors
    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] SheetError),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_errors_convert_and_keep_their_message() {
        let err: AppError = SheetError::SpreadsheetNotFound("Telegram Bot Sheet".into()).into();
        assert!(matches!(err, AppError::Sheet(_)));
        assert_eq!(
            err.to_string(),
            "Spreadsheet error: spreadsheet not found: Telegram Bot Sheet"
        );
    }

    #[test]
    fn config_error_display() {
        let err = AppError::Config("BOT_TOKEN is not set".into());
        assert_eq!(err.to_string(), "Configuration error: BOT_TOKEN is not set");
    }
}
