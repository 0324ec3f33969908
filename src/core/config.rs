//! Configuration for the bot and the static page server.
//!
//! Every value is read once from the environment (after `.env` is loaded
//! in `main`) and cached for the lifetime of the process.

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server URL (optional)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: sheetbot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "sheetbot.log".to_string()));

/// Image sent by the "send image" button.
/// Read from IMAGE_PATH environment variable, relative to the working directory
/// The file is opened on every button press, never cached
pub static IMAGE_PATH: Lazy<String> = Lazy::new(|| env::var("IMAGE_PATH").unwrap_or_else(|_| "img1.jpg".to_string()));

/// Google Sheets configuration
pub mod google {
    use once_cell::sync::Lazy;
    use std::env;

    use crate::sheets::google::{DEFAULT_DRIVE_API, DEFAULT_SHEETS_API};

    /// Path to the service-account JSON key
    /// Read from GOOGLE_CREDENTIALS_PATH environment variable
    /// Default: credentials.json
    pub static CREDENTIALS_PATH: Lazy<String> =
        Lazy::new(|| env::var("GOOGLE_CREDENTIALS_PATH").unwrap_or_else(|_| "credentials.json".to_string()));

    /// Title of the spreadsheet the bot works with
    /// Read from SPREADSHEET_NAME environment variable
    pub static SPREADSHEET_NAME: Lazy<String> =
        Lazy::new(|| env::var("SPREADSHEET_NAME").unwrap_or_else(|_| "Telegram Bot Sheet".to_string()));

    /// Sheets v4 API base URL
    pub static SHEETS_API_URL: Lazy<String> =
        Lazy::new(|| env::var("SHEETS_API_URL").unwrap_or_else(|_| DEFAULT_SHEETS_API.to_string()));

    /// Drive v3 API base URL
    pub static DRIVE_API_URL: Lazy<String> =
        Lazy::new(|| env::var("DRIVE_API_URL").unwrap_or_else(|_| DEFAULT_DRIVE_API.to_string()));

    /// Cell read by the "sheet value" button
    pub const FIXED_CELL: &str = "A2";
}

/// Links shown on the /start menu
pub mod menu {
    use once_cell::sync::Lazy;
    use std::env;

    /// First button: map search link
    pub static MAP_URL: Lazy<String> =
        Lazy::new(|| env::var("MAP_URL").unwrap_or_else(|_| "https://yandex.ru/maps/?text=Ленина%201".to_string()));

    /// Second button: hosted payment page
    pub static PAYMENT_PAGE_URL: Lazy<String> = Lazy::new(|| {
        env::var("PAYMENT_PAGE_URL")
            .unwrap_or_else(|_| "https://maxr0zen.github.io/test_t_bot/payment/payment.html".to_string())
    });

    /// Callback tag of the "send image" button
    pub const SEND_IMAGE: &str = "send_image";

    /// Callback tag of the "sheet value" button
    pub const GET_SHEET_VALUE: &str = "get_sheet_value";
}

/// Static page server configuration
pub mod web {
    use once_cell::sync::Lazy;
    use std::env;

    /// Bind address
    /// Read from WEB_HOST environment variable
    /// Default: 0.0.0.0 (all interfaces)
    pub static HOST: Lazy<String> = Lazy::new(|| env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()));

    /// Port
    /// Read from WEB_PORT environment variable
    /// Default: 8000
    pub static PORT: Lazy<u16> = Lazy::new(|| {
        env::var("WEB_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8000)
    });

    /// Directory files are served from
    /// Read from WEB_ROOT environment variable
    /// Default: current working directory
    pub static ROOT: Lazy<String> = Lazy::new(|| env::var("WEB_ROOT").unwrap_or_else(|_| ".".to_string()));

    /// Page served at /payment, relative to ROOT
    /// Read from PAYMENT_PAGE environment variable
    pub static PAYMENT_PAGE: Lazy<String> =
        Lazy::new(|| env::var("PAYMENT_PAGE").unwrap_or_else(|_| "payment/payment.html".to_string()));
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Telegram Bot API requests (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
