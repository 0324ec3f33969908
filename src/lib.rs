//! sheetbot - Telegram bot backed by a Google spreadsheet
//!
//! The bot shows a menu, dumps and edits the spreadsheet, and records dates
//! sent as plain text. A small static server hosts the payment page the menu
//! links to.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, dates and the static web server
//! - `sheets`: spreadsheet adapter traits and the Google implementation
//! - `telegram`: bot setup, dispatcher schema and handlers
//! - `i18n`: localized reply texts

pub mod cli;
pub mod core;
pub mod i18n;
pub mod sheets;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use crate::sheets::{SheetError, SheetResult, SpreadsheetService, Worksheet};
