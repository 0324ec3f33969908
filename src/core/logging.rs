//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - A summary of the effective configuration at startup

use anyhow::Result;
use simplelog::*;
use std::fs::File;
use std::path::Path;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the log file or a logger is already set
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective configuration at bot startup
///
/// Never logs the bot token itself, only whether it is set.
pub fn log_startup_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("Configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!(
        "BOT_TOKEN: {}",
        if config::BOT_TOKEN.is_empty() { "not set" } else { "set" }
    );
    log::info!("Spreadsheet: {}", config::google::SPREADSHEET_NAME.as_str());

    let credentials = config::google::CREDENTIALS_PATH.as_str();
    if Path::new(credentials).exists() {
        log::info!("Credentials: {}", credentials);
    } else {
        log::error!("Credentials: {} (FILE NOT FOUND)", credentials);
    }

    let image = config::IMAGE_PATH.as_str();
    if Path::new(image).exists() {
        log::info!("Image asset: {}", image);
    } else {
        log::warn!("Image asset: {} (not found, the image button will fail)", image);
    }
}
