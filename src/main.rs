use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::dispatching::Dispatcher;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;

use sheetbot::cli::{Cli, Commands};
use sheetbot::core::{config, init_logger, log_startup_configuration, web_server};
use sheetbot::sheets::auth::ServiceAccountAuth;
use sheetbot::sheets::GoogleSheets;
use sheetbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, credentials, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Log panics instead of losing them on stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));

    // .env first so LOG_FILE_PATH can come from it
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command_or_default() {
        Commands::Run { with_web } => {
            log::info!("Running bot (web server: {})", with_web);
            run_bot(with_web).await
        }
        Commands::Serve { port, root } => {
            let port = port.unwrap_or(*config::web::PORT);
            let root = root.unwrap_or_else(|| config::web::ROOT.clone());
            run_web(port, root).await
        }
    }
}

/// Run the static server alone
async fn run_web(port: u16, root: String) -> Result<()> {
    web_server::start_web_server(&config::web::HOST, port, root, config::web::PAYMENT_PAGE.as_str()).await?;
    Ok(())
}

/// Run the Telegram bot, optionally with the static server next to it
async fn run_bot(with_web: bool) -> Result<()> {
    log::info!("Starting bot...");
    log_startup_configuration();

    if config::BOT_TOKEN.is_empty() {
        return Err(anyhow::anyhow!("BOT_TOKEN environment variable not set"));
    }

    let http = reqwest::Client::builder().build()?;

    let auth = ServiceAccountAuth::from_file(config::google::CREDENTIALS_PATH.as_str(), http.clone()).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load Google credentials from {}: {}",
            config::google::CREDENTIALS_PATH.as_str(),
            e
        )
    })?;
    log::info!("Google service account: {}", auth.client_email());

    let sheets = GoogleSheets::with_endpoints(
        http,
        Arc::new(auth),
        config::google::SPREADSHEET_NAME.as_str(),
        config::google::SHEETS_API_URL.as_str(),
        config::google::DRIVE_API_URL.as_str(),
    );

    let bot = create_bot()?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    if with_web {
        let host = config::web::HOST.clone();
        let port = *config::web::PORT;
        tokio::spawn(async move {
            if let Err(e) = web_server::start_web_server(
                &host,
                port,
                config::web::ROOT.as_str(),
                config::web::PAYMENT_PAGE.as_str(),
            )
            .await
            {
                log::error!("Web server error: {}", e);
            }
        });
    }

    let deps = HandlerDeps::new(
        Arc::new(sheets),
        config::IMAGE_PATH.as_str(),
        config::menu::MAP_URL.as_str(),
        config::menu::PAYMENT_PAGE_URL.as_str(),
    );

    log::info!("Bot is running, waiting for updates");

    Dispatcher::builder(bot, schema(deps))
        // One shared key: updates are handled strictly one after another
        .distribution_function(|_| Some(()))
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
