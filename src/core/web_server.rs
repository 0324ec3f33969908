//! Static page server.
//!
//! Serves files from a directory tree, with `/payment` fixed to the payment
//! page. Runs on WEB_HOST:WEB_PORT (default 0.0.0.0:8000), independently of
//! the bot dispatcher.

use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::core::error::AppResult;

/// Shared state for the web server.
#[derive(Clone)]
struct WebState {
    root: Arc<PathBuf>,
    payment_page: Arc<PathBuf>,
}

/// Builds the router.
///
/// # Arguments
/// * `root` - Directory files are served from
/// * `payment_page` - Page served at `/payment`, relative to `root`
pub fn create_router(root: impl Into<PathBuf>, payment_page: impl Into<PathBuf>) -> Router {
    let root = root.into();
    let payment_page = root.join(payment_page.into());
    let state = WebState {
        root: Arc::new(root),
        payment_page: Arc::new(payment_page),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/payment", get(payment_handler))
        .route("/{*path}", get(static_file_handler))
        .with_state(state)
}

/// Start the static page server and serve until the process exits.
pub async fn start_web_server(
    host: &str,
    port: u16,
    root: impl Into<PathBuf>,
    payment_page: impl Into<PathBuf>,
) -> AppResult<()> {
    let root = root.into();
    let app = create_router(root.clone(), payment_page);

    let listener = TcpListener::bind((host, port)).await?;
    log::info!("Starting web server on http://{}", listener.local_addr()?);
    log::info!("  /payment  - Payment page");
    log::info!("  /<path>   - Files under {}", root.display());
    log::info!("  /health   - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /payment: the payment page.
async fn payment_handler(State(state): State<WebState>, request: Request) -> Response {
    serve_payment_page(&state, request).await
}

/// GET /<path>: a file under the web root.
///
/// Case and trailing-slash variants of `/payment` still get the payment page.
async fn static_file_handler(State(state): State<WebState>, Path(path): Path<String>, request: Request) -> Response {
    if is_payment_alias(&path) {
        return serve_payment_page(&state, request).await;
    }

    log::debug!("Serving static file: {}", path);
    let result: Result<_, Infallible> = ServeDir::new(state.root.as_path()).oneshot(request).await;
    match result {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// GET /health: simple health check.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn serve_payment_page(state: &WebState, request: Request) -> Response {
    let result: Result<_, Infallible> = ServeFile::new(state.payment_page.as_path()).oneshot(request).await;
    match result {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

fn is_payment_alias(path: &str) -> bool {
    path.trim_end_matches('/').eq_ignore_ascii_case("payment")
}
