//! Spreadsheet client adapter
//!
//! Handlers talk to the spreadsheet only through [`SpreadsheetService`] and
//! [`Worksheet`]. The production implementation is [`google::GoogleSheets`].

pub mod auth;
pub mod cell;
pub mod google;

use async_trait::async_trait;
use thiserror::Error;

pub use auth::{AccessTokenSource, ServiceAccountAuth, ServiceAccountKey, StaticToken};
pub use cell::{column_letters, CellRef};
pub use google::GoogleSheets;

/// A sheet as a grid of rows; empty cells are empty strings.
pub type Grid = Vec<Vec<String>>;

/// Errors raised by the spreadsheet adapter.
///
/// Only [`SheetError::SpreadsheetNotFound`] and [`SheetError::CellNotFound`]
/// are expected outcomes that handlers turn into a chat reply.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("spreadsheet not found: {0}")]
    SpreadsheetNotFound(String),

    #[error("cell not found: {0}")]
    CellNotFound(String),

    #[error("invalid credentials: {0}")]
    Credentials(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("spreadsheet API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to sign token request: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl SheetError {
    /// True for the not-found conditions that get a localized reply.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, SheetError::SpreadsheetNotFound(_) | SheetError::CellNotFound(_))
    }
}

pub type SheetResult<T> = Result<T, SheetError>;

/// Entry point to the configured spreadsheet.
#[async_trait]
pub trait SpreadsheetService: Send + Sync {
    /// Opens the configured spreadsheet and returns its first sheet.
    async fn open_default_sheet(&self) -> SheetResult<Box<dyn Worksheet>>;
}

/// One opened sheet.
#[async_trait]
pub trait Worksheet: Send + Sync {
    /// All rows of the populated range, padded to equal length.
    async fn read_all(&self) -> SheetResult<Grid>;

    /// Value of one cell; an empty cell reads as `""`.
    async fn read_cell(&self, label: &str) -> SheetResult<String>;

    /// Overwrites one cell with the literal value.
    async fn write_cell(&self, label: &str, value: &str) -> SheetResult<()>;

    /// Appends a row after the last populated row, parsed as user input.
    async fn append_row(&self, values: &[String]) -> SheetResult<()>;
}

/// Parses `label` as an A1 address, mapping failure to [`SheetError::CellNotFound`].
pub fn parse_label(label: &str) -> SheetResult<CellRef> {
    label
        .parse::<CellRef>()
        .map_err(|_| SheetError::CellNotFound(label.to_string()))
}

/// Pads ragged rows with empty strings so every row has the same length.
pub fn pad_grid(mut grid: Grid) -> Grid {
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut grid {
        row.resize(width, String::new());
    }
    grid
}
