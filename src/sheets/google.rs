//! Google Sheets implementation of the spreadsheet adapter
//!
//! - Drive v3 `files.list` finds the spreadsheet by name
//! - Sheets v4 `spreadsheets.get` resolves the first sheet's title
//! - Sheets v4 `values.*` reads, writes and appends cell values

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use super::auth::AccessTokenSource;
use super::{pad_grid, parse_label, Grid, SheetError, SheetResult, SpreadsheetService, Worksheet};

pub const DEFAULT_SHEETS_API: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_DRIVE_API: &str = "https://www.googleapis.com/drive/v3";

const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

/// Shared HTTP context for the service and every sheet it opens.
struct ApiContext {
    http: reqwest::Client,
    tokens: Arc<dyn AccessTokenSource>,
    sheets_api: String,
    drive_api: String,
}

impl ApiContext {
    async fn authorized(&self, request: reqwest::RequestBuilder) -> SheetResult<Response> {
        let token = self.tokens.access_token().await?;
        Ok(request.bearer_auth(token).send().await?)
    }
}

/// Client for one named spreadsheet.
pub struct GoogleSheets {
    ctx: Arc<ApiContext>,
    spreadsheet_name: String,
}

impl GoogleSheets {
    pub fn new(
        http: reqwest::Client,
        tokens: Arc<dyn AccessTokenSource>,
        spreadsheet_name: impl Into<String>,
    ) -> Self {
        Self::with_endpoints(http, tokens, spreadsheet_name, DEFAULT_SHEETS_API, DEFAULT_DRIVE_API)
    }

    /// Same as [`GoogleSheets::new`] with explicit API base URLs.
    pub fn with_endpoints(
        http: reqwest::Client,
        tokens: Arc<dyn AccessTokenSource>,
        spreadsheet_name: impl Into<String>,
        sheets_api: impl Into<String>,
        drive_api: impl Into<String>,
    ) -> Self {
        Self {
            ctx: Arc::new(ApiContext {
                http,
                tokens,
                sheets_api: sheets_api.into().trim_end_matches('/').to_string(),
                drive_api: drive_api.into().trim_end_matches('/').to_string(),
            }),
            spreadsheet_name: spreadsheet_name.into(),
        }
    }

    async fn find_spreadsheet_id(&self) -> SheetResult<String> {
        #[derive(Deserialize)]
        struct FileList {
            #[serde(default)]
            files: Vec<DriveFile>,
        }
        #[derive(Deserialize)]
        struct DriveFile {
            id: String,
        }

        let query = format!(
            "name = '{}' and mimeType = '{}' and trashed = false",
            escape_drive_literal(&self.spreadsheet_name),
            SPREADSHEET_MIME
        );
        let request = self.ctx.http.get(format!("{}/files", self.ctx.drive_api)).query(&[
            ("q", query.as_str()),
            ("fields", "files(id,name)"),
            ("supportsAllDrives", "true"),
            ("includeItemsFromAllDrives", "true"),
        ]);
        let response = self.ctx.authorized(request).await?;
        let response = check_status(response, &self.spreadsheet_name, None).await?;

        let list: FileList = response.json().await?;
        list.files
            .into_iter()
            .next()
            .map(|file| file.id)
            .ok_or_else(|| SheetError::SpreadsheetNotFound(self.spreadsheet_name.clone()))
    }

    async fn first_sheet_title(&self, spreadsheet_id: &str) -> SheetResult<String> {
        #[derive(Deserialize)]
        struct Spreadsheet {
            #[serde(default)]
            sheets: Vec<Sheet>,
        }
        #[derive(Deserialize)]
        struct Sheet {
            properties: SheetProperties,
        }
        #[derive(Deserialize)]
        struct SheetProperties {
            title: String,
            #[serde(default)]
            index: u32,
        }

        let request = self
            .ctx
            .http
            .get(format!("{}/spreadsheets/{}", self.ctx.sheets_api, spreadsheet_id))
            .query(&[("fields", "sheets.properties(sheetId,title,index)")]);
        let response = self.ctx.authorized(request).await?;
        let response = check_status(response, &self.spreadsheet_name, None).await?;

        let spreadsheet: Spreadsheet = response.json().await?;
        spreadsheet
            .sheets
            .into_iter()
            .min_by_key(|sheet| sheet.properties.index)
            .map(|sheet| sheet.properties.title)
            .ok_or_else(|| SheetError::SpreadsheetNotFound(self.spreadsheet_name.clone()))
    }
}

#[async_trait]
impl SpreadsheetService for GoogleSheets {
    async fn open_default_sheet(&self) -> SheetResult<Box<dyn Worksheet>> {
        let spreadsheet_id = self.find_spreadsheet_id().await?;
        let title = self.first_sheet_title(&spreadsheet_id).await?;
        log::debug!(
            "Opened spreadsheet '{}' ({}), sheet '{}'",
            self.spreadsheet_name,
            spreadsheet_id,
            title
        );

        Ok(Box::new(GoogleWorksheet {
            ctx: Arc::clone(&self.ctx),
            spreadsheet_name: self.spreadsheet_name.clone(),
            spreadsheet_id,
            title,
        }))
    }
}

/// The first sheet of an opened spreadsheet.
pub struct GoogleWorksheet {
    ctx: Arc<ApiContext>,
    spreadsheet_name: String,
    spreadsheet_id: String,
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Grid,
}

impl GoogleWorksheet {
    /// `'Sheet Title'!A1`, quoted so titles with spaces or quotes are valid.
    fn range(&self, cells: Option<&str>) -> String {
        let quoted = format!("'{}'", self.title.replace('\'', "''"));
        match cells {
            Some(cells) => format!("{}!{}", quoted, cells),
            None => quoted,
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/spreadsheets/{}/values/{}",
            self.ctx.sheets_api,
            self.spreadsheet_id,
            urlencoding::encode(range)
        )
    }

    async fn get_values(&self, range: &str, label: Option<&str>) -> SheetResult<Grid> {
        let request = self.ctx.http.get(self.values_url(range));
        let response = self.ctx.authorized(request).await?;
        let response = check_status(response, &self.spreadsheet_name, label).await?;
        let body: ValueRange = response.json().await?;
        Ok(body.values)
    }
}

#[async_trait]
impl Worksheet for GoogleWorksheet {
    async fn read_all(&self) -> SheetResult<Grid> {
        let grid = self.get_values(&self.range(None), None).await?;
        Ok(pad_grid(grid))
    }

    async fn read_cell(&self, label: &str) -> SheetResult<String> {
        let cell = parse_label(label)?.to_string();
        let grid = self.get_values(&self.range(Some(&cell)), Some(label)).await?;
        Ok(grid
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .unwrap_or_default())
    }

    async fn write_cell(&self, label: &str, value: &str) -> SheetResult<()> {
        let range = self.range(Some(&parse_label(label)?.to_string()));
        let request = self
            .ctx
            .http
            .put(self.values_url(&range))
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({
                "range": range,
                "majorDimension": "ROWS",
                "values": [[value]],
            }));
        let response = self.ctx.authorized(request).await?;
        check_status(response, &self.spreadsheet_name, Some(label)).await?;
        Ok(())
    }

    async fn append_row(&self, values: &[String]) -> SheetResult<()> {
        let range = self.range(Some("A1"));
        let request = self
            .ctx
            .http
            .post(format!("{}:append", self.values_url(&range)))
            .query(&[("valueInputOption", "USER_ENTERED"), ("insertDataOption", "INSERT_ROWS")])
            .json(&json!({
                "range": range,
                "majorDimension": "ROWS",
                "values": [values],
            }));
        let response = self.ctx.authorized(request).await?;
        check_status(response, &self.spreadsheet_name, None).await?;
        Ok(())
    }
}

/// Maps non-success responses onto [`SheetError`].
///
/// 404 means the spreadsheet is gone or not shared with the service account;
/// a 400 about an unparsable range means the cell label was rejected.
async fn check_status(response: Response, spreadsheet_name: &str, label: Option<&str>) -> SheetResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = api_error_message(&body).unwrap_or(body);

    match (status, label) {
        (StatusCode::NOT_FOUND, _) => Err(SheetError::SpreadsheetNotFound(spreadsheet_name.to_string())),
        (StatusCode::BAD_REQUEST, Some(label)) if message.contains("Unable to parse range") => {
            Err(SheetError::CellNotFound(label.to_string()))
        }
        _ => Err(SheetError::Api {
            status: status.as_u16(),
            message,
        }),
    }
}

/// Extracts `error.message` from a Google API error body.
fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Escapes a string for use inside a single-quoted Drive query literal.
fn escape_drive_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
