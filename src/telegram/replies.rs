//! Reply texts for every handler
//!
//! Each function runs one request/response turn against the spreadsheet
//! adapter and returns the text to send. Nothing here touches Telegram, so
//! the handlers stay thin and the logic is testable with any
//! [`SpreadsheetService`].

use chrono::NaiveDate;
use fluent_templates::fluent_bundle::FluentArgs;
use unic_langid::LanguageIdentifier;

use crate::core::config;
use crate::core::dates::{self, DateCheck};
use crate::i18n;
use crate::sheets::{column_letters, Grid, SheetError, SheetResult, SpreadsheetService};

/// Formats every cell as `(row, col) = value`, one per line, row-major.
pub fn format_grid(grid: &Grid) -> String {
    grid.iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, value)| {
                format!("({}, {}) = {}", row + 1, column_letters(col as u32 + 1), value)
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// /view_sheet: dumps the whole sheet.
pub async fn view_sheet(sheets: &dyn SpreadsheetService, lang: &LanguageIdentifier) -> SheetResult<String> {
    let sheet = sheets.open_default_sheet().await?;
    let grid = sheet.read_all().await?;
    Ok(format!("{}\n{}", i18n::t(lang, "sheet-dump-header"), format_grid(&grid)))
}

/// Splits `/edit_sheet` arguments into the cell label and the text.
///
/// The text is every remaining whitespace-separated word joined by single
/// spaces. Returns `None` when fewer than two words are given.
pub fn parse_edit_args(args: &str) -> Option<(String, String)> {
    let mut words = args.split_whitespace();
    let cell = words.next()?;
    let text = words.collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return None;
    }
    Some((cell.to_string(), text))
}

/// /edit_sheet <cell> <text...>: writes the text to one cell.
///
/// With fewer than two arguments the adapter is not touched.
pub async fn edit_sheet(
    sheets: &dyn SpreadsheetService,
    args: &str,
    lang: &LanguageIdentifier,
) -> SheetResult<String> {
    let Some((cell, text)) = parse_edit_args(args) else {
        return Ok(i18n::t(lang, "edit-usage"));
    };

    let sheet = sheets.open_default_sheet().await?;
    sheet.write_cell(&cell, &text).await?;

    let mut reply_args = FluentArgs::new();
    reply_args.set("cell", cell);
    reply_args.set("value", text);
    Ok(i18n::t_args(lang, "edit-done", &reply_args))
}

/// Free text: records the date when it is today's, otherwise quotes today.
pub async fn record_date(
    sheets: &dyn SpreadsheetService,
    text: &str,
    today: NaiveDate,
    lang: &LanguageIdentifier,
) -> SheetResult<String> {
    match dates::check_date(text, today) {
        DateCheck::Accepted(date) => {
            let sheet = sheets.open_default_sheet().await?;
            sheet.append_row(&[date]).await?;
            Ok(i18n::t(lang, "date-accepted"))
        }
        DateCheck::Rejected => {
            let mut args = FluentArgs::new();
            args.set("today", dates::format_date(today));
            Ok(i18n::t_args(lang, "date-invalid", &args))
        }
    }
}

/// "Sheet value" button: reads the fixed cell.
pub async fn sheet_value(sheets: &dyn SpreadsheetService, lang: &LanguageIdentifier) -> SheetResult<String> {
    let sheet = sheets.open_default_sheet().await?;
    let value = sheet.read_cell(config::google::FIXED_CELL).await?;

    let mut args = FluentArgs::new();
    args.set("cell", config::google::FIXED_CELL);
    args.set("value", value);
    Ok(i18n::t_args(lang, "cell-value", &args))
}

/// Localized reply for the expected not-found errors, `None` for the rest.
pub fn failure_text(err: &SheetError, lang: &LanguageIdentifier) -> Option<String> {
    match err {
        SheetError::SpreadsheetNotFound(_) => Some(i18n::t(lang, "sheet-not-found")),
        SheetError::CellNotFound(_) => Some(i18n::t(lang, "cell-not-found")),
        _ => None,
    }
}

/// Turns a handler outcome into the text to send.
///
/// Not-found errors become their localized message; every other error is
/// passed through so the dispatcher logs it and nothing is sent.
pub fn respond(result: SheetResult<String>, lang: &LanguageIdentifier) -> SheetResult<String> {
    match result {
        Err(err) if err.is_user_facing() => {
            log::warn!("Spreadsheet lookup failed: {}", err);
            Ok(failure_text(&err, lang).unwrap_or_default())
        }
        other => other,
    }
}

/// Maximum length of one Telegram text message, in UTF-16 code units.
pub const MESSAGE_LIMIT: usize = 4096;

/// Length as Telegram counts it: characters outside the BMP take two units.
pub fn telegram_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Splits a reply into chunks of at most `limit` UTF-16 code units.
///
/// Cuts on line boundaries; a single line longer than `limit` is cut
/// mid-line, never inside a character. Short texts come back as one chunk.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(2);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split('\n') {
        let line_len = telegram_len(line);
        let sep = usize::from(!current.is_empty());

        if current_len + sep + line_len <= limit {
            if sep == 1 {
                current.push('\n');
            }
            current.push_str(line);
            current_len += sep + line_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        for c in line.chars() {
            let width = c.len_utf16();
            if current_len + width > limit {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push(c);
            current_len += width;
        }
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}
