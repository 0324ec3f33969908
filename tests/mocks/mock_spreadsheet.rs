//! In-memory spreadsheet
//!
//! Keeps one sheet as a grid, records every adapter call, and can be told
//! that the spreadsheet does not exist.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use sheetbot::sheets::{pad_grid, parse_label, Grid, SheetError, SheetResult, SpreadsheetService, Worksheet};
use tokio::sync::Mutex;

/// One recorded adapter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetCall {
    Open,
    ReadAll,
    ReadCell(String),
    WriteCell(String, String),
    AppendRow(Vec<String>),
}

#[derive(Debug, Default)]
struct State {
    grid: Grid,
    calls: Vec<SheetCall>,
    missing: bool,
}

/// Spreadsheet service over a shared in-memory grid.
#[derive(Clone, Default)]
pub struct MockSpreadsheet {
    state: Arc<Mutex<State>>,
}

impl MockSpreadsheet {
    /// Sheet pre-filled with `rows`.
    pub fn with_rows(rows: &[&[&str]]) -> Self {
        let grid = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        Self {
            state: Arc::new(Mutex::new(State {
                grid,
                ..State::default()
            })),
        }
    }

    /// A spreadsheet that cannot be found; every open fails.
    pub fn missing() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                missing: true,
                ..State::default()
            })),
        }
    }

    pub async fn calls(&self) -> Vec<SheetCall> {
        self.state.lock().await.calls.clone()
    }

    pub async fn grid(&self) -> Grid {
        self.state.lock().await.grid.clone()
    }
}

#[async_trait]
impl SpreadsheetService for MockSpreadsheet {
    async fn open_default_sheet(&self) -> SheetResult<Box<dyn Worksheet>> {
        let mut state = self.state.lock().await;
        state.calls.push(SheetCall::Open);
        if state.missing {
            return Err(SheetError::SpreadsheetNotFound("Telegram Bot Sheet".to_string()));
        }
        Ok(Box::new(MockWorksheet {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockWorksheet {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl Worksheet for MockWorksheet {
    async fn read_all(&self) -> SheetResult<Grid> {
        let mut state = self.state.lock().await;
        state.calls.push(SheetCall::ReadAll);
        Ok(pad_grid(state.grid.clone()))
    }

    async fn read_cell(&self, label: &str) -> SheetResult<String> {
        let mut state = self.state.lock().await;
        state.calls.push(SheetCall::ReadCell(label.to_string()));
        let cell = parse_label(label)?;
        Ok(state
            .grid
            .get(cell.row as usize - 1)
            .and_then(|row| row.get(cell.col as usize - 1))
            .cloned()
            .unwrap_or_default())
    }

    async fn write_cell(&self, label: &str, value: &str) -> SheetResult<()> {
        let mut state = self.state.lock().await;
        state
            .calls
            .push(SheetCall::WriteCell(label.to_string(), value.to_string()));
        let cell = parse_label(label)?;
        let (row, col) = (cell.row as usize - 1, cell.col as usize - 1);
        if state.grid.len() <= row {
            state.grid.resize(row + 1, Vec::new());
        }
        let cells = &mut state.grid[row];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = value.to_string();
        Ok(())
    }

    async fn append_row(&self, values: &[String]) -> SheetResult<()> {
        let mut state = self.state.lock().await;
        state.calls.push(SheetCall::AppendRow(values.to_vec()));
        state.grid.push(values.to_vec());
        Ok(())
    }
}
