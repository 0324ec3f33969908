//! Test doubles for the spreadsheet adapter
//!
//! Lets handler logic run against an in-memory sheet without network access.

pub mod mock_spreadsheet;

pub use mock_spreadsheet::{MockSpreadsheet, SheetCall};
