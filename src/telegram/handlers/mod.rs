//! Telegram bot handler tree configuration
//!
//! This module provides the dispatcher schema for the bot. Handlers receive
//! their spreadsheet client through [`HandlerDeps`], so integration tests can
//! build the same tree over a test double.

mod callbacks;
mod commands;
mod schema;
mod text;
mod types;

pub use schema::schema;
pub use types::{user_lang, HandlerDeps, HandlerError};
