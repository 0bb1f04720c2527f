//! CLI command handlers

pub mod commands;

pub use commands::{check, convert, date_prefixed_path, CheckSummary};
