use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("issues[{index}] is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("issues[{index}]: cannot format created_on '{value}': {source}")]
    Format {
        index: usize,
        value: String,
        #[source]
        source: DateFormatError,
    },

    #[error("Failed to write '{}': {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

/// Reasons a `created_on` timestamp cannot be turned into a "Date added" cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("no 'T' date/time separator")]
    MissingSeparator,

    #[error("'{0}' is not a YYYY-MM-DD calendar date")]
    InvalidDate(String),
}

impl ConvertError {
    /// Short name of the error class, used in CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::Read { .. } => "ReadError",
            ConvertError::Parse { .. } => "ParseError",
            ConvertError::MissingField { .. } => "MissingFieldError",
            ConvertError::Format { .. } => "FormatError",
            ConvertError::Write { .. } => "WriteError",
        }
    }
}
