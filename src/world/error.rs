//! Error types for data file loading.

use thiserror::Error;

/// Errors that can occur when loading level, enemy, or character data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

impl DataLoadError {
    /// Wrap a RON error with the offending path.
    pub fn parse(path: &str, err: ron::error::SpannedError) -> Self {
        Self::ParseError {
            path: path.to_string(),
            details: err.to_string(),
        }
    }
}
