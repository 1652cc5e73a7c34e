//! Error types for class-size extraction

use std::path::PathBuf;
use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting or reading class sizes
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A file could not be opened or created
    #[error("Failed to open {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while reading or writing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration document
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// A class-size table row that is not `className,size`
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

impl ExtractError {
    /// Wrap an IO error with the path it occurred on
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::File {
            path: path.into(),
            source,
        }
    }
}
