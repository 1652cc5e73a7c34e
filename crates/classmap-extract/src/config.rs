//! Extractor configuration

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default input file name, resolved next to the executable
pub const DEFAULT_INPUT_FILE: &str = "test.map";

/// Default output file name, resolved next to the executable
pub const DEFAULT_OUTPUT_FILE: &str = "classes.csv";

/// Configuration for class-size extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Class map report to read
    pub input_path: PathBuf,

    /// CSV file to write
    pub output_path: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let dir = program_dir();
        Self {
            input_path: dir.join(DEFAULT_INPUT_FILE),
            output_path: dir.join(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl ExtractorConfig {
    /// Parse a TOML document. Omitted fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML config file.
    ///
    /// Relative paths inside the file are resolved against the file's own
    /// directory, so a config can sit next to the data it names.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ExtractError::file(path, e))?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(base) = path.parent() {
            if config.input_path.is_relative() {
                config.input_path = base.join(&config.input_path);
            }
            if config.output_path.is_relative() {
                config.output_path = base.join(&config.output_path);
            }
        }

        Ok(config)
    }

    /// Set the input path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

/// Directory containing the running executable, or `.` if unknown
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
