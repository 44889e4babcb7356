use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for jobflow operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A paragraph document (master resume or a derived copy) is missing.
    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// Explicitly requested config file is missing.
    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Site catalog entry failed validation.
    #[error("Invalid job site '{name}': {reason}")]
    InvalidSite { name: String, reason: String },

    /// The application log exists but does not hold a JSON array of records.
    #[error("Malformed application log {path}: {reason}")]
    MalformedLog { path: String, reason: String },

    /// A scaffold already exists in the target directory.
    #[error("jobflow.toml already exists in this directory")]
    AlreadyInitialized,

    /// Cover letter or scaffold template failed to render.
    #[error("Template error: {0}")]
    Template(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
