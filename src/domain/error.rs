use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for talendroutine operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A generated artifact could not be opened or written.
    #[error("Error creating file {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file explicitly requested but absent.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Config file already present where `init` would write one.
    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Dependency coordinate could not be split into its fields.
    #[error(
        "Invalid dependency coordinate '{0}': expected groupId:artifactId:type[:classifier]:version[:scope]"
    )]
    InvalidCoordinate(String),

    /// Template registration or rendering failed.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::WriteFailed { path: path.into(), source }
    }

}
