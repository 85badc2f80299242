//! Error types and handling for toggle operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for toggle operations
#[derive(Debug, Error)]
pub enum TogglerError {
    /// Configuration could not be located or its path could not be expanded
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML or a document that does not match the toggle schema
    #[error("Failed to parse toggle file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The word to toggle could not be obtained
    #[error("Input error: {message}")]
    InputError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Io,
    Parse,
    Input,
}

impl TogglerError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TogglerError::ConfigError { .. } => ErrorKind::Config,
            TogglerError::IoError { .. } => ErrorKind::Io,
            TogglerError::ParseError { .. } => ErrorKind::Parse,
            TogglerError::InputError { .. } => ErrorKind::Input,
        }
    }

    /// Whether this error came from locating, reading or parsing the toggle file
    pub fn is_config_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Config | ErrorKind::Io | ErrorKind::Parse
        )
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse_error(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ParseError {
            path: path.into(),
            source,
        }
    }

    /// Create an input error
    pub fn input_error(message: impl Into<String>) -> Self {
        Self::InputError {
            message: message.into(),
        }
    }
}
