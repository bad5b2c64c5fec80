//! Error handling module for the json5 CLI.
//!
//! This module provides a custom error type using `thiserror` for
//! structured error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the json5 CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// A named input or output file could not be opened.
    #[error("failed to open {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO failure not tied to a specific path (e.g. stdin/stdout).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input text was not valid JSON5.
    #[error(transparent)]
    Parse(#[from] json5::ParseError),

    /// The value could not be serialised.
    #[error(transparent)]
    Format(#[from] json5::FormatError),

    /// Logging could not be initialised.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
