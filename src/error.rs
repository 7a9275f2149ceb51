//! Error types for issue-batch

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a batch run
///
/// A rejected issue (non-201 status) is not an error; it is recorded in
/// [`crate::types::SubmissionResult`] and the run continues.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be read
    #[error("failed to read {}", path.display())]
    Input {
        /// Path of the input file
        path: PathBuf,
        /// Underlying io error
        source: std::io::Error,
    },

    /// Input file is not a list of issue descriptors
    #[error("failed to parse {}", path.display())]
    Parse {
        /// Path of the input file
        path: PathBuf,
        /// Underlying decode error
        source: serde_json::Error,
    },

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Network-level failure (DNS, connection, TLS)
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// Creation reply did not carry the expected fields
    #[error("unexpected response shape: {0}")]
    ResponseShape(String),
}

/// Result type alias for issue-batch operations
pub type Result<T> = std::result::Result<T, Error>;
