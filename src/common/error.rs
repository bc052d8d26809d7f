//! Error types for the harness
//!
//! Error messages are designed to be actionable: a missing focus binary
//! tells the operator how to point the harness at one.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    #[error("'{0}' not found on PATH. Install the Focus CLI or pass --focus-bin <path>")]
    FocusNotFound(String),

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
