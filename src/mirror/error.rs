//! Error types for the mirror pipeline.

use thiserror::Error;

/// Result type alias for mirror operations.
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Errors that can occur while mirroring firmware.
///
/// There is no local recovery anywhere in the pipeline; every variant
/// propagates to `main` and terminates the run.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// HTTP request failed or timed out.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status code.
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body was not the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Device type code not present in the registry. Signals a data
    /// contract change on the upstream server.
    #[error("Unknown device type code {code}")]
    UnknownDeviceType { code: u32 },

    /// Standard I/O error (directory creation, file writes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A list URL could not be parsed, or a file path could not be
    /// joined against it.
    #[error("Cannot resolve '{path}' against base URL '{base}'")]
    InvalidUrl { base: String, path: String },
}
