//! Errors returned by the REST and storage clients.
//!
//! `Display` is what the pages put in front of the user, so variants carry the
//! backend's own message whenever it sent one.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with `{"success": false, "message": ...}`.
    #[error("{0}")]
    Rejected(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Storage(String),
    #[error("Update failed: No ID returned")]
    MissingId,
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}
