//! Fetch error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching a remote SVG image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, redirect or body read failure.
    #[error("Image request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("Image response is not OK: {0}")]
    Status(StatusCode),

    /// Upstream content-type is not `image/svg+xml`.
    #[error("Invalid Content-Type: {0}")]
    ContentType(String),

    /// Body is empty or whitespace only.
    #[error("Image is empty")]
    EmptyBody,
}

impl FetchError {
    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status(_) => "upstream_status",
            FetchError::ContentType(_) => "content_type",
            FetchError::EmptyBody => "empty_body",
        }
    }
}
