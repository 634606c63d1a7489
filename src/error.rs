//! Per-request error type.
//!
//! Every failure a resize request can hit ends up here; `http::response`
//! maps all of them to a single HTTP status.

use thiserror::Error;

use crate::fetch::FetchError;
use crate::svg::SvgError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// `svg` query parameter absent or blank.
    #[error("Invalid URL: svg parameter is required")]
    MissingUrl,

    /// `svg` query parameter is not an absolute URL.
    #[error("Invalid URL '{input}': {source}")]
    UrlParse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Only http and https are fetched.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// `width` or `height` is not a non-negative finite number.
    #[error("Invalid {name}: {value}")]
    InvalidDimension { name: &'static str, value: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Svg(#[from] SvgError),
}

impl ServiceError {
    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::MissingUrl | ServiceError::UrlParse { .. } => "url",
            ServiceError::UnsupportedScheme(_) => "scheme",
            ServiceError::InvalidDimension { .. } => "dimension",
            ServiceError::Fetch(e) => e.kind(),
            ServiceError::Svg(_) => "malformed_svg",
        }
    }
}
