//! Response assembly.
//!
//! # Responsibilities
//! - Build the success response (SVG body, content type, cache header)
//! - Map every `ServiceError` to 400 with a plain-text message
//!
//! # Design Decisions
//! - Client and upstream failures are not distinguished; all are 400
//! - One mapping point, so each request gets exactly one response

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::ServiceError;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// `Cache-Control` value for successful responses.
pub fn cache_control_value(max_age_secs: u64) -> String {
    format!("private, max-age={max_age_secs}")
}

/// 200 response carrying resized SVG markup.
pub fn svg_response(body: String, cache_control: &str) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE.to_string()),
            (header::CACHE_CONTROL, cache_control.to_string()),
        ],
        body,
    )
        .into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
            self.to_string(),
        )
            .into_response()
    }
}
