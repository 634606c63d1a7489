//! Request parsing and identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Turn raw query parameters into a validated `ResizeTarget`
//!
//! # Design Decisions
//! - The URL is validated first; nothing is fetched if it is bad
//! - Empty and zero dimensions mean "not requested"

use axum::http::{HeaderValue, Request};
use serde::Deserialize;
use tower_http::request_id::{MakeRequestId, RequestId};
use url::Url;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::svg::RequestedSize;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates `x-request-id` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Raw query string of a resize request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResizeQuery {
    pub svg: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

/// A validated resize request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeTarget {
    pub url: Url,
    pub size: RequestedSize,
}

impl ResizeQuery {
    pub fn into_target(self) -> Result<ResizeTarget, ServiceError> {
        let url = parse_svg_url(self.svg.as_deref())?;
        let width = parse_dimension("width", self.width.as_deref())?;
        let height = parse_dimension("height", self.height.as_deref())?;

        Ok(ResizeTarget {
            url,
            size: RequestedSize::new(width, height),
        })
    }
}

/// Parse the `svg` parameter as an absolute http(s) URL.
pub fn parse_svg_url(raw: Option<&str>) -> Result<Url, ServiceError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ServiceError::MissingUrl)?;

    let url = Url::parse(raw).map_err(|source| ServiceError::UrlParse {
        input: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ServiceError::UnsupportedScheme(other.to_string())),
    }
}

/// Parse an optional dimension. Blank → `None`, zero → `None`,
/// negative or non-numeric → error.
pub fn parse_dimension(name: &'static str, raw: Option<&str>) -> Result<Option<f64>, ServiceError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value).filter(|v| *v != 0.0)),
        _ => Err(ServiceError::InvalidDimension {
            name,
            value: raw.to_string(),
        }),
    }
}
