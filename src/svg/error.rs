//! SVG error types

use thiserror::Error;

/// Errors raised while parsing or rewriting an SVG document.
#[derive(Debug, Error)]
pub enum SvgError {
    /// Not well-formed XML, or the root element is not `svg`.
    #[error("Invalid SVG image: {0}")]
    Malformed(String),
}

impl SvgError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed(detail.into())
    }
}

impl From<quick_xml::Error> for SvgError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for SvgError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Result type for SVG operations
pub type Result<T> = std::result::Result<T, SvgError>;
