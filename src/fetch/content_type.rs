//! Content-Type matching for upstream responses.
//!
//! Accepts `image/svg+xml`, optionally followed by `;`, optional whitespace
//! and `charset=utf-8`. The whole value must match, case-insensitively.

const SVG_MIME: &str = "image/svg+xml";
const UTF8_CHARSET: &str = "charset=utf-8";

/// Returns true if `value` is an accepted SVG content type.
pub fn content_type_is_svg(value: &str) -> bool {
    let value = value.to_ascii_lowercase();
    let Some(rest) = value.strip_prefix(SVG_MIME) else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    rest.strip_prefix(';')
        .map(|params| params.trim_start() == UTF8_CHARSET)
        .unwrap_or(false)
}
