//! Upstream fetch subsystem.
//!
//! # Data Flow
//! ```text
//! Url
//!     → client.rs (single GET, no retries)
//!     → status check (2xx only)
//!     → content_type.rs (image/svg+xml, optional charset=utf-8)
//!     → non-empty body check
//!     → SVG text
//! ```
//!
//! # Design Decisions
//! - One attempt per request; failures go straight back to the caller
//! - No deadline unless `upstream.timeout_secs` is configured

pub mod client;
pub mod content_type;
pub mod error;

pub use client::SvgFetcher;
pub use content_type::content_type_is_svg;
pub use error::FetchError;
