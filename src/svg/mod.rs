//! SVG resizing subsystem.
//!
//! # Data Flow
//! ```text
//! SVG text
//!     → document.rs (well-formedness check, typed <svg> root, raw remainder)
//!     → viewbox.rs (min-x min-y width height)
//!     → resize.rs (aspect-ratio arithmetic, width/height rewrite)
//!     → document.rs (serialize back to markup)
//! ```
//!
//! # Design Decisions
//! - Only the root start tag is rebuilt; all other markup is written back as read
//! - Missing or unusable viewBox returns the input text untouched
//! - viewBox is never modified, so resizing is idempotent

pub mod document;
pub mod error;
pub mod resize;
pub mod viewbox;

pub use document::{SvgDocument, SvgRoot};
pub use error::SvgError;
pub use resize::{fit_dimensions, resize_svg, RequestedSize};
pub use viewbox::ViewBox;
