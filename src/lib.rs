//! SVG resizing service library.
//!
//! Fetches a remote SVG, rewrites the root `width`/`height` from its
//! `viewBox` while keeping the aspect ratio, and serves the result.
//!
//! ```text
//!   GET /?svg=<url>&width=<n>&height=<n>
//!        │
//!        ▼
//!   ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//!   │   http   │───▶│  fetch   │───▶│   svg    │───▶│ response │
//!   │  query   │    │ upstream │    │  resize  │    │ headers  │
//!   └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod svg;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use svg::{resize_svg, RequestedSize};
