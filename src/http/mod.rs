//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace span)
//!     → request.rs (query → ResizeTarget)
//!     → fetch (remote SVG)
//!     → svg (resize)
//!     → response.rs (headers, error mapping)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, ResizeQuery, ResizeTarget, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
