//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the fetcher produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stderr, plain or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID (x-request-id) is attached to every request span
//! - Metrics are optional and off by default

pub mod logging;
pub mod metrics;
