//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Consumers:
//!     → stdout/stderr log stream
//!     → optional Prometheus scrape endpoint
//! ```
//!
//! # Design Decisions
//! - Request ID flows through handler spans via tower-http layers
//! - Metrics are cheap (atomic increments) and off by default

pub mod logging;
pub mod metrics;
