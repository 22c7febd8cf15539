//! Server deployment adapter.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum router, middleware stack)
//!     → api::handlers (merge / update / health)
//!     → JSON response
//! ```
//!
//! # Design Decisions
//! - The adapter only extracts path/body and translates results; all
//!   behavior lives in the api module so it matches the function adapter
//! - CORS is restricted to the configured origin here; the function
//!   adapter allows any origin

pub mod server;

pub use server::HttpServer;
