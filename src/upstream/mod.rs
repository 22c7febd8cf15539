//! Upstream product catalog subsystem.
//!
//! # Data Flow
//! ```text
//! Merge / Update operation
//!     → client.rs (GET {base_url}/products/{id})
//!     → deserialize UpstreamProduct
//!     → title merged with the local PriceRecord
//! ```
//!
//! # Design Decisions
//! - One outbound call per request, awaited to completion; no retries,
//!   no caching of upstream responses
//! - Upstream 404 is distinguished from other failures so the API can map
//!   it to a not-found response instead of a gateway error

pub mod client;

pub use client::{UpstreamClient, UpstreamError, UpstreamProduct};
