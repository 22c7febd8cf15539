//! Core API logic, shared by both deployment adapters.
//!
//! # Data Flow
//! ```text
//! server adapter (http/) ──┐
//!                          ├─▶ handlers.rs (merge / update / health)
//! function adapter ────────┘        │
//!                                   ├─▶ store (PriceStore trait)
//!                                   └─▶ upstream (UpstreamClient)
//! ```
//!
//! # Design Decisions
//! - One handler module, two thin adapters: the error-to-status mapping
//!   lives in error.rs and cannot drift between deployments
//! - Updates fetch the upstream record before writing, so a failed fetch
//!   leaves the store unchanged

pub mod error;
pub mod handlers;
pub mod types;

pub use error::ApiError;
pub use handlers::{get_product, health, update_price};
pub use types::{HealthResponse, ProductView};

use std::sync::Arc;

use crate::store::PriceStore;
use crate::upstream::UpstreamClient;

/// Shared application state injected into both adapters.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PriceStore>,
    pub upstream: Arc<UpstreamClient>,
}
