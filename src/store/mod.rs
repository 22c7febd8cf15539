//! Price store subsystem.
//!
//! # Data Flow
//! ```text
//! Update operation
//!     → PriceStore::set (overwrite, last writer wins)
//!
//! Merge operation
//!     → PriceStore::get
//!     → missing entries observe PriceRecord::default() without insertion
//! ```
//!
//! # Design Decisions
//! - The store is an injected trait object, not a global map, so it can be
//!   backed by a real persistence layer or swapped for a test double
//! - Entries are never deleted; a process restart resets all overrides to
//!   the seeded defaults
//! - Individual get/set operations are atomic; concurrent writes to the
//!   same id are unordered relative to each other

pub mod memory;

pub use memory::MemoryPriceStore;

use serde::{Deserialize, Serialize};

/// Product identifier used as the store key and in request paths.
pub type ProductId = u64;

/// A locally-held price override for one product.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PriceRecord {
    /// Price amount.
    pub value: f64,

    /// ISO 4217 currency code (e.g., "USD").
    pub currency_code: String,
}

impl Default for PriceRecord {
    fn default() -> Self {
        Self {
            value: 0.0,
            currency_code: "USD".to_string(),
        }
    }
}

/// Keyed price overrides by product id.
pub trait PriceStore: Send + Sync {
    /// Look up the price record for a product, if one has been set.
    fn get(&self, id: ProductId) -> Option<PriceRecord>;

    /// Overwrite the price record for a product unconditionally.
    fn set(&self, id: ProductId, record: PriceRecord);
}
