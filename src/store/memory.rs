//! In-memory price store.

use dashmap::DashMap;

use crate::store::{PriceRecord, PriceStore, ProductId};

/// Seed entries loaded at startup: (product id, value, currency code).
const SEED_PRICES: [(ProductId, f64, &str); 5] = [
    (15, 29.99, "USD"),
    (16, 19.99, "USD"),
    (17, 39.99, "USD"),
    (18, 24.99, "USD"),
    (19, 34.99, "USD"),
];

/// Process-local price store backed by a concurrent map.
///
/// State is non-durable: a restart resets all overrides to the seeded
/// defaults.
pub struct MemoryPriceStore {
    prices: DashMap<ProductId, PriceRecord>,
}

impl MemoryPriceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            prices: DashMap::new(),
        }
    }

    /// Create a store pre-populated with the seed entries.
    pub fn seeded() -> Self {
        let store = Self::new();
        for (id, value, currency_code) in SEED_PRICES {
            store.prices.insert(
                id,
                PriceRecord {
                    value,
                    currency_code: currency_code.to_string(),
                },
            );
        }
        store
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for MemoryPriceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceStore for MemoryPriceStore {
    fn get(&self, id: ProductId) -> Option<PriceRecord> {
        self.prices.get(&id).map(|entry| entry.value().clone())
    }

    fn set(&self, id: ProductId, record: PriceRecord) {
        self.prices.insert(id, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_holds_five_entries() {
        let store = MemoryPriceStore::seeded();
        assert_eq!(store.len(), 5);
        for (id, value, currency_code) in SEED_PRICES {
            let record = store.get(id).expect("seeded id missing");
            assert_eq!(record.value, value);
            assert_eq!(record.currency_code, currency_code);
        }
    }

    #[test]
    fn unseeded_id_is_absent() {
        let store = MemoryPriceStore::seeded();
        assert_eq!(store.get(42), None);
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let store = MemoryPriceStore::seeded();
        store.set(
            15,
            PriceRecord {
                value: 49.99,
                currency_code: "EUR".to_string(),
            },
        );
        let record = store.get(15).unwrap();
        assert_eq!(record.value, 49.99);
        assert_eq!(record.currency_code, "EUR");
    }

    #[test]
    fn read_your_write() {
        let store = MemoryPriceStore::new();
        let record = PriceRecord {
            value: 12.5,
            currency_code: "USD".to_string(),
        };
        store.set(7, record.clone());
        assert_eq!(store.get(7), Some(record));
    }
}
