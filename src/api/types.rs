//! Request and response shapes for the API surface.

use serde::{Deserialize, Serialize};

use crate::store::{PriceRecord, ProductId};

/// Merged response: upstream title plus the current local price.
///
/// Constructed fresh on every request; never persisted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub title: String,
    pub current_price: PriceRecord,
}

/// Inbound body for the update operation.
///
/// Fields are optional so validation can answer with the fixed 400 message
/// instead of a deserializer error.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub current_price: Option<PriceUpdate>,
}

#[derive(Debug, Deserialize)]
pub struct PriceUpdate {
    pub value: Option<f64>,
    pub currency_code: Option<String>,
}

/// Static liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Products API is running".to_string(),
        }
    }
}

/// Generic error body: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
