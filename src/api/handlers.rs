//! The merge, update, and health operations.

use crate::api::error::ApiError;
use crate::api::types::{HealthResponse, ProductView, UpdateRequest};
use crate::store::{PriceRecord, PriceStore, ProductId};
use crate::upstream::UpstreamClient;

/// Merge operation: upstream title combined with the local price record.
///
/// An id with no local override observes the default `{0.00, "USD"}`
/// without inserting it.
pub async fn get_product(
    store: &dyn PriceStore,
    upstream: &UpstreamClient,
    id: ProductId,
) -> Result<ProductView, ApiError> {
    let product = upstream.fetch_product(id).await?;
    let current_price = store.get(id).unwrap_or_default();

    Ok(ProductView {
        id,
        title: product.title,
        current_price,
    })
}

/// Update operation: validate the body, refresh the upstream record, then
/// overwrite the local price.
///
/// The upstream fetch happens before the write, so a failed fetch leaves
/// the store unchanged. Last writer wins; there is no versioning.
pub async fn update_price(
    store: &dyn PriceStore,
    upstream: &UpstreamClient,
    id: ProductId,
    body: &[u8],
) -> Result<ProductView, ApiError> {
    let record = parse_price_update(body)?;

    let product = upstream.fetch_product(id).await?;
    store.set(id, record.clone());

    tracing::info!(
        product_id = id,
        value = record.value,
        currency_code = %record.currency_code,
        "Price updated"
    );

    Ok(ProductView {
        id,
        title: product.title,
        current_price: record,
    })
}

/// Health operation: static liveness response, no failure modes.
pub fn health() -> HealthResponse {
    HealthResponse::ok()
}

/// Validate an update body into a price record.
///
/// Any shape problem (unparseable JSON, missing `current_price`,
/// non-numeric `value`) collapses into the one fixed 400 error. An empty
/// `currency_code` counts as absent and defaults to USD.
fn parse_price_update(body: &[u8]) -> Result<PriceRecord, ApiError> {
    let request: UpdateRequest =
        serde_json::from_slice(body).map_err(|_| ApiError::InvalidPrice)?;

    let update = request.current_price.ok_or(ApiError::InvalidPrice)?;
    let value = update.value.ok_or(ApiError::InvalidPrice)?;

    let currency_code = update
        .currency_code
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| "USD".to_string());

    Ok(PriceRecord {
        value,
        currency_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_body_with_currency() {
        let body = br#"{"current_price": {"value": 49.99, "currency_code": "EUR"}}"#;
        let record = parse_price_update(body).unwrap();
        assert_eq!(record.value, 49.99);
        assert_eq!(record.currency_code, "EUR");
    }

    #[test]
    fn missing_currency_defaults_to_usd() {
        let body = br#"{"current_price": {"value": 49.99}}"#;
        let record = parse_price_update(body).unwrap();
        assert_eq!(record.value, 49.99);
        assert_eq!(record.currency_code, "USD");
    }

    #[test]
    fn empty_currency_defaults_to_usd() {
        let body = br#"{"current_price": {"value": 5.0, "currency_code": ""}}"#;
        let record = parse_price_update(body).unwrap();
        assert_eq!(record.currency_code, "USD");
    }

    #[test]
    fn integer_value_is_accepted() {
        let body = br#"{"current_price": {"value": 12}}"#;
        let record = parse_price_update(body).unwrap();
        assert_eq!(record.value, 12.0);
    }

    #[test]
    fn missing_current_price_is_rejected() {
        let body = br#"{"something_else": 1}"#;
        assert!(matches!(
            parse_price_update(body),
            Err(ApiError::InvalidPrice)
        ));
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let body = br#"{"current_price": {"value": "abc"}}"#;
        assert!(matches!(
            parse_price_update(body),
            Err(ApiError::InvalidPrice)
        ));
    }

    #[test]
    fn null_value_is_rejected() {
        let body = br#"{"current_price": {"value": null}}"#;
        assert!(matches!(
            parse_price_update(body),
            Err(ApiError::InvalidPrice)
        ));
    }

    #[test]
    fn unparseable_body_is_rejected() {
        assert!(matches!(
            parse_price_update(b"not json"),
            Err(ApiError::InvalidPrice)
        ));
        assert!(matches!(parse_price_update(b""), Err(ApiError::InvalidPrice)));
    }

    #[test]
    fn health_is_static() {
        let response = health();
        assert_eq!(response.status, "OK");
        assert_eq!(response.message, "Products API is running");
    }
}
