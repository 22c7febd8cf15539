//! API error taxonomy and the canonical error-to-status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::types::ErrorResponse;
use crate::store::ProductId;
use crate::upstream::UpstreamError;

/// Errors surfaced by the API operations.
///
/// `Display` output doubles as the client-facing message, so variants keep
/// their wording stable and free of internal detail. The underlying cause
/// is logged at the handler, not echoed to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The upstream catalog has no product with this id.
    #[error("Product with ID {0} not found")]
    ProductNotFound(ProductId),

    /// Missing `current_price` or non-numeric `value` in the update body.
    #[error("Invalid price data. Please provide current_price.value as a number.")]
    InvalidPrice,

    /// Upstream call failed for any reason other than a confirmed 404.
    #[error("Upstream request failed")]
    Upstream(#[source] UpstreamError),
}

impl ApiError {
    /// Canonical status mapping, shared by both deployment adapters.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidPrice => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Client-facing body for this error.
    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::NotFound(id) => ApiError::ProductNotFound(id),
            other => ApiError::Upstream(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_not_found_maps_to_404() {
        let err = ApiError::from(UpstreamError::NotFound(4242));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body().message, "Product with ID 4242 not found");
    }

    #[test]
    fn other_upstream_failures_map_to_502() {
        let err = ApiError::from(UpstreamError::BadStatus(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.body().message, "Upstream request failed");
    }

    #[test]
    fn invalid_price_maps_to_400_with_fixed_message() {
        let err = ApiError::InvalidPrice;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body().message,
            "Invalid price data. Please provide current_price.value as a number."
        );
    }
}
