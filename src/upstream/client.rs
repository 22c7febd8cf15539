//! HTTP client for the external product catalog.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::UpstreamConfig;
use crate::store::ProductId;

/// Canonical product record as served by the catalog API.
///
/// Unknown fields (description, category, image, rating) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamProduct {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub price: f64,
}

/// Error type for upstream catalog calls.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("product {0} not found upstream")]
    NotFound(ProductId),

    #[error("upstream returned status {0}")]
    BadStatus(StatusCode),

    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the configured catalog base URL.
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client with the configured request timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the canonical product record for an id.
    pub async fn fetch_product(&self, id: ProductId) -> Result<UpstreamProduct, UpstreamError> {
        let url = format!("{}/products/{}", self.base_url, id);

        tracing::debug!(product_id = id, url = %url, "Fetching upstream product");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(id));
        }
        if !status.is_success() {
            return Err(UpstreamError::BadStatus(status));
        }

        let product = response.json::<UpstreamProduct>().await?;
        Ok(product)
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
