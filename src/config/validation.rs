//! Semantic configuration checks, applied after deserialization.

use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address must not be empty")]
    EmptyBindAddress,

    #[error("upstream.base_url is not a valid URL: {0}")]
    InvalidUpstreamUrl(String),

    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroUpstreamTimeout,

    #[error("cors.allowed_origin must not be empty")]
    EmptyCorsOrigin,
}

/// Validate a deserialized configuration, collecting all failures.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.trim().is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }

    if Url::parse(&config.upstream.base_url).is_err() {
        errors.push(ValidationError::InvalidUpstreamUrl(
            config.upstream.base_url.clone(),
        ));
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroUpstreamTimeout);
    }

    if config.cors.allowed_origin.trim().is_empty() {
        errors.push(ValidationError::EmptyCorsOrigin);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
