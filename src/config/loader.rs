//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable pointing at an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "PRICE_PROXY_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: defaults, then an optional TOML file, then
/// environment overrides, then validation.
pub fn load() -> Result<AppConfig, ConfigError> {
    let mut config = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => from_file(Path::new(&path))?,
        Err(_) => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse configuration from a TOML file.
pub fn from_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Apply the environment variables the deployment environments set.
fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(base_url) = env::var("EXTERNAL_API_URL") {
        config.upstream.base_url = base_url;
    }
    if let Ok(port) = env::var("PORT") {
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }
    if let Ok(origin) = env::var("CORS_ORIGIN") {
        config.cors.allowed_origin = origin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_catalog() {
        let config = AppConfig::default();
        assert_eq!(config.upstream.base_url, "https://fakestoreapi.com");
        assert_eq!(config.listener.bind_address, "0.0.0.0:3001");
        assert_eq!(config.cors.allowed_origin, "http://localhost:5173");
    }

    #[test]
    fn env_vars_override_defaults() {
        let mut config = AppConfig::default();
        env::set_var("EXTERNAL_API_URL", "http://127.0.0.1:9999");
        env::set_var("PORT", "4002");
        env::set_var("CORS_ORIGIN", "http://example.test");

        apply_env_overrides(&mut config);

        env::remove_var("EXTERNAL_API_URL");
        env::remove_var("PORT");
        env::remove_var("CORS_ORIGIN");

        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.listener.bind_address, "0.0.0.0:4002");
        assert_eq!(config.cors.allowed_origin, "http://example.test");
    }

    #[test]
    fn minimal_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [upstream]
            base_url = "http://catalog.internal"
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.base_url, "http://catalog.internal");
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.listener.bind_address, "0.0.0.0:3001");
    }
}
