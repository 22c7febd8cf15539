//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs, PRICE_PROXY_CONFIG)
//!     → environment overrides (EXTERNAL_API_URL, PORT, CORS_ORIGIN)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the service runs with no config at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::AppConfig;
pub use schema::CorsConfig;
pub use schema::ListenerConfig;
pub use schema::UpstreamConfig;
