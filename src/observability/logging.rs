//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default directive when RUST_LOG is unset.
const DEFAULT_DIRECTIVE: &str = "price_proxy=debug,tower_http=debug";

/// Initialize the tracing subscriber writing to stdout.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_DIRECTIVE.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize the tracing subscriber writing to stderr.
///
/// The function runner owns stdout for its response payload, so logs must
/// go elsewhere.
pub fn init_stderr() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_DIRECTIVE.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
