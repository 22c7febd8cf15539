//! Product Price Proxy (server variant)
//!
//! A thin HTTP API that merges product records from an external catalog
//! with locally-held price overrides.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────────┐
//!                  │                 PRICE PROXY                     │
//!                  │                                                 │
//!  Client Request  │  ┌─────────┐    ┌──────────┐    ┌───────────┐  │
//!  ────────────────┼─▶│  http   │───▶│   api    │───▶│ upstream  │──┼──▶ Catalog API
//!                  │  │ server  │    │ handlers │    │  client   │  │
//!                  │  └─────────┘    └────┬─────┘    └───────────┘  │
//!                  │                      │                         │
//!                  │                      ▼                         │
//!                  │                ┌───────────┐                   │
//!                  │                │   store   │ (in-memory,       │
//!                  │                │PriceStore │  seeded, volatile)│
//!                  │                └───────────┘                   │
//!                  │                                                 │
//!                  │  ┌──────────────────────────────────────────┐  │
//!                  │  │          Cross-Cutting Concerns           │  │
//!                  │  │  config │ observability │ lifecycle       │  │
//!                  │  └──────────────────────────────────────────┘  │
//!                  └────────────────────────────────────────────────┘
//! ```
//!
//! The same api/store/upstream core is also exposed through a
//! serverless-style adapter; see `src/bin/price-proxy-fn.rs`.

use std::sync::Arc;

use tokio::net::TcpListener;

use price_proxy::config;
use price_proxy::http::HttpServer;
use price_proxy::lifecycle::Shutdown;
use price_proxy::observability::{logging, metrics};
use price_proxy::store::MemoryPriceStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("price-proxy v0.1.0 starting");

    let config = config::load()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        cors_origin = %config.cors.allowed_origin,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let store = Arc::new(MemoryPriceStore::seeded());
    let shutdown = Shutdown::new();

    let server = HttpServer::new(config, store)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
