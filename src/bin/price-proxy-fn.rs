//! Product Price Proxy (function variant)
//!
//! Serverless-style runner: reads one gateway event as JSON on stdin,
//! dispatches it through the shared API logic, and writes the response as
//! JSON to stdout. Logs go to stderr so stdout stays machine-readable.
//!
//! ```text
//! echo '{"httpMethod":"GET","path":"/api/products/15"}' | price-proxy-fn
//! ```

use std::io::Read;
use std::sync::Arc;

use price_proxy::api::AppState;
use price_proxy::config;
use price_proxy::function::{self, FunctionEvent, FunctionResponse};
use price_proxy::observability::logging;
use price_proxy::store::MemoryPriceStore;
use price_proxy::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_stderr();

    let config = config::load()?;

    let state = AppState {
        store: Arc::new(MemoryPriceStore::seeded()),
        upstream: Arc::new(UpstreamClient::new(&config.upstream)?),
    };

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let event: FunctionEvent = serde_json::from_str(&input)?;

    tracing::debug!(method = %event.http_method, path = %event.path, "Dispatching event");

    // Dispatch on a separate task so a panic funnels into a 500 response
    // instead of killing the runner without output.
    let handle = tokio::spawn(async move { function::handle_event(&state, event).await });
    let response = match handle.await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Dispatch task failed");
            FunctionResponse::internal_error()
        }
    };

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
