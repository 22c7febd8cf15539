//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, CORS)
//! - Bind the server to a listener and serve until shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::{self, ApiError, AppState};
use crate::config::AppConfig;
use crate::lifecycle::shutdown_signal;
use crate::observability::metrics;
use crate::store::{PriceStore, ProductId};
use crate::upstream::UpstreamClient;

/// UUID v4 request id generator for the `x-request-id` header.
#[derive(Clone, Copy, Default)]
struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// HTTP server for the price proxy.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: AppConfig, store: Arc<dyn PriceStore>) -> Result<Self, reqwest::Error> {
        let upstream = Arc::new(UpstreamClient::new(&config.upstream)?);
        let state = AppState { store, upstream };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let allow_origin = match config.cors.allowed_origin.parse::<HeaderValue>() {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(_) => {
                tracing::warn!(
                    origin = %config.cors.allowed_origin,
                    "CORS origin is not a valid header value, allowing any origin"
                );
                AllowOrigin::any()
            }
        };

        let cors = CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            .route(
                "/api/products/{id}",
                get(get_product_handler).put(update_price_handler),
            )
            .route("/api/health", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(cors)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(RequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// ctrl-c or the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown channel fired");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// GET /api/products/{id}
async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<api::ProductView>, ApiError> {
    let start = Instant::now();
    let result = api::get_product(state.store.as_ref(), &state.upstream, id).await;

    match result {
        Ok(view) => {
            metrics::record_request("GET", "/api/products/{id}", 200, start);
            Ok(Json(view))
        }
        Err(err) => {
            tracing::error!(product_id = id, error = %err, "Error fetching product");
            metrics::record_request("GET", "/api/products/{id}", err.status().as_u16(), start);
            Err(err)
        }
    }
}

/// PUT /api/products/{id}
async fn update_price_handler(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    body: axum::body::Bytes,
) -> Result<Json<api::ProductView>, ApiError> {
    let start = Instant::now();
    let result = api::update_price(state.store.as_ref(), &state.upstream, id, &body).await;

    match result {
        Ok(view) => {
            metrics::record_request("PUT", "/api/products/{id}", 200, start);
            Ok(Json(view))
        }
        Err(err) => {
            tracing::error!(product_id = id, error = %err, "Error updating product price");
            metrics::record_request("PUT", "/api/products/{id}", err.status().as_u16(), start);
            Err(err)
        }
    }
}

/// GET /api/health
async fn health_handler() -> impl IntoResponse {
    Json(api::health())
}
