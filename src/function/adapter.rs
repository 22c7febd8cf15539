//! Event dispatch for the serverless-style deployment.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::ErrorResponse;
use crate::api::{self, AppState};
use crate::store::ProductId;

/// Inbound gateway event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// Outbound gateway response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    /// 200 with an empty body and CORS headers (preflight answer).
    pub fn empty_ok() -> Self {
        Self {
            status_code: 200,
            headers: cors_headers(),
            body: String::new(),
        }
    }

    /// JSON response with CORS headers.
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Self {
        let mut headers = cors_headers();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body: serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string()),
        }
    }

    /// Fixed body for unknown endpoints.
    pub fn endpoint_not_found() -> Self {
        Self::json(
            404,
            &ErrorResponse {
                message: "Endpoint not found".to_string(),
            },
        )
    }

    /// Funnel for unexpected failures at the top of the dispatch.
    pub fn internal_error() -> Self {
        Self::json(
            500,
            &ErrorResponse {
                message: "Internal server error".to_string(),
            },
        )
    }
}

/// CORS headers attached to every function response; any origin is allowed
/// in this deployment shape.
fn cors_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            "GET, POST, PUT, DELETE, OPTIONS".to_string(),
        ),
    ])
}

/// Dispatch one gateway event against the shared API logic.
///
/// OPTIONS preflight answers 200 regardless of path. Unknown paths and
/// methods answer 404 with a fixed body.
pub async fn handle_event(state: &AppState, event: FunctionEvent) -> FunctionResponse {
    if event.http_method.eq_ignore_ascii_case("OPTIONS") {
        return FunctionResponse::empty_ok();
    }

    let segments: Vec<&str> = event.path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["api", "products", raw_id] => {
            let Ok(id) = raw_id.parse::<ProductId>() else {
                return FunctionResponse::json(
                    400,
                    &ErrorResponse {
                        message: format!("Invalid product id: {raw_id}"),
                    },
                );
            };
            dispatch_product(state, &event, id).await
        }
        ["api", "health"] => match event.http_method.as_str() {
            "GET" => FunctionResponse::json(200, &api::health()),
            _ => FunctionResponse::endpoint_not_found(),
        },
        _ => FunctionResponse::endpoint_not_found(),
    }
}

async fn dispatch_product(
    state: &AppState,
    event: &FunctionEvent,
    id: ProductId,
) -> FunctionResponse {
    match event.http_method.as_str() {
        "GET" => {
            let result = api::get_product(state.store.as_ref(), &state.upstream, id).await;
            into_function_response(id, result)
        }
        "PUT" => {
            let body = event.body.as_deref().unwrap_or_default();
            let result =
                api::update_price(state.store.as_ref(), &state.upstream, id, body.as_bytes())
                    .await;
            into_function_response(id, result)
        }
        _ => FunctionResponse::endpoint_not_found(),
    }
}

fn into_function_response(
    id: ProductId,
    result: Result<api::ProductView, api::ApiError>,
) -> FunctionResponse {
    match result {
        Ok(view) => FunctionResponse::json(200, &view),
        Err(err) => {
            tracing::error!(product_id = id, error = %err, "Function dispatch error");
            FunctionResponse::json(err.status().as_u16(), &err.body())
        }
    }
}
