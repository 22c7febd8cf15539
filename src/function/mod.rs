//! Serverless deployment adapter.
//!
//! # Data Flow
//! ```text
//! FunctionEvent { httpMethod, path, body }
//!     → adapter.rs (path dispatch, OPTIONS preflight)
//!     → api::handlers (merge / update / health)
//!     → FunctionResponse { statusCode, headers, body }
//! ```
//!
//! # Design Decisions
//! - The event/response shapes mirror a serverless HTTP gateway contract
//!   so the adapter can sit behind one without translation
//! - Every response carries wildcard CORS headers; preflight OPTIONS
//!   short-circuits before dispatch
//! - Status codes come from the same ApiError mapping as the server
//!   adapter, so the two deployments cannot drift

pub mod adapter;

pub use adapter::{handle_event, FunctionEvent, FunctionResponse};
