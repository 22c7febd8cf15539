//! Product Price Proxy Library
//!
//! A thin HTTP proxy that merges product records from an external catalog
//! with locally-held price overrides. The same core logic is exposed through
//! two deployment adapters: a long-running axum server and a serverless-style
//! function handler.

pub mod api;
pub mod config;
pub mod function;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;
pub mod upstream;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{MemoryPriceStore, PriceRecord, PriceStore, ProductId};
