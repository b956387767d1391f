//! Axum web adapter for the advert service.
//!
//! Serves JSON CRUD endpoints over `/adverts` backed by `advert-core`
//! services and `advert-db` persistence.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod telemetry;

// Re-export primary types
pub use bootstrap::{AxumContext, bootstrap, serve, shutdown_signal, start_server};
pub use config::{ConfigError, ServerConfig};
pub use error::HttpError;
pub use response::{ApiResponse, ErrorBody, JSON_CONTENT_TYPE, PageMeta};
pub use routes::create_router;
pub use state::AppState;
pub use telemetry::init_tracing;
