//! OLC Service Library
//!
//! HTTP handlers and types for the Plus Code service.
//! This library is used by both the olc-service binary and integration tests.

pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use olc::OlcCodec;

/// Application state shared across handlers.
pub struct AppState {
    /// Codec carrying the default code length.
    pub codec: OlcCodec,
}

/// Build the API routes.
///
/// Middleware and the documentation UI are added by the binary.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/encode",
            get(handlers::get_encode).post(handlers::post_encode),
        )
        .route("/decode", get(handlers::get_decode))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{
    DecodeQuery, DecodeResponse, EncodeGeometryRequest, EncodeGeometryResponse, EncodeQuery,
    EncodeResponse, ErrorResponse, HealthResponse,
};
