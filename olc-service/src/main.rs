//! OLC Service - HTTP microservice for Plus Code encoding.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `OLC_CODE_LENGTH` | Default significant characters per code | 10 |
//! | `OLC_PORT` | HTTP server port | 8080 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /encode?lat=X&lon=Y[&length=N]` - Encode a coordinate
//! - `POST /encode` - Encode every position of a GeoJSON geometry
//! - `GET /decode?code=C` - Decode a full code
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use olc::OlcCodec;
use olc_service::{handlers, router, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the OLC service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OLC Plus Code Service",
        version = "0.1.0",
        description = "REST API for encoding coordinates as Open Location Codes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::get_encode,
        handlers::post_encode,
        handlers::get_decode,
        handlers::health_check,
    ),
    components(
        schemas(
            handlers::EncodeResponse,
            handlers::EncodeGeometryRequest,
            handlers::EncodeGeometryResponse,
            handlers::DecodeResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
        )
    ),
    tags(
        (name = "plus-codes", description = "Encode and decode endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "olc_service=info,olc=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load port from environment (service-specific config)
    let port: u16 = std::env::var("OLC_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    // The library handles OLC_CODE_LENGTH
    let codec = match OlcCodec::builder_from_env().build() {
        Ok(codec) => codec,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid OLC_CODE_LENGTH, using default");
            OlcCodec::new()
        }
    };

    tracing::info!(
        code_length = codec.code_length(),
        port = port,
        "Starting OLC service"
    );

    let state = Arc::new(AppState { codec });

    let app = router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
