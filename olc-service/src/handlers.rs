//! HTTP request handlers for the Plus Code service.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use geojson::Geometry;
use olc::{OlcError, OLC_DEG_MULTIPLIER};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::AppState;

/// Query parameters for the encode endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EncodeQuery {
    /// Latitude in decimal degrees. Clamped to ±90.
    pub lat: f64,
    /// Longitude in decimal degrees. Wrapped into [-180, 180).
    pub lon: f64,
    /// Significant characters (2, 4, 6, 8 or 10-15). Defaults to the
    /// service's configured length.
    pub length: Option<usize>,
}

/// Successful encode response.
#[derive(Debug, Serialize, ToSchema)]
pub struct EncodeResponse {
    /// The Plus Code.
    pub code: String,
    /// Latitude queried.
    pub lat: f64,
    /// Longitude queried.
    pub lon: f64,
    /// Code length used.
    pub length: usize,
    /// Google Maps link for the code.
    pub url: String,
}

/// Query parameters for the decode endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DecodeQuery {
    /// A full Plus Code. An unescaped `+` arrives as a space and is accepted.
    pub code: String,
}

/// Area covered by a decoded code, in decimal degrees.
#[derive(Debug, Serialize, ToSchema)]
pub struct DecodeResponse {
    /// The code, upper-cased.
    pub code: String,
    /// Southern edge (inclusive).
    pub south: f64,
    /// Western edge (inclusive).
    pub west: f64,
    /// Northern edge (exclusive).
    pub north: f64,
    /// Eastern edge (exclusive).
    pub east: f64,
    /// Latitude of the center.
    pub center_lat: f64,
    /// Longitude of the center.
    pub center_lon: f64,
    /// Number of significant characters decoded.
    pub code_length: usize,
}

/// Request body for encoding every position of a GeoJSON geometry.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EncodeGeometryRequest {
    /// GeoJSON geometry with `[lon, lat]` positions.
    #[schema(value_type = Object)]
    pub geometry: Geometry,
    /// Significant characters. Defaults to the service's configured length.
    pub length: Option<usize>,
}

/// Codes for every position of a geometry, in document order.
#[derive(Debug, Serialize, ToSchema)]
pub struct EncodeGeometryResponse {
    /// One code per position.
    pub codes: Vec<String>,
    /// Code length used.
    pub length: usize,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Default code length.
    pub code_length: usize,
}

/// Resolve a requested length against the configured default.
fn resolve_length(state: &AppState, length: Option<usize>) -> Result<usize, OlcError> {
    match length {
        Some(length) => {
            olc::validate_code_length(length)?;
            Ok(length)
        }
        None => Ok(state.codec.code_length()),
    }
}

/// Encode a coordinate.
///
/// # Returns
///
/// - `200 OK` with the code
/// - `400 Bad Request` for NaN/infinite coordinates or a disallowed length
#[utoipa::path(
    get,
    path = "/encode",
    params(EncodeQuery),
    responses(
        (status = 200, description = "Plus Code for the coordinate", body = EncodeResponse),
        (status = 400, description = "Invalid coordinate or code length", body = ErrorResponse)
    ),
    tag = "plus-codes"
)]
#[axum::debug_handler]
pub async fn get_encode(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EncodeQuery>,
) -> impl IntoResponse {
    tracing::debug!(
        lat = query.lat,
        lon = query.lon,
        length = ?query.length,
        "Encode query"
    );

    let result = resolve_length(&state, query.length).and_then(|length| {
        olc::encode_degrees(query.lat, query.lon, length).map(|code| (code, length))
    });

    match result {
        Ok((code, length)) => {
            tracing::info!(lat = query.lat, lon = query.lon, code = %code, "Encoded");
            (
                StatusCode::OK,
                Json(EncodeResponse {
                    url: olc::maps_url(&code),
                    code,
                    lat: query.lat,
                    lon: query.lon,
                    length,
                }),
            )
                .into_response()
        }
        Err(e) => error_response("encode", e),
    }
}

/// Decode a full code into the area it covers.
///
/// # Returns
///
/// - `200 OK` with the area
/// - `400 Bad Request` for malformed or short codes
#[utoipa::path(
    get,
    path = "/decode",
    params(DecodeQuery),
    responses(
        (status = 200, description = "Area covered by the code", body = DecodeResponse),
        (status = 400, description = "Invalid or short code", body = ErrorResponse)
    ),
    tag = "plus-codes"
)]
#[axum::debug_handler]
pub async fn get_decode(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DecodeQuery>,
) -> impl IntoResponse {
    let code = query.code.trim_start().replace(' ', "+");
    tracing::debug!(code = %code, "Decode query");

    match state.codec.decode(&code) {
        Ok(area) => {
            let degrees = |v: i32| v as f64 / OLC_DEG_MULTIPLIER as f64;
            let (center_lat, center_lon) = area.center_degrees();
            (
                StatusCode::OK,
                Json(DecodeResponse {
                    code: code.to_ascii_uppercase(),
                    south: degrees(area.south),
                    west: degrees(area.west),
                    north: degrees(area.north),
                    east: degrees(area.east),
                    center_lat,
                    center_lon,
                    code_length: area.code_length,
                }),
            )
                .into_response()
        }
        Err(e) => error_response("decode", e),
    }
}

/// Encode every position of a GeoJSON geometry.
///
/// # Returns
///
/// - `200 OK` with one code per position
/// - `400 Bad Request` for malformed positions or a disallowed length
#[utoipa::path(
    post,
    path = "/encode",
    request_body = EncodeGeometryRequest,
    responses(
        (status = 200, description = "Codes in document order", body = EncodeGeometryResponse),
        (status = 400, description = "Invalid geometry or code length", body = ErrorResponse)
    ),
    tag = "plus-codes"
)]
#[axum::debug_handler]
pub async fn post_encode(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EncodeGeometryRequest>,
) -> impl IntoResponse {
    let result = resolve_length(&state, request.length).and_then(|length| {
        olc::geojson::encode_geometry(&request.geometry, length).map(|codes| (codes, length))
    });

    match result {
        Ok((codes, length)) => {
            tracing::info!(positions = codes.len(), length, "Encoded geometry");
            (
                StatusCode::OK,
                Json(EncodeGeometryResponse { codes, length }),
            )
                .into_response()
        }
        Err(e) => error_response("encode geometry", e),
    }
}

/// Map a library error to an HTTP response.
fn error_response(operation: &'static str, e: OlcError) -> axum::response::Response {
    let status = match e {
        OlcError::BufferTooSmall { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };

    tracing::warn!(operation, error = %e, "Request failed");

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "system"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        code_length: state.codec.code_length(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use olc::OlcCodec;

    #[test]
    fn test_encode_query_deserialize() {
        let json = r#"{"lat": 20.375, "lon": 2.775}"#;
        let query: EncodeQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.lat, 20.375);
        assert_eq!(query.lon, 2.775);
        assert_eq!(query.length, None);
    }

    #[test]
    fn test_geometry_request_deserialize() {
        let json = r#"{"geometry": {"type": "Point", "coordinates": [2.775, 20.375]}, "length": 6}"#;
        let request: EncodeGeometryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.length, Some(6));
        assert!(matches!(request.geometry.value, geojson::Value::Point(_)));
    }

    #[test]
    fn test_resolve_length() {
        let state = AppState {
            codec: OlcCodec::builder().code_length(12).build().unwrap(),
        };
        assert_eq!(resolve_length(&state, None).unwrap(), 12);
        assert_eq!(resolve_length(&state, Some(4)).unwrap(), 4);
        assert_eq!(
            resolve_length(&state, Some(9)),
            Err(OlcError::InvalidLength { length: 9 })
        );
    }

    #[test]
    fn test_encode_response_serialize() {
        let response = EncodeResponse {
            code: "7FG49Q00+".to_string(),
            lat: 20.375,
            lon: 2.775,
            length: 6,
            url: olc::maps_url("7FG49Q00+"),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("7FG49Q00+"));
        assert!(json.contains("7FG49Q00%2B"));
    }
}
