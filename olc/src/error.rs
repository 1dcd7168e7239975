//! Error types for the OLC library.

use thiserror::Error;

/// Errors that can occur when working with Open Location Codes.
///
/// Encoding from fixed-point coordinates never fails: out-of-range input is
/// clamped or wrapped. These errors come from parsing, decoding, the checked
/// buffer API and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OlcError {
    /// The string is not a syntactically valid Open Location Code.
    #[error("Invalid Open Location Code {code:?}: {reason}")]
    InvalidCode { code: String, reason: &'static str },

    /// The code is valid but short, so it cannot be decoded on its own.
    #[error("Not a full Open Location Code: {code}")]
    NotFullCode { code: String },

    /// The destination buffer cannot hold the code and its terminator.
    #[error("Buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    /// Requested code length is not one the standard allows.
    #[error("Invalid code length: {length} (expected 2, 4, 6, 8 or 10 to 15)")]
    InvalidLength { length: usize },

    /// A decimal-degree value is NaN, infinite or does not fit fixed point.
    #[error("Invalid coordinate: {value}")]
    InvalidCoordinate { value: f64 },

    /// A GeoJSON position could not be read as `[lon, lat, ...]`.
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },
}

/// Result type alias using [`OlcError`].
pub type Result<T> = std::result::Result<T, OlcError>;
