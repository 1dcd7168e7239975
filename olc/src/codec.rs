//! Plus Code encoding from fixed-point coordinates.
//!
//! The free functions here are the core encoder: [`encode_into`] writes into
//! a caller-owned buffer and never allocates, [`encode`] returns a `String`.
//! [`OlcCodec`] wraps them with a configured default code length.
//!
//! # Configuration
//!
//! ```ignore
//! use olc::OlcCodec;
//!
//! // OLC_CODE_LENGTH=11
//! let codec = OlcCodec::builder_from_env().build()?;
//! let code = codec.encode(203_701_125, 27_822_343);
//! ```

use crate::constants::{CODE_LEN_MAX, LAT_MAX, OLC_DEG_MULTIPLIER, PAIR_CODE_LEN};
use crate::coord::{to_working, FixedPointCoordinate};
use crate::decode::{decode, CodeArea};
use crate::error::{OlcError, Result};
use crate::grid::{encode_grid, max_grid_digits};
use crate::pair::{encode_pairs, pair_section_len};

/// Code length used when none is configured: the standard ~14m × 14m cell.
pub const DEFAULT_CODE_LENGTH: usize = PAIR_CODE_LEN;

/// Number of characters [`encode_into`] produces for `length`, separator and
/// padding included, terminator excluded.
///
/// The buffer passed to [`encode_into`] must be at least one byte longer.
///
/// # Examples
///
/// ```
/// use olc::encoded_len;
///
/// assert_eq!(encoded_len(4), 9); // "CFX30000+"
/// assert_eq!(encoded_len(10), 11); // "7FG49QCJ+2V"
/// assert_eq!(encoded_len(15), 15); // grid stops after four characters
/// ```
pub fn encoded_len(length: usize) -> usize {
    let length = length.min(CODE_LEN_MAX);
    pair_section_len(length) + grid_digits(length)
}

fn grid_digits(length: usize) -> usize {
    length.saturating_sub(PAIR_CODE_LEN).min(max_grid_digits())
}

/// Encode a fixed-point coordinate into a caller-owned buffer.
///
/// Latitude is clamped to ±90° and longitude wrapped into [-180°, 180°).
/// `length` is the number of significant characters, clamped to 15. The code
/// is followed by a NUL byte.
///
/// Returns the number of characters written, excluding the terminator. If
/// `buf` is shorter than [`encoded_len`]` + 1`, writes an empty string and
/// returns 0.
///
/// # Examples
///
/// ```
/// use olc::encode_into;
///
/// let mut buf = [0u8; 16];
/// let n = encode_into(203_750_000, 27_750_000, 6, &mut buf);
/// assert_eq!(&buf[..n], b"7FG49Q00+");
/// assert_eq!(buf[n], 0);
///
/// let mut small = [0u8; 4];
/// assert_eq!(encode_into(203_750_000, 27_750_000, 6, &mut small), 0);
/// ```
pub fn encode_into(lat: i32, lon: i32, length: usize, buf: &mut [u8]) -> usize {
    let length = length.min(CODE_LEN_MAX);
    if encoded_len(length) >= buf.len() {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        return 0;
    }

    let (lat, lon) = to_working(lat, lon, length);

    let mut pos = encode_pairs(lat, lon, length.min(PAIR_CODE_LEN), buf);
    if length > PAIR_CODE_LEN {
        pos += encode_grid(lat, lon, grid_digits(length), &mut buf[pos..]);
    }

    buf[pos] = 0;
    pos
}

/// Like [`encode_into`], but reports a short buffer as an error.
///
/// # Errors
///
/// Returns [`OlcError::BufferTooSmall`] if `buf` cannot hold the code and its
/// terminator. Nothing is written in that case.
pub fn try_encode_into(lat: i32, lon: i32, length: usize, buf: &mut [u8]) -> Result<usize> {
    let needed = encoded_len(length) + 1;
    if buf.len() < needed {
        return Err(OlcError::BufferTooSmall {
            needed,
            capacity: buf.len(),
        });
    }
    Ok(encode_into(lat, lon, length, buf))
}

/// Encode a fixed-point coordinate into a `String`.
///
/// # Examples
///
/// ```
/// use olc::encode;
///
/// assert_eq!(encode(203_700_625, 27_821_875, 10), "7FG49QCJ+2V");
/// assert_eq!(encode(900_000_000, 10_000_000, 4), "CFX30000+");
/// ```
pub fn encode(lat: i32, lon: i32, length: usize) -> String {
    let mut buf = [0u8; CODE_LEN_MAX + 2];
    let n = encode_into(lat, lon, length, &mut buf);
    buf[..n].iter().map(|&b| b as char).collect()
}

/// Encode a coordinate given in decimal degrees.
///
/// Latitude is clamped and longitude wrapped before conversion to fixed
/// point, so any finite input is accepted.
///
/// # Errors
///
/// Returns [`OlcError::InvalidCoordinate`] if either value is NaN or infinite.
///
/// # Examples
///
/// ```
/// use olc::encode_degrees;
///
/// assert_eq!(encode_degrees(20.375, 2.775, 6).unwrap(), "7FG49Q00+");
/// assert_eq!(encode_degrees(1.0, 541.0, 4).unwrap(), "62H30000+");
/// assert!(encode_degrees(f64::NAN, 0.0, 10).is_err());
/// ```
pub fn encode_degrees(lat: f64, lon: f64, length: usize) -> Result<String> {
    if !lat.is_finite() {
        return Err(OlcError::InvalidCoordinate { value: lat });
    }
    if !lon.is_finite() {
        return Err(OlcError::InvalidCoordinate { value: lon });
    }

    let max_lat = LAT_MAX as f64 / OLC_DEG_MULTIPLIER as f64;
    let lat = FixedPointCoordinate::from_degrees(lat.clamp(-max_lat, max_lat))?;
    let lon = FixedPointCoordinate::from_degrees((lon + 180.0).rem_euclid(360.0) - 180.0)?;
    Ok(encode(lat.raw(), lon.raw(), length))
}

/// Check that `length` is one the Open Location Code standard allows:
/// 2, 4, 6, 8, or anything from 10 to 15.
pub fn validate_code_length(length: usize) -> Result<()> {
    if length < 2 || length > CODE_LEN_MAX || (length < PAIR_CODE_LEN && length % 2 == 1) {
        return Err(OlcError::InvalidLength { length });
    }
    Ok(())
}

/// Plus Code encoder with a configured code length.
///
/// # Example
///
/// ```
/// use olc::OlcCodec;
///
/// let codec = OlcCodec::builder().code_length(13).build().unwrap();
/// assert_eq!(codec.encode(203_701_135, 27_822_354), "7FG49QCJ+2VXGJ");
///
/// let area = codec.decode("7FG49QCJ+2VXGJ").unwrap();
/// assert!(area.contains(203_701_135, 27_822_354));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OlcCodec {
    code_length: usize,
}

impl Default for OlcCodec {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl OlcCodec {
    /// Create a codec producing 10-character codes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for more configuration options.
    pub fn builder() -> OlcCodecBuilder {
        OlcCodecBuilder::new()
    }

    /// Create a builder configured from environment variables.
    ///
    /// See [`OlcCodecBuilder::from_env`].
    pub fn builder_from_env() -> OlcCodecBuilder {
        OlcCodecBuilder::from_env()
    }

    /// Returns the configured code length.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Encode a fixed-point coordinate at the configured length.
    pub fn encode(&self, lat: i32, lon: i32) -> String {
        encode(lat, lon, self.code_length)
    }

    /// Encode typed coordinates at the configured length.
    pub fn encode_coordinate(
        &self,
        lat: FixedPointCoordinate,
        lon: FixedPointCoordinate,
    ) -> String {
        encode(lat.raw(), lon.raw(), self.code_length)
    }

    /// Encode into a caller-owned buffer at the configured length.
    ///
    /// See [`encode_into`] for the buffer contract.
    pub fn encode_into(&self, lat: i32, lon: i32, buf: &mut [u8]) -> usize {
        encode_into(lat, lon, self.code_length, buf)
    }

    /// Encode decimal degrees at the configured length.
    ///
    /// # Errors
    ///
    /// Returns [`OlcError::InvalidCoordinate`] for NaN or infinite input.
    pub fn encode_degrees(&self, lat: f64, lon: f64) -> Result<String> {
        encode_degrees(lat, lon, self.code_length)
    }

    /// Decode a full code into the area it covers.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn decode(&self, code: &str) -> Result<CodeArea> {
        decode(code)
    }
}

/// Builder for [`OlcCodec`].
#[derive(Debug, Clone)]
pub struct OlcCodecBuilder {
    code_length: usize,
}

impl Default for OlcCodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OlcCodecBuilder {
    /// Create a builder with the default code length (10).
    pub fn new() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Create a builder configured from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `OLC_CODE_LENGTH` | Significant characters per code | 10 |
    ///
    /// An unparsable value is logged and ignored. A parsable but invalid
    /// length is rejected by [`Self::build`].
    pub fn from_env() -> Self {
        let mut builder = Self::new();

        if let Ok(value) = std::env::var("OLC_CODE_LENGTH") {
            match value.trim().parse::<usize>() {
                Ok(length) => {
                    tracing::debug!(length, "Code length from OLC_CODE_LENGTH");
                    builder.code_length = length;
                }
                Err(_) => {
                    tracing::warn!(
                        value = %value,
                        default = DEFAULT_CODE_LENGTH,
                        "Ignoring unparsable OLC_CODE_LENGTH"
                    );
                }
            }
        }

        builder
    }

    /// Set the number of significant characters per code.
    pub fn code_length(mut self, length: usize) -> Self {
        self.code_length = length;
        self
    }

    /// Build the [`OlcCodec`].
    ///
    /// # Errors
    ///
    /// Returns [`OlcError::InvalidLength`] unless the code length is 2, 4, 6,
    /// 8 or between 10 and 15.
    pub fn build(self) -> Result<OlcCodec> {
        validate_code_length(self.code_length)?;
        Ok(OlcCodec {
            code_length: self.code_length,
        })
    }
}
