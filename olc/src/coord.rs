//! Fixed-point coordinates and normalization.
//!
//! Coordinates are signed integers in units of 1e-7 degrees. Before encoding,
//! latitude is clamped to the poles and longitude is wrapped around the
//! antimeridian. Neither step fails: every `i32` is a usable input.

use crate::constants::{
    CODE_LEN_MAX, ENCODING_BASE, GRID_ROWS, GRID_SIZE, LAT_MAX, LON_MAX, OLC_DEG_MULTIPLIER,
    PAIR_CODE_LEN,
};
use crate::error::{OlcError, Result};

/// A latitude or longitude in fixed-point degrees (degrees × 10^7).
///
/// # Example
///
/// ```
/// use olc::FixedPointCoordinate;
///
/// let lat = FixedPointCoordinate::from_degrees(20.375).unwrap();
/// assert_eq!(lat.raw(), 203_750_000);
/// assert_eq!(lat.to_degrees(), 20.375);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointCoordinate(i32);

impl FixedPointCoordinate {
    /// Wrap a raw fixed-point value.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Convert decimal degrees, rounding to the nearest 1e-7°.
    ///
    /// # Errors
    ///
    /// Returns [`OlcError::InvalidCoordinate`] if `degrees` is NaN, infinite,
    /// or too large for an `i32` once scaled (beyond about ±214.7°).
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        let scaled = (degrees * OLC_DEG_MULTIPLIER as f64).round();
        if !scaled.is_finite() || scaled < i32::MIN as f64 || scaled > i32::MAX as f64 {
            return Err(OlcError::InvalidCoordinate { value: degrees });
        }
        Ok(Self(scaled as i32))
    }

    /// Returns the raw fixed-point value.
    pub const fn raw(&self) -> i32 {
        self.0
    }

    /// Returns the value in decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        self.0 as f64 / OLC_DEG_MULTIPLIER as f64
    }
}

impl From<i32> for FixedPointCoordinate {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<FixedPointCoordinate> for i32 {
    fn from(coord: FixedPointCoordinate) -> Self {
        coord.0
    }
}

/// Size of the cell a code of `length` significant characters addresses.
///
/// Pair codes shrink by 20 every two characters (20°, 1°, 0.05°, ...); grid
/// characters shrink the latitude side by 5 each. The result is in
/// fixed-point units and reaches zero at the longest lengths, where 1e-7°
/// can no longer express the cell.
///
/// # Examples
///
/// ```
/// use olc::coord::compute_precision_for_length;
///
/// assert_eq!(compute_precision_for_length(4), 10_000_000); // 1°
/// assert_eq!(compute_precision_for_length(10), 1_250);
/// assert_eq!(compute_precision_for_length(11), 250);
/// ```
pub fn compute_precision_for_length(length: usize) -> u32 {
    let length = length.min(CODE_LEN_MAX);
    if length <= PAIR_CODE_LEN {
        // Truncating division: lengths 2 and 3 share 20°, 4 and 5 share 1°, ...
        let exponent = (length as i32) / -2 + 2;
        if exponent >= 0 {
            ENCODING_BASE.pow(exponent as u32) * OLC_DEG_MULTIPLIER as u32
        } else {
            OLC_DEG_MULTIPLIER as u32 / ENCODING_BASE.pow(exponent.unsigned_abs())
        }
    } else {
        GRID_SIZE / GRID_ROWS.pow((length - PAIR_CODE_LEN) as u32)
    }
}

/// Clamp a latitude to the poles.
///
/// A latitude sitting exactly on the north pole is moved half a cell south
/// so that it falls inside a cell of the requested length. The move is at
/// least one unit, even where the cell size has truncated to zero.
///
/// # Examples
///
/// ```
/// use olc::coord::adjust_latitude;
///
/// assert_eq!(adjust_latitude(450_000_000, 10), 450_000_000);
/// assert_eq!(adjust_latitude(920_000_000, 4), 895_000_000);
/// assert_eq!(adjust_latitude(-950_000_000, 4), -900_000_000);
/// ```
pub fn adjust_latitude(lat: i32, code_length: usize) -> i32 {
    let lat = lat.clamp(-LAT_MAX, LAT_MAX);
    if lat < LAT_MAX {
        return lat;
    }

    let half = (i64::from(compute_precision_for_length(code_length)) / 2).max(1);
    (i64::from(lat) - half).max(-i64::from(LAT_MAX)) as i32
}

/// Wrap a longitude into `[-180°, 180°)`.
///
/// # Examples
///
/// ```
/// use olc::coord::normalize_longitude;
///
/// assert_eq!(normalize_longitude(1_810_000_000), -1_790_000_000);
/// assert_eq!(normalize_longitude(1_800_000_000), -1_800_000_000);
/// assert_eq!(normalize_longitude(-1_800_000_000), -1_800_000_000);
/// ```
pub fn normalize_longitude(lon: i32) -> i32 {
    let span = 2 * i64::from(LON_MAX);
    ((i64::from(lon) + i64::from(LON_MAX)).rem_euclid(span) - i64::from(LON_MAX)) as i32
}

/// Normalize and shift a coordinate pair into the non-negative working range
/// used by the encoders: latitude in `[0, 180°)`, longitude in `[0, 360°)`.
pub(crate) fn to_working(lat: i32, lon: i32, code_length: usize) -> (u32, u32) {
    let lat = i64::from(adjust_latitude(lat, code_length)) + i64::from(LAT_MAX);
    let lon = i64::from(normalize_longitude(lon)) + i64::from(LON_MAX);
    (lat as u32, lon as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEG: i32 = OLC_DEG_MULTIPLIER;

    #[test]
    fn test_from_degrees() {
        assert_eq!(FixedPointCoordinate::from_degrees(0.0).unwrap().raw(), 0);
        assert_eq!(
            FixedPointCoordinate::from_degrees(-179.5).unwrap().raw(),
            -1_795_000_000
        );
        // Rounds to the nearest unit
        assert_eq!(
            FixedPointCoordinate::from_degrees(2.78223535156).unwrap().raw(),
            27_822_354
        );
    }

    #[test]
    fn test_from_degrees_invalid() {
        assert!(FixedPointCoordinate::from_degrees(f64::NAN).is_err());
        assert!(FixedPointCoordinate::from_degrees(f64::INFINITY).is_err());
        assert!(matches!(
            FixedPointCoordinate::from_degrees(400.0),
            Err(OlcError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_precision_pair_lengths() {
        assert_eq!(compute_precision_for_length(2), 20 * DEG as u32);
        assert_eq!(compute_precision_for_length(3), 20 * DEG as u32);
        assert_eq!(compute_precision_for_length(4), DEG as u32);
        assert_eq!(compute_precision_for_length(6), 500_000);
        assert_eq!(compute_precision_for_length(8), 25_000);
        assert_eq!(compute_precision_for_length(10), 1_250);
    }

    #[test]
    fn test_precision_grid_lengths() {
        assert_eq!(compute_precision_for_length(11), 250);
        assert_eq!(compute_precision_for_length(12), 50);
        assert_eq!(compute_precision_for_length(13), 10);
        assert_eq!(compute_precision_for_length(14), 2);
        assert_eq!(compute_precision_for_length(15), 0);
        // Clamped to the maximum length
        assert_eq!(compute_precision_for_length(40), 0);
    }

    #[test]
    fn test_adjust_latitude_in_range() {
        assert_eq!(adjust_latitude(0, 10), 0);
        assert_eq!(adjust_latitude(-LAT_MAX, 10), -LAT_MAX);
        assert_eq!(adjust_latitude(LAT_MAX - 1, 10), LAT_MAX - 1);
    }

    #[test]
    fn test_adjust_latitude_pole() {
        // 92° clamps to 90° and then moves half a cell south
        assert_eq!(adjust_latitude(92 * DEG, 4), adjust_latitude(90 * DEG, 4));
        assert_eq!(adjust_latitude(90 * DEG, 10), LAT_MAX - 625);
        assert_eq!(adjust_latitude(90 * DEG, 15), LAT_MAX - 1);
        assert_eq!(adjust_latitude(i32::MAX, 8), LAT_MAX - 12_500);
    }

    #[test]
    fn test_adjust_latitude_short_lengths_stay_in_range() {
        // A 400° cell would push the pole below the south pole
        assert_eq!(adjust_latitude(LAT_MAX, 0), -LAT_MAX);
        assert_eq!(adjust_latitude(LAT_MAX, 1), -LAT_MAX);
        assert_eq!(adjust_latitude(LAT_MAX, 2), 80 * DEG);
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(0), 0);
        assert_eq!(normalize_longitude(179 * DEG), 179 * DEG);
        assert_eq!(normalize_longitude(181 * DEG), -179 * DEG);
        assert_eq!(normalize_longitude(-181 * DEG), 179 * DEG);
        assert_eq!(normalize_longitude(LON_MAX), -LON_MAX);
    }

    #[test]
    fn test_normalize_longitude_multiples() {
        let base = 17 * DEG + 123;
        for turns in -5i64..=5 {
            let lon = i64::from(base) + turns * 360 * i64::from(DEG);
            if let Ok(lon) = i32::try_from(lon) {
                assert_eq!(normalize_longitude(lon), base, "turns = {}", turns);
            }
        }
        assert!(normalize_longitude(i32::MAX) >= -LON_MAX);
        assert!(normalize_longitude(i32::MIN) < LON_MAX);
    }

    #[test]
    fn test_to_working_is_non_negative() {
        assert_eq!(to_working(-LAT_MAX, -LON_MAX, 10), (0, 0));
        let (lat, lon) = to_working(i32::MAX, i32::MAX, 10);
        assert!(lat < 2 * LAT_MAX as u32);
        assert!(lon < 2 * LON_MAX as u32);
    }
}
