//! Decoding full Plus Codes back to the area they cover.
//!
//! Decoding mirrors the encoder's integer arithmetic, so the area a code
//! decodes to is the cell the encoder assigned it to.

use crate::constants::{
    CODE_LEN_MAX, ENCODING_BASE, GRID_COLS, GRID_ROWS, GRID_SIZE, INITIAL_RESOLUTION, LAT_MAX,
    LON_MAX, OLC_DEG_MULTIPLIER, PADDING, PAIR_CODE_LEN, SEPARATOR,
};
use crate::error::{OlcError, Result};
use crate::validate::{digit_value, is_full, validate};

/// The rectangle covered by a decoded code, in fixed-point degrees.
///
/// South and west edges are inclusive, north and east exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeArea {
    /// Southern edge.
    pub south: i32,
    /// Western edge.
    pub west: i32,
    /// Northern edge.
    pub north: i32,
    /// Eastern edge.
    pub east: i32,
    /// Number of significant characters that were decoded.
    pub code_length: usize,
}

impl CodeArea {
    /// Center of the area as `(lat, lon)`, clamped to 90° and 180°.
    pub fn center(&self) -> (i32, i32) {
        let lat = i64::from(self.south) + (i64::from(self.north) - i64::from(self.south)) / 2;
        let lon = i64::from(self.west) + (i64::from(self.east) - i64::from(self.west)) / 2;
        (
            lat.min(i64::from(LAT_MAX)) as i32,
            lon.min(i64::from(LON_MAX)) as i32,
        )
    }

    /// Center of the area as `(lat, lon)` in decimal degrees.
    pub fn center_degrees(&self) -> (f64, f64) {
        let (lat, lon) = self.center();
        (
            lat as f64 / OLC_DEG_MULTIPLIER as f64,
            lon as f64 / OLC_DEG_MULTIPLIER as f64,
        )
    }

    /// Height of the area in fixed-point units.
    pub fn lat_span(&self) -> i32 {
        self.north - self.south
    }

    /// Width of the area in fixed-point units.
    pub fn lon_span(&self) -> i32 {
        self.east - self.west
    }

    /// Returns `true` if the fixed-point coordinate lies inside the area.
    pub fn contains(&self, lat: i32, lon: i32) -> bool {
        (self.south..self.north).contains(&lat) && (self.west..self.east).contains(&lon)
    }
}

/// Decode a full Plus Code.
///
/// Characters past the fifteenth are ignored, as are grid characters past
/// the fixed-point precision limit.
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] if the code is malformed
/// - [`OlcError::NotFullCode`] if it is a short code or lies outside the globe
///
/// # Examples
///
/// ```
/// use olc::decode;
///
/// let area = decode("7FG49Q00+").unwrap();
/// assert_eq!(area.code_length, 6);
/// assert_eq!((area.south, area.west), (203_500_000, 27_500_000));
/// assert_eq!((area.north, area.east), (204_000_000, 28_000_000));
/// assert!(area.contains(203_750_000, 27_750_000));
/// ```
pub fn decode(code: &str) -> Result<CodeArea> {
    validate(code)?;
    if !is_full(code) {
        return Err(OlcError::NotFullCode {
            code: code.to_string(),
        });
    }

    let digits: Vec<i64> = code
        .bytes()
        .filter(|&b| b != SEPARATOR && b != PADDING)
        .take(CODE_LEN_MAX)
        .filter_map(digit_value)
        .map(i64::from)
        .collect();
    let pair_len = digits.len().min(PAIR_CODE_LEN);

    let mut lat = 0i64;
    let mut lon = 0i64;
    let mut lat_span = 0i64;
    let mut lon_span = 0i64;
    let mut resolution = i64::from(INITIAL_RESOLUTION);
    let mut decoded = 0;

    for pair in digits[..pair_len].chunks(2) {
        lat += pair[0] * resolution;
        if let Some(&value) = pair.get(1) {
            lon += value * resolution;
        }
        lat_span = resolution;
        lon_span = resolution;
        resolution /= i64::from(ENCODING_BASE);
        decoded += pair.len();
    }

    let mut lat_grid_size = i64::from(GRID_SIZE);
    let mut lon_grid_size = i64::from(GRID_SIZE);
    for &value in &digits[pair_len..] {
        let lat_div = lat_grid_size / i64::from(GRID_ROWS);
        let lon_div = lon_grid_size / i64::from(GRID_COLS);
        if lat_div == 0 || lon_div == 0 {
            tracing::trace!(code, decoded, "Ignoring grid characters past precision limit");
            break;
        }

        let row = value / i64::from(GRID_COLS);
        let col = value % i64::from(GRID_COLS);
        lat += row * lat_div;
        lon += col * lon_div;
        lat_grid_size = lat_div;
        lon_grid_size = lon_div;
        lat_span = lat_div;
        lon_span = lon_div;
        decoded += 1;
    }

    let south = lat - i64::from(LAT_MAX);
    let west = lon - i64::from(LON_MAX);
    Ok(CodeArea {
        south: south as i32,
        west: west as i32,
        north: (south + lat_span) as i32,
        east: (west + lon_span) as i32,
        code_length: decoded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;

    #[test]
    fn test_decode_padded() {
        let area = decode("CFX30000+").unwrap();
        assert_eq!(area.code_length, 4);
        assert_eq!(area.south, 890_000_000);
        assert_eq!(area.north, 900_000_000);
        assert_eq!(area.west, 10_000_000);
        assert_eq!(area.east, 20_000_000);
        assert_eq!(area.lat_span(), OLC_DEG_MULTIPLIER);
    }

    #[test]
    fn test_decode_pair_code() {
        let area = decode("7FG49QCJ+2V").unwrap();
        assert_eq!(area.code_length, 10);
        assert_eq!(area.south, 203_700_000);
        assert_eq!(area.west, 27_821_250);
        assert_eq!(area.lat_span(), 1_250);
        assert_eq!(area.lon_span(), 1_250);
        assert!(area.contains(203_700_625, 27_821_875));
    }

    #[test]
    fn test_decode_grid_code() {
        let area = decode("7FG49QCJ+2VXGJ").unwrap();
        assert_eq!(area.code_length, 13);
        assert_eq!(area.lat_span(), 10);
        assert_eq!(area.lon_span(), 19);
        assert!(area.contains(203_701_135, 27_822_354));
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(decode("7fg49qcj+2v").unwrap(), decode("7FG49QCJ+2V").unwrap());
    }

    #[test]
    fn test_decode_ignores_extra_digits() {
        let long = decode("7FG49QCJ+2VXGJHXXXX").unwrap();
        assert_eq!(long, decode("7FG49QCJ+2VXGJH").unwrap());
        assert_eq!(long.code_length, 14);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode("7FG49QCJ2V"),
            Err(OlcError::InvalidCode { .. })
        ));
        assert!(matches!(
            decode("9QCJ+2V"),
            Err(OlcError::NotFullCode { .. })
        ));
        assert!(matches!(
            decode("7FG49QCJ+200"),
            Err(OlcError::InvalidCode { .. })
        ));
        assert!(matches!(
            decode("F2000000+"),
            Err(OlcError::NotFullCode { .. })
        ));
    }

    #[test]
    fn test_center() {
        let area = decode("7FG49Q00+").unwrap();
        assert_eq!(area.center(), (203_750_000, 27_750_000));
        assert_eq!(area.center_degrees(), (20.375, 2.775));
    }

    #[test]
    fn test_encoded_point_inside_decoded_area() {
        let points = [
            (203_750_000, 27_750_000),
            (-412_730_625, 1_747_859_375),
            (515_007_000, -1_246_000),
            (-338_568_000, 1_512_153_000),
            (0, 0),
            (-LAT_MAX, -LON_MAX),
        ];
        for (lat, lon) in points {
            for length in [2, 4, 6, 8, 10, 11, 12, 13] {
                let code = encode(lat, lon, length);
                let area = decode(&code).unwrap();
                assert!(
                    area.contains(lat, lon),
                    "{} ({}, {}) not in {:?}",
                    code,
                    lat,
                    lon,
                    area
                );
            }
        }
    }

    #[test]
    fn test_reencode_center() {
        for code in ["7FG49QCJ+2V", "8FVC2222+22", "4VCPPQGP+Q9", "6FH32222+222"] {
            let area = decode(code).unwrap();
            let (lat, lon) = area.center();
            assert_eq!(encode(lat, lon, area.code_length), code);
        }
    }
}
