//! Plus Codes for GeoJSON geometries.
//!
//! This module encodes every position in a GeoJSON geometry and tags
//! features with their codes. Enable the `geojson` feature to use it.
//!
//! # Example
//!
//! ```ignore
//! use olc::geojson::encode_geometry;
//! use geojson::Geometry;
//!
//! let geometry: Geometry = r#"{"type": "Point", "coordinates": [2.775, 20.375]}"#
//!     .parse()
//!     .unwrap();
//!
//! let codes = encode_geometry(&geometry, 6)?;
//! assert_eq!(codes, ["7FG49Q00+"]);
//! ```

use geojson::{Feature, GeoJson, Geometry, Value as GeoJsonValue};

use crate::codec::encode_degrees;
use crate::error::{OlcError, Result};

/// Property set on a feature whose geometry is a single point.
pub const PLUS_CODE_PROPERTY: &str = "plus_code";

/// Property set on a feature with any other geometry, one code per position.
pub const PLUS_CODES_PROPERTY: &str = "plus_codes";

/// Encode a single GeoJSON position (`[lon, lat]` or `[lon, lat, alt]`).
///
/// # Errors
///
/// Returns an error if the position has fewer than 2 elements or holds a
/// non-finite value.
pub fn encode_position(position: &[f64], length: usize) -> Result<String> {
    if position.len() < 2 {
        return Err(OlcError::InvalidGeometry {
            reason: format!(
                "position must have at least 2 elements, got {}",
                position.len()
            ),
        });
    }

    let lon = position[0];
    let lat = position[1];
    encode_degrees(lat, lon, length)
}

fn encode_positions(
    positions: &[Vec<f64>],
    length: usize,
    codes: &mut Vec<String>,
) -> Result<()> {
    for position in positions {
        codes.push(encode_position(position, length)?);
    }
    Ok(())
}

fn collect_codes(geometry: &Geometry, length: usize, codes: &mut Vec<String>) -> Result<()> {
    match &geometry.value {
        GeoJsonValue::Point(position) => codes.push(encode_position(position, length)?),
        GeoJsonValue::MultiPoint(positions) | GeoJsonValue::LineString(positions) => {
            encode_positions(positions, length, codes)?
        }
        GeoJsonValue::MultiLineString(lines) | GeoJsonValue::Polygon(lines) => {
            for line in lines {
                encode_positions(line, length, codes)?;
            }
        }
        GeoJsonValue::MultiPolygon(polygons) => {
            for ring in polygons.iter().flatten() {
                encode_positions(ring, length, codes)?;
            }
        }
        GeoJsonValue::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_codes(geometry, length, codes)?;
            }
        }
    }
    Ok(())
}

/// Encode every position of a geometry, in document order.
///
/// Supported geometry types:
/// - Point
/// - MultiPoint
/// - LineString
/// - MultiLineString
/// - Polygon
/// - MultiPolygon
/// - GeometryCollection
///
/// # Errors
///
/// Returns an error if any position is malformed.
pub fn encode_geometry(geometry: &Geometry, length: usize) -> Result<Vec<String>> {
    let mut codes = Vec::new();
    collect_codes(geometry, length, &mut codes)?;
    Ok(codes)
}

/// Add Plus Code properties to a feature.
///
/// Point features get a `plus_code` string; other geometries get a
/// `plus_codes` array. Features without a geometry are left unchanged.
///
/// Returns `true` if the feature was tagged.
///
/// # Errors
///
/// Returns an error if any position is malformed.
pub fn tag_feature(feature: &mut Feature, length: usize) -> Result<bool> {
    let Some(geometry) = &feature.geometry else {
        return Ok(false);
    };

    let mut codes = encode_geometry(geometry, length)?;
    if matches!(geometry.value, GeoJsonValue::Point(_)) {
        let code = codes.pop().unwrap_or_default();
        feature.set_property(PLUS_CODE_PROPERTY, code);
    } else {
        feature.set_property(PLUS_CODES_PROPERTY, codes);
    }
    Ok(true)
}

/// Tag every feature in a GeoJSON document.
///
/// A bare geometry is wrapped in a feature so it can carry the property.
/// Returns the number of features tagged.
///
/// # Errors
///
/// Returns an error if any position is malformed.
pub fn tag_geojson(geojson: GeoJson, length: usize) -> Result<(GeoJson, usize)> {
    match geojson {
        GeoJson::Geometry(geometry) => {
            let mut feature = Feature::from(geometry);
            let tagged = tag_feature(&mut feature, length)?;
            Ok((GeoJson::Feature(feature), usize::from(tagged)))
        }
        GeoJson::Feature(mut feature) => {
            let tagged = tag_feature(&mut feature, length)?;
            Ok((GeoJson::Feature(feature), usize::from(tagged)))
        }
        GeoJson::FeatureCollection(mut collection) => {
            let mut tagged = 0;
            for feature in &mut collection.features {
                if tag_feature(feature, length)? {
                    tagged += 1;
                }
            }
            Ok((GeoJson::FeatureCollection(collection), tagged))
        }
    }
}
