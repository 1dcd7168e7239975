//! Python bindings for the olc Plus Code library.

#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

// Use fully qualified path to avoid collision with the Python module name
use ::olc as olc_lib;

fn to_py_err(e: olc_lib::OlcError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn degrees(value: i32) -> f64 {
    value as f64 / olc_lib::OLC_DEG_MULTIPLIER as f64
}

/// Area covered by a decoded Plus Code, in decimal degrees.
///
/// South and west edges are inclusive, north and east exclusive.
#[pyclass]
#[derive(Clone)]
struct CodeArea {
    #[pyo3(get)]
    south: f64,
    #[pyo3(get)]
    west: f64,
    #[pyo3(get)]
    north: f64,
    #[pyo3(get)]
    east: f64,
    /// Number of significant characters decoded.
    #[pyo3(get)]
    code_length: usize,
    center: (f64, f64),
}

#[pymethods]
impl CodeArea {
    /// Center of the area as a (lat, lon) tuple.
    #[getter]
    fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Whether the point lies inside the area.
    fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.south..self.north).contains(&lat) && (self.west..self.east).contains(&lon)
    }

    fn __repr__(&self) -> String {
        format!(
            "CodeArea(south={:.7}, west={:.7}, north={:.7}, east={:.7}, code_length={})",
            self.south, self.west, self.north, self.east, self.code_length
        )
    }
}

impl From<olc_lib::CodeArea> for CodeArea {
    fn from(area: olc_lib::CodeArea) -> Self {
        CodeArea {
            south: degrees(area.south),
            west: degrees(area.west),
            north: degrees(area.north),
            east: degrees(area.east),
            code_length: area.code_length,
            center: area.center_degrees(),
        }
    }
}

/// Plus Code encoder with a fixed code length.
///
/// Example:
///     >>> encoder = Encoder(code_length=11)
///     >>> encoder.encode(20.3701125, 2.782234375)
///     '7FG49QCJ+2VX'
#[pyclass]
struct Encoder {
    inner: olc_lib::OlcCodec,
}

#[pymethods]
impl Encoder {
    /// Create a new encoder.
    ///
    /// Args:
    ///     code_length: Significant characters per code: 2, 4, 6, 8 or 10-15
    ///         (default: 10).
    ///
    /// Raises:
    ///     ValueError: If the length is not allowed.
    #[new]
    #[pyo3(signature = (code_length=olc_lib::DEFAULT_CODE_LENGTH))]
    fn new(code_length: usize) -> PyResult<Self> {
        let inner = olc_lib::OlcCodec::builder()
            .code_length(code_length)
            .build()
            .map_err(to_py_err)?;
        Ok(Encoder { inner })
    }

    /// Configured code length.
    #[getter]
    fn code_length(&self) -> usize {
        self.inner.code_length()
    }

    /// Encode a coordinate in decimal degrees.
    ///
    /// Raises:
    ///     ValueError: If either value is NaN or infinite.
    fn encode(&self, lat: f64, lon: f64) -> PyResult<String> {
        self.inner.encode_degrees(lat, lon).map_err(to_py_err)
    }

    /// Encode many (lat, lon) pairs at once.
    fn encode_many(&self, points: Vec<(f64, f64)>) -> PyResult<Vec<String>> {
        points
            .into_iter()
            .map(|(lat, lon)| self.inner.encode_degrees(lat, lon).map_err(to_py_err))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("Encoder(code_length={})", self.inner.code_length())
    }
}

/// Encode a coordinate as a Plus Code.
///
/// Latitude is clamped to ±90 and longitude wrapped into [-180, 180).
///
/// Args:
///     lat: Latitude in decimal degrees.
///     lon: Longitude in decimal degrees.
///     length: Significant characters, clamped to 15 (default: 10).
///
/// Returns:
///     The code, e.g. "7FG49QCJ+2V".
///
/// Example:
///     >>> encode(20.375, 2.775, 6)
///     '7FG49Q00+'
#[pyfunction]
#[pyo3(signature = (lat, lon, length=olc_lib::DEFAULT_CODE_LENGTH))]
fn encode(lat: f64, lon: f64, length: usize) -> PyResult<String> {
    olc_lib::encode_degrees(lat, lon, length).map_err(to_py_err)
}

/// Decode a full Plus Code.
///
/// Raises:
///     ValueError: If the code is malformed or short.
#[pyfunction]
fn decode(code: &str) -> PyResult<CodeArea> {
    olc_lib::decode(code).map(CodeArea::from).map_err(to_py_err)
}

/// Whether the string is a well-formed Plus Code.
#[pyfunction]
fn is_valid(code: &str) -> bool {
    olc_lib::is_valid(code)
}

/// Whether the code is valid and has its leading digits removed.
#[pyfunction]
fn is_short(code: &str) -> bool {
    olc_lib::is_short(code)
}

/// Whether the code can be decoded on its own.
#[pyfunction]
fn is_full(code: &str) -> bool {
    olc_lib::is_full(code)
}

/// Google Maps link for a code.
///
/// Example:
///     >>> maps_url("7FG49QCJ+2V")
///     'https://maps.google.com/?q=7FG49QCJ%2B2V'
#[pyfunction]
fn maps_url(code: &str) -> String {
    olc_lib::maps_url(code)
}

/// Plus Codes - Open Location Code encoding.
///
/// Example:
///     >>> import pluscode_rs
///     >>> code = pluscode_rs.encode(20.3700625, 2.7821875)
///     >>> pluscode_rs.decode(code).center
///     (20.3700625, 2.7821875)
#[pymodule]
fn pluscode_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Encoder>()?;
    m.add_class::<CodeArea>()?;
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid, m)?)?;
    m.add_function(wrap_pyfunction!(is_short, m)?)?;
    m.add_function(wrap_pyfunction!(is_full, m)?)?;
    m.add_function(wrap_pyfunction!(maps_url, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("CODE_LEN_MAX", olc_lib::CODE_LEN_MAX)?;
    Ok(())
}
