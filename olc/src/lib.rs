//! # OLC - Open Location Code encoder
//!
//! Fixed-point encoder for Open Location Codes ("Plus Codes"), the short
//! geocodes such as `7FG49QCJ+2V` that name a cell on the globe.
//!
//! ## Features
//!
//! - **Integer only**: coordinates are degrees × 10^7; no floating point
//!   while encoding, so results are bit-exact on every platform
//! - **No allocation**: [`encode_into`] writes into a caller-owned buffer
//! - **Total**: any `i32` latitude/longitude encodes; latitude is clamped at
//!   the poles and longitude wrapped at the antimeridian
//! - **Decoding and validation** of full codes
//!
//! ## Quick Start
//!
//! ```
//! use olc::{decode, encode, maps_url};
//!
//! // 20.3700625°, 2.7821875° in fixed point
//! let code = encode(203_700_625, 27_821_875, 10);
//! assert_eq!(code, "7FG49QCJ+2V");
//!
//! let area = decode(&code).unwrap();
//! assert!(area.contains(203_700_625, 27_821_875));
//!
//! assert_eq!(maps_url(&code), "https://maps.google.com/?q=7FG49QCJ%2B2V");
//! ```
//!
//! ## Code Format
//!
//! - Characters 1–10: five pairs of base-20 latitude/longitude digits, from
//!   20° cells down to 1/8000°
//! - `+` after the eighth character; shorter codes pad with `0` up to it
//! - Characters 11–15: 4 × 5 grid refinement of the last pair cell
//!
//! The alphabet is `23456789CFGHJMPQRVWX`.
//!
//! ## Precision
//!
//! With 1e-7° units the grid runs out after four refinements: a 15-character
//! request yields 14 significant characters.

pub mod codec;
pub mod constants;
pub mod coord;
pub mod decode;
pub mod error;
mod grid;
mod pair;
pub mod url;
pub mod validate;

#[cfg(feature = "geojson")]
pub mod geojson;

// Re-export main types at crate root for convenience
pub use codec::{
    encode, encode_degrees, encode_into, encoded_len, try_encode_into, validate_code_length,
    OlcCodec, OlcCodecBuilder, DEFAULT_CODE_LENGTH,
};
pub use constants::{CODE_LEN_MAX, OLC_DEG_MULTIPLIER};
pub use coord::FixedPointCoordinate;
pub use decode::{decode, CodeArea};
pub use error::{OlcError, Result};
pub use url::maps_url;
pub use validate::{is_full, is_short, is_valid};
