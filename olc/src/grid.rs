//! Grid refinement: characters 11 to 15.
//!
//! After the pair digits, the remaining cell (1/8000°) is split into a grid
//! of 5 rows by 4 columns per character, numbered from the south-west:
//!
//! ```text
//! R V W X
//! J M P Q
//! C F G H
//! 6 7 8 9
//! 2 3 4 5
//! ```
//!
//! Fixed-point units run out after four refinements: the latitude divisor
//! reaches zero and encoding stops early with fewer characters than
//! requested.

use crate::constants::{ALPHABET, GRID_COLS, GRID_ROWS, GRID_SIZE};

/// Encode up to `length` grid characters into `buf`.
///
/// `lat` and `lon` are working coordinates; only their remainder within the
/// pair cell matters. Writes a NUL terminator and returns the number of
/// characters written. If `buf` cannot hold `length` characters and the
/// terminator, writes an empty string and returns 0.
pub(crate) fn encode_grid(lat: u32, lon: u32, length: usize, buf: &mut [u8]) -> usize {
    if length >= buf.len() {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        return 0;
    }

    let mut lat_grid_size = GRID_SIZE;
    let mut lon_grid_size = GRID_SIZE;
    let mut lat = lat % lat_grid_size;
    let mut lon = lon % lon_grid_size;
    let mut pos = 0;

    for _ in 0..length {
        let lat_div = lat_grid_size / GRID_ROWS;
        let lon_div = lon_grid_size / GRID_COLS;

        if lat_div == 0 || lon_div == 0 {
            tracing::trace!(
                requested = length,
                produced = pos,
                "Grid refinement stopped at fixed-point precision limit"
            );
            break;
        }

        // Truncated divisors leave a sliver past the last column; it belongs to that column.
        let row = (lat / lat_div).min(GRID_ROWS - 1);
        let col = (lon / lon_div).min(GRID_COLS - 1);

        lat_grid_size = lat_div;
        lon_grid_size = lon_div;
        lat -= row * lat_grid_size;
        lon -= col * lon_grid_size;

        buf[pos] = ALPHABET[(row * GRID_COLS + col) as usize];
        pos += 1;
    }

    buf[pos] = 0;
    pos
}

/// Number of grid characters the fixed-point range can express.
pub(crate) const fn max_grid_digits() -> usize {
    let mut lat_grid_size = GRID_SIZE;
    let mut lon_grid_size = GRID_SIZE;
    let mut digits = 0;
    while lat_grid_size / GRID_ROWS > 0 && lon_grid_size / GRID_COLS > 0 {
        lat_grid_size /= GRID_ROWS;
        lon_grid_size /= GRID_COLS;
        digits += 1;
    }
    digits
}
