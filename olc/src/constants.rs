//! Open Location Code constants.
//!
//! All values are in fixed-point degrees (degrees × [`OLC_DEG_MULTIPLIER`])
//! and are evaluated at compile time.

/// Fixed-point scale: one degree is this many coordinate units (1e-7°).
pub const OLC_DEG_MULTIPLIER: i32 = 10_000_000;

/// Maximum latitude in fixed-point units (90°).
pub const LAT_MAX: i32 = 90 * OLC_DEG_MULTIPLIER;

/// Maximum longitude in fixed-point units (180°).
pub const LON_MAX: i32 = 180 * OLC_DEG_MULTIPLIER;

/// Number of symbols in the alphabet.
pub const ENCODING_BASE: u32 = 20;

/// Number of significant characters produced by pair encoding.
pub const PAIR_CODE_LEN: usize = 10;

/// Longest code the encoder will produce, in significant characters.
pub const CODE_LEN_MAX: usize = 15;

/// Columns in the grid refinement step.
pub const GRID_COLS: u32 = 4;

/// Rows in the grid refinement step.
pub const GRID_ROWS: u32 = ENCODING_BASE / GRID_COLS;

/// Character separating the area code from the local code.
pub const SEPARATOR: u8 = b'+';

/// Index of the separator in a full code.
pub const SEPARATOR_POS: usize = 8;

/// Character used to pad codes shorter than [`SEPARATOR_POS`].
pub const PADDING: u8 = b'0';

/// The 20 code symbols. Vowels and look-alike characters are left out.
pub const ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Largest exponent `e` with `ENCODING_BASE^e <= 360`.
const INITIAL_EXPONENT: u32 = {
    let span = 2 * (LON_MAX / OLC_DEG_MULTIPLIER) as u32;
    let mut exponent = 0;
    let mut place = ENCODING_BASE;
    while place <= span {
        place *= ENCODING_BASE;
        exponent += 1;
    }
    exponent
};

/// Cell size of the first pair digit (20°).
pub const INITIAL_RESOLUTION: u32 =
    ENCODING_BASE.pow(INITIAL_EXPONENT) * OLC_DEG_MULTIPLIER as u32; // 200,000,000

/// Cell size after all pair digits, the area split by grid refinement (0.000125°).
pub const GRID_SIZE: u32 = OLC_DEG_MULTIPLIER as u32
    / ENCODING_BASE.pow(PAIR_CODE_LEN as u32 / 2 - (INITIAL_EXPONENT + 1)); // 1,250
