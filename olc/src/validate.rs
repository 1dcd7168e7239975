//! Plus Code syntax checks.
//!
//! A code is *valid* if it is well formed, *short* if the leading digits
//! were dropped (separator before position 8), and *full* if it can be
//! decoded on its own.

use crate::constants::{
    ALPHABET, ENCODING_BASE, LAT_MAX, LON_MAX, OLC_DEG_MULTIPLIER, PADDING, SEPARATOR,
    SEPARATOR_POS,
};
use crate::error::{OlcError, Result};

/// Value of a code character, case-insensitive.
pub(crate) fn digit_value(c: u8) -> Option<u32> {
    let upper = c.to_ascii_uppercase();
    ALPHABET
        .iter()
        .position(|&symbol| symbol == upper)
        .map(|index| index as u32)
}

fn invalid(code: &str, reason: &'static str) -> OlcError {
    OlcError::InvalidCode {
        code: code.to_string(),
        reason,
    }
}

/// Check that `code` is a well-formed Open Location Code.
///
/// # Errors
///
/// Returns [`OlcError::InvalidCode`] naming the first rule the code breaks.
pub fn validate(code: &str) -> Result<()> {
    let bytes = code.as_bytes();
    if bytes.is_empty() {
        return Err(invalid(code, "empty code"));
    }

    let separator = match bytes.iter().position(|&b| b == SEPARATOR) {
        Some(pos) => pos,
        None => return Err(invalid(code, "missing separator")),
    };
    if bytes.iter().filter(|&&b| b == SEPARATOR).count() > 1 {
        return Err(invalid(code, "more than one separator"));
    }
    if separator > SEPARATOR_POS || separator % 2 == 1 {
        return Err(invalid(code, "separator in wrong position"));
    }

    if bytes[separator + 1..].contains(&PADDING) {
        return Err(invalid(code, "padding after separator"));
    }

    if let Some(padding) = bytes[..separator].iter().position(|&b| b == PADDING) {
        if separator < SEPARATOR_POS {
            return Err(invalid(code, "short codes cannot be padded"));
        }
        if padding == 0 || padding % 2 == 1 {
            return Err(invalid(code, "padding must start at an even position"));
        }
        if bytes[padding..separator].iter().any(|&b| b != PADDING) {
            return Err(invalid(code, "padding must run up to the separator"));
        }
        if bytes.len() > separator + 1 {
            return Err(invalid(code, "padded codes must end with the separator"));
        }
    }

    if bytes.len() - separator - 1 == 1 {
        return Err(invalid(code, "single character after separator"));
    }

    let mut digits = 0;
    for &b in bytes {
        if b == SEPARATOR || b == PADDING {
            continue;
        }
        if digit_value(b).is_none() {
            return Err(invalid(code, "invalid character"));
        }
        digits += 1;
    }
    if digits == 0 {
        return Err(invalid(code, "no digits"));
    }

    Ok(())
}

/// Returns `true` if `code` is a well-formed Open Location Code.
///
/// # Examples
///
/// ```
/// use olc::is_valid;
///
/// assert!(is_valid("7FG49QCJ+2V"));
/// assert!(is_valid("7fg49q00+"));
/// assert!(is_valid("9QCJ+2V"));
/// assert!(!is_valid("7FG49QCJ2V"));
/// assert!(!is_valid("7FG49QCJ+2"));
/// ```
pub fn is_valid(code: &str) -> bool {
    validate(code).is_ok()
}

/// Returns `true` if `code` is valid and has leading digits removed.
pub fn is_short(code: &str) -> bool {
    is_valid(code)
        && code
            .bytes()
            .position(|b| b == SEPARATOR)
            .is_some_and(|pos| pos < SEPARATOR_POS)
}

/// Returns `true` if `code` is valid, not short, and its first digits lie
/// within 180° latitude and 360° longitude.
///
/// # Examples
///
/// ```
/// use olc::is_full;
///
/// assert!(is_full("CFX30000+"));
/// assert!(!is_full("9QCJ+2V"));
/// assert!(!is_full("FFX30000+")); // latitude digit past 180°
/// ```
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }

    let bytes = code.as_bytes();
    let degrees = |b: u8| digit_value(b).map(|v| v * ENCODING_BASE).unwrap_or(u32::MAX);
    let lat_span = 2 * (LAT_MAX / OLC_DEG_MULTIPLIER) as u32;
    let lon_span = 2 * (LON_MAX / OLC_DEG_MULTIPLIER) as u32;

    degrees(bytes[0]) < lat_span && degrees(bytes[1]) < lon_span
}
