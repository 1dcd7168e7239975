//! Map links for telemetry.
//!
//! Plus Codes travel well in text channels (SMS, AT-command modems) as a
//! map query. The `+` separator must be percent-encoded there, or it is read
//! as a space.

use crate::constants::SEPARATOR;

/// Query URL the code is appended to.
pub const MAPS_URL_PREFIX: &str = "https://maps.google.com/?q=";

/// Percent-encode the separator (`+` → `%2B`).
///
/// # Examples
///
/// ```
/// use olc::url::escape_separator;
///
/// assert_eq!(escape_separator("7FG49QCJ+2V"), "7FG49QCJ%2B2V");
/// ```
pub fn escape_separator(code: &str) -> String {
    code.replace(SEPARATOR as char, "%2B")
}

/// Build a map link for a code.
///
/// # Examples
///
/// ```
/// use olc::maps_url;
///
/// assert_eq!(
///     maps_url("7FG49QCJ+2V"),
///     "https://maps.google.com/?q=7FG49QCJ%2B2V"
/// );
/// ```
pub fn maps_url(code: &str) -> String {
    format!("{}{}", MAPS_URL_PREFIX, escape_separator(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_separator() {
        assert_eq!(escape_separator("CFX30000+"), "CFX30000%2B");
        assert_eq!(escape_separator("no separator"), "no separator");
        assert_eq!(escape_separator(""), "");
    }

    #[test]
    fn test_maps_url() {
        let url = maps_url("62H30000+");
        assert!(url.starts_with(MAPS_URL_PREFIX));
        assert!(url.ends_with("62H30000%2B"));
        assert!(!url.contains('+'));
    }
}
