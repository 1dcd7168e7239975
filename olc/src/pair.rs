//! Pair encoding: the first ten significant characters.
//!
//! Each pass emits one latitude and one longitude digit in base 20, starting
//! from 20° cells and dividing by 20 each pass. The separator goes after the
//! eighth character; shorter codes are padded with `0` up to it.

use crate::constants::{
    ALPHABET, ENCODING_BASE, INITIAL_RESOLUTION, PADDING, PAIR_CODE_LEN, SEPARATOR,
    SEPARATOR_POS,
};

/// Number of digits actually emitted for a requested pair length.
///
/// Digits come in pairs, so an odd request is rounded up.
pub(crate) fn pair_digit_count(length: usize) -> usize {
    length.min(PAIR_CODE_LEN).div_ceil(2) * 2
}

/// Characters written by [`encode_pairs`], padding and separator included.
pub(crate) fn pair_section_len(length: usize) -> usize {
    pair_digit_count(length).max(SEPARATOR_POS) + 1
}

/// Encode the pair section of a code into `buf`.
///
/// `lat` and `lon` are working coordinates (shifted to be non-negative).
/// Writes a NUL terminator after the last character and returns the number
/// of characters written before it. If `buf` cannot hold the section and its
/// terminator, writes an empty string and returns 0.
pub(crate) fn encode_pairs(lat: u32, lon: u32, length: usize, buf: &mut [u8]) -> usize {
    let length = length.min(PAIR_CODE_LEN);
    if pair_section_len(length) >= buf.len() {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        return 0;
    }

    let (mut lat, mut lon) = (lat, lon);
    let mut resolution = INITIAL_RESOLUTION;
    let mut pos = 0;
    let mut digit_count = 0;

    while digit_count < length {
        let digit = lat / resolution;
        lat -= digit * resolution;
        buf[pos] = ALPHABET[digit as usize];
        pos += 1;

        let digit = lon / resolution;
        lon -= digit * resolution;
        buf[pos] = ALPHABET[digit as usize];
        pos += 1;

        if pos == SEPARATOR_POS {
            buf[pos] = SEPARATOR;
            pos += 1;
        }

        digit_count += 2;
        resolution /= ENCODING_BASE;
    }

    while pos < SEPARATOR_POS {
        buf[pos] = PADDING;
        pos += 1;
    }
    if pos == SEPARATOR_POS {
        buf[pos] = SEPARATOR;
        pos += 1;
    }

    buf[pos] = 0;
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(lat: u32, lon: u32, length: usize) -> String {
        let mut buf = [0u8; 16];
        let n = encode_pairs(lat, lon, length, &mut buf);
        assert_eq!(buf[n], 0, "missing terminator");
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(pair_digit_count(0), 0);
        assert_eq!(pair_digit_count(1), 2);
        assert_eq!(pair_digit_count(4), 4);
        assert_eq!(pair_digit_count(9), 10);
        assert_eq!(pair_digit_count(14), 10);
    }

    #[test]
    fn test_section_len() {
        assert_eq!(pair_section_len(0), 9);
        assert_eq!(pair_section_len(6), 9);
        assert_eq!(pair_section_len(8), 9);
        assert_eq!(pair_section_len(10), 11);
    }

    #[test]
    fn test_origin() {
        assert_eq!(encode(0, 0, 10), "22222222+22");
        assert_eq!(encode(0, 0, 2), "22000000+");
    }

    #[test]
    fn test_known_digits() {
        // 20.375, 2.775 shifted by 90° and 180°
        assert_eq!(encode(1_103_750_000, 1_827_750_000, 6), "7FG49Q00+");
        assert_eq!(encode(1_103_750_000, 1_827_750_000, 8), "7FG49QGG+");
    }

    #[test]
    fn test_separator_position() {
        for length in [2, 4, 6, 8, 10] {
            let code = encode(1_234_567_890, 2_345_678_901, length);
            assert_eq!(code.find('+'), Some(SEPARATOR_POS), "length {}", length);
            assert_eq!(code.matches('+').count(), 1);
        }
    }

    #[test]
    fn test_largest_digits() {
        // Just inside 180° × 360°
        let code = encode(1_799_999_999, 3_599_999_999, 10);
        assert_eq!(code, "CVXXXXXX+XX");
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buf = [0xAAu8; 9];
        assert_eq!(encode_pairs(0, 0, 4, &mut buf), 0);
        assert_eq!(buf[0], 0);
        assert!(buf[1..].iter().all(|&b| b == 0xAA));

        let mut empty: [u8; 0] = [];
        assert_eq!(encode_pairs(0, 0, 4, &mut empty), 0);
    }

    #[test]
    fn test_exact_buffer() {
        let mut buf = [0u8; 12];
        assert_eq!(encode_pairs(0, 0, 10, &mut buf), 11);
        assert_eq!(buf[11], 0);
    }
}
