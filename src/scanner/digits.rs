//! Decimal digit classification
//!
//! A digit is any character of Unicode general category `Nd`, not just
//! ASCII `0-9`. Every `Nd` block is a contiguous run of ten code points
//! starting at its zero, so a table of zeros is enough to map a character to
//! its value.

use num_bigint::BigUint;

/// First code point (the zero) of every `Nd` run, Unicode 15.0, ascending
const DECIMAL_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of `ch` if it is a decimal digit in any script
pub fn decimal_digit_value(ch: char) -> Option<u32> {
    let code = ch as u32;
    if ch.is_ascii() {
        return ch.to_digit(10);
    }

    // Index of the last zero not greater than `code`
    let run = DECIMAL_ZEROS.partition_point(|&zero| zero <= code);
    let zero = DECIMAL_ZEROS[run.checked_sub(1)?];

    if code - zero < 10 {
        Some(code - zero)
    } else {
        None
    }
}

pub fn is_decimal_digit(ch: char) -> bool {
    decimal_digit_value(ch).is_some()
}

/// Value of a run of decimal digits, most significant first.
/// Non-digits are ignored; an empty run is zero.
pub fn parse_decimal(digits: &[char]) -> BigUint {
    digits
        .iter()
        .filter_map(|&ch| decimal_digit_value(ch))
        .fold(BigUint::default(), |acc, digit| acc * 10u32 + digit)
}
