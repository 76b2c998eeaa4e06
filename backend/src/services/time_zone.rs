//! Synthetic GMT offset for a customer identifier.
//!
//! This is a stand-in for real geolocation: the mapping is stable and
//! deterministic but carries no geographic meaning.

/// Number of distinct offsets in `[-12, 12]`.
const OFFSET_SPAN: u32 = 25;
const OFFSET_SHIFT: i32 = 12;

/// Map a customer identifier to an integer offset in `[-12, 12]`.
///
/// All decimal digits of the identifier are concatenated and read as a
/// non-negative integer `n`; the result is `n % 25 - 12`. An identifier with
/// no digits maps to `0`. The modulus is folded in digit by digit, so digit
/// strings of any length are accepted.
pub fn derive_time_zone(customer_id: &str) -> i32 {
    let mut saw_digit = false;
    let mut remainder: u32 = 0;

    for digit in customer_id.chars().filter_map(|c| c.to_digit(10)) {
        saw_digit = true;
        remainder = (remainder * 10 + digit) % OFFSET_SPAN;
    }

    if !saw_digit {
        return 0;
    }

    remainder as i32 - OFFSET_SHIFT
}
