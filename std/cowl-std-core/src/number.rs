///
/// Number Conversions
///
/// Provides the numeric primitives generated code relies on:
/// - `double_to_display` - number to display string
/// - `u64_to_double` - exact unsigned conversion used for lengths
/// - `double_to_saturating_u64` - number to index with an explicit invalid sentinel
///

use crate::value::{Str, alloc_buffer};

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Convert a number to its display string.
///
/// NaN, the infinities and zero map to borrowed literals. Every other value
/// is written as its shortest round-tripping decimal: plain notation when the
/// decimal point sits within 21 digits left or 6 zeros right of the digits,
/// exponent notation (`1e+21`, `1.5e-7`) otherwise.
pub fn double_to_display(x: f64) -> Str {
    if x.is_nan() {
        return Str::from_static("NaN");
    }
    if x == f64::INFINITY {
        return Str::from_static("Infinity");
    }
    if x == f64::NEG_INFINITY {
        return Str::from_static("-Infinity");
    }
    if x == 0.0 {
        return Str::from_static("0");
    }

    // `{:e}` yields the shortest round-tripping digits, e.g. "-1.25e-7"
    let sci = format!("{:e}", x);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let k = digits.len() as i32;
    let n = exp + 1;
    let mut out = alloc_buffer(digits.len() + 8);
    if negative {
        out.push(b'-');
    }

    if k <= n && n <= 21 {
        out.extend_from_slice(digits.as_bytes());
        out.resize(out.len() + (n - k) as usize, b'0');
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.extend_from_slice(int_part.as_bytes());
        out.push(b'.');
        out.extend_from_slice(frac_part.as_bytes());
    } else if -6 < n && n <= 0 {
        out.extend_from_slice(b"0.");
        out.resize(out.len() + (-n) as usize, b'0');
        out.extend_from_slice(digits.as_bytes());
    } else {
        let (first, rest) = digits.split_at(1);
        out.extend_from_slice(first.as_bytes());
        if !rest.is_empty() {
            out.push(b'.');
            out.extend_from_slice(rest.as_bytes());
        }
        out.push(b'e');
        out.push(if n - 1 < 0 { b'-' } else { b'+' });
        out.extend_from_slice((n - 1).unsigned_abs().to_string().as_bytes());
    }

    Str::owned(out)
}

/// Convert a u64 to the nearest f64.
///
/// The low and high halves are spliced into the mantissas of 2^52 and 2^84,
/// the biases are subtracted and the halves summed, so only the final add rounds.
pub fn u64_to_double(n: u64) -> f64 {
    let lo = f64::from_bits((n & 0xFFFF_FFFF) | 0x4330_0000_0000_0000);
    let hi = f64::from_bits((n >> 32) | 0x4530_0000_0000_0000);
    // 2^84 + 2^52
    let bias = f64::from_bits(0x4530_0000_0010_0000);
    (hi - bias) + lo
}

/// Truncate a number toward zero into a u64 index.
///
/// NaN, negative values and values of 2^64 or more return `u64::MAX`, the
/// invalid-index sentinel.
pub fn double_to_saturating_u64(x: f64) -> u64 {
    if x.is_nan() || x < 0.0 || x >= TWO_POW_64 {
        return u64::MAX;
    }
    if x >= TWO_POW_63 {
        // shift into signed range, truncate, then put the top bit back
        ((x - TWO_POW_63) as i64 as u64) ^ (1 << 63)
    } else {
        x as i64 as u64
    }
}
