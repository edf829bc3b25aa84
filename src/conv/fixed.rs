//! Fixed notation, `[-]ddd.ddd`, from the shortest decimal decomposition.

use super::common::{self, Error, Notation};
use super::decimal::{DecimalValue, decompose_decimal};
use super::float::Float;
use super::fmt;

/// Formats a **finite**, **nonzero** `value` in fixed notation.
///
/// With a `precision`, the shortest digits are first cut down to `precision + 1` digits, the last
/// removed digit rounding half-up; for [Notation::General] trailing zeros are dropped afterwards.
/// Nothing is written if the result doesn't fit in `buf`.
pub fn format_fixed<F: Float>(buf: &mut [u8], value: F, notation: Notation, precision: Option<usize>) -> Result<usize, Error> {
    let mut decimal = decompose_decimal(value);
    crate::trace!(
        significand = decimal.significand,
        exponent = decimal.exponent,
        is_negative = decimal.is_negative,
        "fixed notation decomposition"
    );

    if let Some(precision) = precision {
        decimal = cut_digits(decimal, precision);
        if notation == Notation::General {
            decimal = decimal.remove_trailing_zeros();
        }
    }

    let len = fmt::required_buffer_length(decimal.digit_count(), decimal.exponent, decimal.is_negative);
    common::ensure_fits(buf, len)?;
    let n = write_fixed(buf, &decimal);
    debug_assert_eq!(n, len);
    Ok(n)
}

/// Drops digits while there are more than `precision + 2`, then drops one more rounding half-up.
fn cut_digits(mut decimal: DecimalValue, precision: usize) -> DecimalValue {
    let max_digits = precision.saturating_add(2);
    let mut digits = decimal.digit_count();
    if digits < max_digits {
        return decimal
    }
    while digits > max_digits {
        decimal.significand /= 10;
        decimal.exponent += 1;
        digits -= 1;
    }
    let last = decimal.significand % 10;
    decimal.significand = decimal.significand / 10 + (last >= 5) as u64;
    decimal.exponent += 1;
    decimal
}

/// Lays `decimal` out in fixed notation at the start of `buf`, returning the number of bytes
/// written. The caller has already checked that [fmt::required_buffer_length] bytes fit.
pub fn write_fixed(buf: &mut [u8], decimal: &DecimalValue) -> usize {
    let mut pos = 0;
    common::write_sign(decimal.is_negative, buf, &mut pos);

    let digits = decimal.digit_count();
    fmt::print_u64_known_len(decimal.significand, &mut buf[pos..], digits);

    if decimal.exponent >= 0 {
        // 1234e2 -> 123400
        let zeros = decimal.exponent as usize;
        buf[pos + digits .. pos + digits + zeros].fill(b'0');
        pos + digits + zeros
    } else if digits > decimal.exponent.unsigned_abs() as usize {
        // 1234e-2 -> 12.34
        let int_digits = digits - decimal.exponent.unsigned_abs() as usize;
        let point = pos + int_digits;
        buf.copy_within(point .. pos + digits, point + 1);
        buf[point] = b'.';
        pos + digits + 1
    } else {
        // 1234e-6 -> 0.001234
        let leading_zeros = decimal.exponent.unsigned_abs() as usize - digits;
        let shift = 2 + leading_zeros;
        buf.copy_within(pos .. pos + digits, pos + shift);
        buf[pos] = b'0';
        buf[pos + 1] = b'.';
        buf[pos + 2 .. pos + shift].fill(b'0');
        pos + shift + digits
    }
}
