//! Shortest round-tripping output in scientific, fixed or general notation.

use super::common::{self, Error, Notation};
use super::decimal::{DecimalValue, decompose_decimal};
use super::fixed;
use super::float::{Classification, Float};
use super::fmt;

/// Formats a **finite** `value` with the fewest digits that read back to the same value.
///
/// - [Notation::Scientific]: `1.2345e+06`, `5e-324`.
/// - [Notation::Fixed]: `1234500`, `0.000012345`; no trailing `.0`.
/// - [Notation::General]: whichever of the above is shorter, fixed on a tie.
///
/// Zero is `0`, or `0e+00` in scientific notation. Nothing is written if the result doesn't fit.
pub fn generate_shortest_digits<F: Float>(buf: &mut [u8], value: F, notation: Notation) -> Result<usize, Error> {
    debug_assert!(!value.classification().is_nonfinite());

    if value.classification() == Classification::Zero {
        let literal: &[u8] = if notation == Notation::Scientific { b"0e+00" } else { b"0" };
        let negative = value.is_sign_negative();
        common::ensure_fits(buf, negative as usize + literal.len())?;
        let mut pos = 0;
        common::write_sign(negative, buf, &mut pos);
        common::write_to(literal, buf, &mut pos);
        return Ok(pos)
    }

    let decimal = decompose_decimal(value);
    let scientific_len = len_scientific(&decimal);
    let fixed_len = fmt::required_buffer_length(decimal.digit_count(), decimal.exponent, decimal.is_negative);

    let use_scientific = match notation {
        Notation::Scientific => true,
        Notation::Fixed => false,
        Notation::General => scientific_len < fixed_len,
        Notation::Hex => unreachable!("hex notation handed to the decimal generator"),
    };

    if use_scientific {
        common::ensure_fits(buf, scientific_len)?;
        Ok(write_scientific(buf, &decimal))
    } else {
        common::ensure_fits(buf, fixed_len)?;
        Ok(fixed::write_fixed(buf, &decimal))
    }
}

/// Length of `decimal` in scientific notation.
#[inline]
fn len_scientific(decimal: &DecimalValue) -> usize {
    let digits = decimal.digit_count();
    decimal.is_negative as usize
        + digits
        + (digits > 1) as usize
        + fmt::len_exp(decimal.scientific_exponent())
}

/// Writes `decimal` in scientific notation, returning the number of bytes written. The caller has
/// already checked that [len_scientific] bytes fit.
fn write_scientific(buf: &mut [u8], decimal: &DecimalValue) -> usize {
    let mut pos = 0;
    common::write_sign(decimal.is_negative, buf, &mut pos);

    let digits = decimal.digit_count();
    if digits == 1 {
        // 1e30
        common::write_char_to(b'0' + decimal.significand as u8, buf, &mut pos);
    } else {
        // 1234e30 -> 1.234e33
        // Write the digits one byte to the right, then move the first digit back to make room for
        // the point.
        fmt::print_u64_known_len(decimal.significand, &mut buf[pos + 1 ..], digits);
        buf[pos] = buf[pos + 1];
        buf[pos + 1] = b'.';
        pos += digits + 1;
    }

    pos + fmt::print_exp(decimal.scientific_exponent(), &mut buf[pos..])
}
