//! Picks the renderer for a float, given the requested notation and precision.

use super::common::{self, Error, Notation};
use super::fixed;
use super::float::{Classification, Float};
use super::fmt;
use super::hex;
use super::nonfinite;
use super::precise;
use super::shortest;

/// Formats `value` into `buf` in `notation`, returning the number of bytes written.
///
/// `precision` is the number of digits after the point (significant digits for
/// [Notation::General]); `None` asks for the shortest output that reads back to the same value, or
/// for hex notation, the exact value.
///
/// Infinities and NaNs are written as `inf`, `nan`, `-nan(ind)` or `nan(snan)` whatever the
/// notation. If the output doesn't fit, returns [Error::RangeError] without writing past the end
/// of `buf`.
pub fn format_float<F: Float>(buf: &mut [u8], value: F, notation: Notation, precision: Option<usize>) -> Result<usize, Error> {
    if buf.is_empty() {
        return Err(Error::RangeError)
    }

    let classification = value.classification();
    let negative = value.is_sign_negative();
    if classification.is_nonfinite() {
        return nonfinite::format_nonfinite(buf, negative, classification)
    }

    if notation == Notation::Hex {
        return match classification {
            Classification::Zero => hex::format_hex_zero(buf, negative),
            _ => hex::format_hex(buf, value, precision),
        }
    }

    let abs = value.abs();
    match precision {
        None => match notation {
            Notation::General | Notation::Fixed => {
                if F::ONE <= abs && abs < F::MAX_FRACTIONAL {
                    fixed::format_fixed(buf, value, notation, None)
                } else if F::MAX_FRACTIONAL <= abs && abs < F::MAX_INTEGER {
                    format_truncated_integer(buf, abs.trunc_to_u64(), negative)
                } else {
                    shortest::generate_shortest_digits(buf, value, notation)
                }
            }
            _ => shortest::generate_shortest_digits(buf, value, notation),
        },
        Some(precision) => {
            let fixed_override =
                notation == Notation::General && F::MIN_FRACTIONAL <= abs && abs < F::MAX_FRACTIONAL;
            let mut adjusted = precision;
            let mut clamped = false;
            if abs < F::ONE && matches!(notation, Notation::Scientific | Notation::General) {
                clamped = adjusted == 0;
                adjusted = adjusted.saturating_sub(1);
            }
            if fixed_override {
                adjusted = adjusted.saturating_add(1);
            }
            precise::generate_precision_digits(buf, value, adjusted, notation, fixed_override, clamped)
        }
    }
}

/// `[-]ddd` for values whose integer part is exact and fits in a `u64`.
fn format_truncated_integer(buf: &mut [u8], magnitude: u64, negative: bool) -> Result<usize, Error> {
    common::ensure_fits(buf, negative as usize + fmt::len_u64(magnitude))?;
    let mut pos = 0;
    common::write_sign(negative, buf, &mut pos);
    Ok(pos + fmt::format_unsigned_integer(&mut buf[pos..], magnitude)?)
}

/// Worst case length of any `F` in scientific, general or hex notation with unspecified precision.
/// Fixed notation can be much longer; see [crate::Buffer] for a buffer that holds any output.
pub const fn max_chars10<F: Float>() -> usize {
    F::MAX_CHARS10
}
