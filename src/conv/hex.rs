//! Hexadecimal notation, `[-]h.hhhp±d`: the exact binary fraction, in base 16.

use super::common::{self, Error};
use super::float::{Classification, Float};
use super::fmt;
use super::layout::FloatLayout;
use super::nonfinite;
use super::table::DIGIT_CHARS;

/// Writes `[-]0p+0`.
pub fn format_hex_zero(buf: &mut [u8], negative: bool) -> Result<usize, Error> {
    common::ensure_fits(buf, negative as usize + 4)?;
    let mut pos = 0;
    common::write_sign(negative, buf, &mut pos);
    common::write_to(b"0p+0", buf, &mut pos);
    Ok(pos)
}

/// Formats a **finite**, **nonzero** native float in hexadecimal notation.
#[inline]
pub fn format_hex<F: Float>(buf: &mut [u8], value: F, precision: Option<usize>) -> Result<usize, Error> {
    format_hex_finite(buf, value.to_raw(), &F::LAYOUT, precision)
}

/// Formats any value given by its bit pattern in `layout` in hexadecimal notation, handling
/// zeros, infinities and NaNs.
pub fn format_hex_bits(buf: &mut [u8], bits: u128, layout: &FloatLayout, precision: Option<usize>) -> Result<usize, Error> {
    if buf.is_empty() {
        return Err(Error::RangeError)
    }
    let negative = layout.sign_bit(bits);
    match Classification::from_bits(bits, layout) {
        Classification::Zero => format_hex_zero(buf, negative),
        Classification::Finite => format_hex_finite(buf, bits, layout, precision),
        classification => nonfinite::format_nonfinite(buf, negative, classification),
    }
}

/// The significand and exponent of a finite value, aligned to be printed one nibble at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Aligned {
    /// The leading hex digit sits above bit `hex_bits`; the fraction digits below it.
    significand: u128,
    exponent: i32,
}

impl Aligned {
    fn new(bits: u128, layout: &FloatLayout) -> Self {
        let significand = bits & layout.significand_mask();
        let exponent_field = layout.exponent_field(bits);
        debug_assert!(exponent_field != 0 || significand != 0, "zero handed to the hex renderer");

        let (full, unbiased) = if exponent_field == 0 {
            // Subnormal
            (significand, 1 - layout.exponent_bias)
        } else if layout.explicit_integer_bit {
            (significand, exponent_field as i32 - layout.exponent_bias)
        } else {
            (significand | 1 << layout.significand_bits, exponent_field as i32 - layout.exponent_bias)
        };

        // Put the integer bit on a nibble boundary. For binary32 this is a shift by one; for x87
        // the integer bit already sits 3 bits into the leading nibble.
        let shift = layout.hex_bits() + layout.hex_exponent_offset - layout.significand_bits;
        Aligned {
            significand: full << shift,
            exponent: unbiased - layout.hex_exponent_offset as i32,
        }
    }

    /// Rounds to `digits` hex digits after the point (fewer than `hex_precision`), to nearest,
    /// ties to even. Bits below the new last digit are left in place; they are never printed.
    fn round(&mut self, layout: &FloatLayout, digits: u32) {
        debug_assert!(digits < layout.hex_precision);
        let lost_bits = (layout.hex_precision - digits) * 4;
        let lsb_bit = self.significand;
        let round_bit = self.significand << 1;
        // At position `lost_bits`: set iff the round bit is set and some bit below it is too.
        let tail_bit = round_bit - 1;
        let round = round_bit & (tail_bit | lsb_bit) & (1 << lost_bits);
        self.significand += round;

        // 0xf.8 rounds up to 0x10, which only x87 can reach; take it back to one leading digit.
        if self.leading_digit(layout) >= 16 {
            self.significand >>= 4;
            self.exponent += 4;
        }
    }

    #[inline]
    fn leading_digit(&self, layout: &FloatLayout) -> u128 {
        self.significand >> layout.hex_bits()
    }

    /// The `i`th hex digit after the point, `i < hex_precision`.
    #[inline]
    fn fraction_digit(&self, layout: &FloatLayout, i: u32) -> u8 {
        let shift = layout.hex_bits() - 4 * (i + 1);
        ((self.significand >> shift) & 0xf) as u8
    }
}

/// Formats a **finite**, **nonzero** value given by its bit pattern in `layout`.
///
/// With unspecified `precision`, prints as many digits as needed to be exact, dropping trailing
/// zeros. Otherwise prints exactly `precision` digits after the point, rounding to nearest (ties to
/// even) or padding with zeros.
pub fn format_hex_finite(buf: &mut [u8], bits: u128, layout: &FloatLayout, precision: Option<usize>) -> Result<usize, Error> {
    let negative = layout.sign_bit(bits);
    let hex_precision = layout.hex_precision as usize;

    let mut aligned = Aligned::new(bits, layout);
    if let Some(precision) = precision && precision < hex_precision {
        aligned.round(layout, precision as u32);
    }

    // Digits that come from the significand, and zeros padded after them.
    let (significant_digits, padding) = match precision {
        Some(precision) => (precision.min(hex_precision), precision.saturating_sub(hex_precision)),
        None => {
            let mut digits = layout.hex_precision;
            while digits > 0 && aligned.fraction_digit(layout, digits - 1) == 0 {
                digits -= 1;
            }
            (digits as usize, 0)
        }
    };
    let fraction_len = significant_digits + padding;

    let exponent_abs = aligned.exponent.unsigned_abs() as u64;
    let exponent_len = fmt::len_u64(exponent_abs);
    let total_len = (negative as usize + 1)
        .saturating_add(if fraction_len > 0 { fraction_len.saturating_add(1) } else { 0 })
        .saturating_add(2 + exponent_len);
    common::ensure_fits(buf, total_len)?;

    let mut pos = 0;
    common::write_sign(negative, buf, &mut pos);
    let leading = aligned.leading_digit(layout);
    debug_assert!(leading < 16);
    common::write_char_to(DIGIT_CHARS[leading as usize], buf, &mut pos);

    if fraction_len > 0 {
        common::write_char_to(b'.', buf, &mut pos);
        for i in 0 .. significant_digits as u32 {
            common::write_char_to(DIGIT_CHARS[aligned.fraction_digit(layout, i) as usize], buf, &mut pos);
        }
        buf[pos .. pos + padding].fill(b'0');
        pos += padding;
    }

    common::write_char_to(b'p', buf, &mut pos);
    common::write_char_to(if aligned.exponent < 0 { b'-' } else { b'+' }, buf, &mut pos);
    pos += fmt::print_u64_known_len(exponent_abs, &mut buf[pos..], exponent_len);
    debug_assert_eq!(pos, total_len);
    Ok(pos)
}
