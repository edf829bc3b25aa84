//! Output with an explicit precision, following the C `printf` rules for `%f`, `%e` and `%g`.
//!
//! The digits themselves come from `core::fmt`, which rounds the exact binary value correctly.
//! Everything is measured with a [Gauge] before anything is written to the caller's buffer, so an
//! undersized buffer is left untouched.

use core::fmt::{self as core_fmt, Write};

use super::common::{self, Error, Exp, Notation};
use super::float::Float;
use super::fmt;

/// More digits after the point than any `f32` or `f64` needs to be printed exactly. Past this,
/// every digit is a zero.
const EXACT_DIGITS: usize = 1100;

/// Formats a **finite** `value` with an explicit precision.
///
/// `precision` is the precision as adjusted by the dispatcher (one less for small scientific and
/// general values, one more when `fixed_override` is set); the precision asked for is recovered
/// from it. `clamped` is set when the subtraction was lost to the clamp at zero, so there is
/// nothing to add back. Then:
///
/// - [Notation::Fixed]: `p` digits after the point.
/// - [Notation::Scientific]: `p` digits after the point, then `e±XX`.
/// - [Notation::General]: `max(p, 1)` significant digits, in fixed notation when the decimal
///   exponent `X` satisfies `p > X >= -4` and in scientific notation otherwise, with trailing zeros
///   removed.
/// - `fixed_override`: as general, but always in fixed notation.
pub fn generate_precision_digits<F: Float>(
    buf: &mut [u8],
    value: F,
    precision: usize,
    notation: Notation,
    fixed_override: bool,
    clamped: bool,
) -> Result<usize, Error> {
    debug_assert!(!value.classification().is_nonfinite());

    let negative = value.is_sign_negative();
    let abs = value.abs();

    let mut requested = precision;
    if abs < F::ONE && matches!(notation, Notation::Scientific | Notation::General) && !clamped {
        requested = requested.saturating_add(1);
    }
    if fixed_override {
        requested = requested.saturating_sub(1);
    }

    // Digits go after the sign, which is only written once they are known to fit.
    let out = buf.get_mut(negative as usize ..).ok_or(Error::RangeError)?;
    let len = if fixed_override {
        debug_assert_eq!(notation, Notation::General);
        let significant = requested.clamp(1, EXACT_DIGITS);
        let exponent = decimal_exponent(abs, significant)?;
        let fraction_digits = (significant as Exp - 1 - exponent).max(0) as usize;
        write_stripped_fixed(out, abs, fraction_digits)?
    } else {
        match notation {
            Notation::Fixed => write_fixed(out, abs, requested)?,
            Notation::Scientific => write_scientific(out, abs, requested, false)?,
            Notation::General => {
                let significant = requested.clamp(1, EXACT_DIGITS);
                let exponent = decimal_exponent(abs, significant)?;
                if (significant as Exp) > exponent && exponent >= -4 {
                    let fraction_digits = (significant as Exp - 1 - exponent) as usize;
                    write_stripped_fixed(out, abs, fraction_digits)?
                } else {
                    write_scientific(out, abs, significant - 1, true)?
                }
            }
            Notation::Hex => unreachable!("hex notation handed to the decimal generator"),
        }
    };

    if negative {
        buf[0] = b'-';
    }
    Ok(negative as usize + len)
}

/// The decimal exponent of `abs` once rounded to `significant` digits.
fn decimal_exponent<F: Float>(abs: F, significant: usize) -> Result<Exp, Error> {
    let mut gauge = Gauge::default();
    write!(gauge, "{:.*e}", significant - 1, abs).map_err(|_| Error::RangeError)?;
    Ok(gauge.exponent())
}

/// `ddd.ddd` with exactly `fraction_digits` digits after the point. `out` follows the sign, if any.
fn write_fixed<F: Float>(out: &mut [u8], abs: F, fraction_digits: usize) -> Result<usize, Error> {
    let digits = fraction_digits.min(EXACT_DIGITS);
    let padding = fraction_digits - digits;

    let mut gauge = Gauge::default();
    write!(gauge, "{:.*}", digits, abs).map_err(|_| Error::RangeError)?;
    let len = gauge.mantissa_len.saturating_add(padding);
    common::ensure_fits(out, len)?;

    let mut writer = SliceWriter::new(&mut out[.. gauge.mantissa_len]);
    write!(writer, "{:.*}", digits, abs).map_err(|_| Error::RangeError)?;
    out[gauge.mantissa_len .. len].fill(b'0');
    Ok(len)
}

/// `ddd.ddd` with at most `fraction_digits` digits after the point: trailing zeros are dropped,
/// and the point too if nothing is left after it.
fn write_stripped_fixed<F: Float>(out: &mut [u8], abs: F, fraction_digits: usize) -> Result<usize, Error> {
    let mut gauge = Gauge::default();
    write!(gauge, "{:.*}", fraction_digits, abs).map_err(|_| Error::RangeError)?;
    let len = gauge.stripped_mantissa_len();
    common::ensure_fits(out, len)?;

    let mut writer = SliceWriter::new(&mut out[.. len]);
    write!(writer, "{:.*}", fraction_digits, abs).map_err(|_| Error::RangeError)?;
    Ok(len)
}

/// `d.ddde±XX` with `fraction_digits` digits after the point, or as many as are left once trailing
/// zeros are dropped if `strip`.
fn write_scientific<F: Float>(
    out: &mut [u8],
    abs: F,
    fraction_digits: usize,
    strip: bool,
) -> Result<usize, Error> {
    let digits = fraction_digits.min(EXACT_DIGITS);
    let padding = if strip { 0 } else { fraction_digits - digits };

    let mut gauge = Gauge::default();
    write!(gauge, "{:.*e}", digits, abs).map_err(|_| Error::RangeError)?;
    let mantissa_len = if strip { gauge.stripped_mantissa_len() } else { gauge.mantissa_len };
    let exponent = gauge.exponent();
    let len = mantissa_len.saturating_add(padding).saturating_add(fmt::len_exp(exponent));
    common::ensure_fits(out, len)?;

    // Rust writes the exponent as `e5`; only the mantissa is kept, and the exponent is rewritten
    // as `e+05` after it.
    let mut writer = SliceWriter::new(&mut out[.. mantissa_len]);
    write!(writer, "{:.*e}", digits, abs).map_err(|_| Error::RangeError)?;
    let mut pos = mantissa_len;
    out[pos .. pos + padding].fill(b'0');
    pos += padding;
    pos += fmt::print_exp(exponent, &mut out[pos..]);
    debug_assert_eq!(pos, len);
    Ok(len)
}

/// Measures formatted output without storing it.
#[derive(Debug, Default)]
struct Gauge {
    /// Bytes before the `e`, or all of them if there is none.
    mantissa_len: usize,
    point: bool,
    fraction_digits: usize,
    trailing_zeros: usize,
    in_exponent: bool,
    exponent_negative: bool,
    exponent_abs: Exp,
}

impl Gauge {
    fn exponent(&self) -> Exp {
        if self.exponent_negative { -self.exponent_abs } else { self.exponent_abs }
    }

    /// Length of the mantissa once trailing zeros after the point, and then a bare point, are
    /// dropped.
    fn stripped_mantissa_len(&self) -> usize {
        if !self.point {
            self.mantissa_len
        } else if self.trailing_zeros == self.fraction_digits {
            self.mantissa_len - self.trailing_zeros - 1
        } else {
            self.mantissa_len - self.trailing_zeros
        }
    }
}

impl Write for Gauge {
    fn write_str(&mut self, s: &str) -> core_fmt::Result {
        for &char in s.as_bytes() {
            if self.in_exponent {
                match char {
                    b'-' => self.exponent_negative = true,
                    b'0' ..= b'9' => self.exponent_abs = self.exponent_abs * 10 + (char - b'0') as Exp,
                    _ => {}
                }
                continue
            }
            match char {
                b'e' => {
                    self.in_exponent = true;
                    continue
                }
                b'.' => self.point = true,
                b'0' if self.point => {
                    self.fraction_digits += 1;
                    self.trailing_zeros += 1;
                }
                b'1' ..= b'9' if self.point => {
                    self.fraction_digits += 1;
                    self.trailing_zeros = 0;
                }
                _ => {}
            }
            self.mantissa_len += 1;
        }
        Ok(())
    }
}

/// A [Write] into a byte slice. Output past the end of the slice is dropped: callers size the slice
/// to the prefix they want kept.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        SliceWriter { buf, pos: 0 }
    }
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> core_fmt::Result {
        let n = s.len().min(self.buf.len() - self.pos);
        self.buf[self.pos .. self.pos + n].copy_from_slice(&s.as_bytes()[..n]);
        self.pos += n;
        Ok(())
    }
}
