//! Decomposition of a float into its shortest round-tripping decimal `significand × 10^exponent`.

use super::common::Exp;
use super::float::Float;
use super::fmt;
use super::integer;

/// A decimal representation of a **finite**, **nonzero** float: `significand × 10^exponent`, with
/// no trailing zeros in `significand`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct DecimalValue {
    pub significand: u64,
    pub exponent: Exp,
    pub is_negative: bool,
}

impl DecimalValue {
    /// Number of decimal digits of the significand.
    #[inline]
    pub const fn digit_count(&self) -> usize {
        fmt::len_u64(self.significand)
    }

    /// The exponent of the leading digit in scientific notation, i.e. `⌊log10(|value|)⌋`.
    #[inline]
    pub const fn scientific_exponent(&self) -> Exp {
        self.exponent + self.digit_count() as Exp - 1
    }

    /// Shortens `self` by removing trailing zeros from `self.significand` while possible, and
    /// incrementing `self.exponent` by the same amount.
    pub const fn remove_trailing_zeros(mut self) -> Self {
        const M_INV5: u64 = -((u64::MAX / 5) as i64) as u64;
        const BOUND: u64 = u64::MAX / 10 + 1;
        debug_assert!(self.significand != 0);
        loop {
            let q = self.significand.wrapping_mul(M_INV5).rotate_right(1);
            if q >= BOUND {
                return self
            }
            self.exponent += 1;
            self.significand = q;
        }
    }
}

/// Finds the shortest decimal representation of a **finite**, **nonzero** `value` that reads back
/// to the same float.
///
/// The digits come from Ryu; its output is read back into a significand and an exponent.
pub fn decompose_decimal<F: Float>(value: F) -> DecimalValue {
    debug_assert!(value.classification() == super::float::Classification::Finite);

    let mut ryu_buf = ryu::Buffer::new();
    let text = ryu_buf.format_finite(value.abs()).as_bytes();

    let mut significand = 0u64;
    let mut exponent: Exp = 0;
    let mut after_point = false;
    for (i, &char) in text.iter().enumerate() {
        match char {
            b'0' ..= b'9' => {
                significand = significand * 10 + (char - b'0') as u64;
                exponent -= after_point as Exp;
            }
            b'.' => after_point = true,
            b'e' | b'E' => {
                let mut written: Exp = 0;
                let outcome = integer::parse_integer(&text[i + 1 ..], &mut written, 10);
                debug_assert!(outcome.is_ok() && outcome.end == text.len() - i - 1);
                exponent += written;
                break
            }
            _ => debug_assert!(false, "unexpected byte in Ryu output"),
        }
    }

    DecimalValue {
        significand,
        exponent,
        is_negative: value.is_sign_negative(),
    }.remove_trailing_zeros()
}
