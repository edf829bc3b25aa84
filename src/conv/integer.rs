//! Conversion of native integers from and to text in any base from 2 to 36.

use super::common::{self, Error, ParseOutcome};
use super::table;

/// An integer type which [charconv](crate) can parse and print.
///
/// This trait is "sealed", meaning it cannot be implemented for any other types.
pub trait Integer: Sealed {}

/// Unsigned working word of an [Integer].
pub trait Word: Copy + Ord {
    const ZERO: Self;
    /// `self * base + digit`, which the caller has proven not to overflow.
    fn mul_add(self, base: u32, digit: u8) -> Self;
    fn div_rem(self, base: u32) -> (Self, u8);
}

pub trait Sealed: Copy {
    type Unsigned: Word;
    const SIGNED: bool;

    /// Largest magnitude representable: `max(T)`, or `max(T) + 1` when `negative` (two's
    /// complement asymmetry).
    fn max_magnitude(negative: bool) -> Self::Unsigned;

    /// Applies the sign to `magnitude` through the unsigned type, so `-(max(T) + 1)` never
    /// overflows.
    fn from_magnitude(magnitude: Self::Unsigned, negative: bool) -> Self;

    fn to_magnitude(self) -> (Self::Unsigned, bool);
}

macro_rules! impl_word { ($($u:ident),*) => { $(
    impl Word for $u {
        const ZERO: Self = 0;

        #[inline]
        fn mul_add(self, base: u32, digit: u8) -> Self {
            self * base as $u + digit as $u
        }

        #[inline]
        fn div_rem(self, base: u32) -> (Self, u8) {
            (self / base as $u, (self % base as $u) as u8)
        }
    }
)* } }

impl_word!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_unsigned { ($($u:ident),*) => { $(
    impl Integer for $u {}
    impl Sealed for $u {
        type Unsigned = $u;
        const SIGNED: bool = false;

        #[inline]
        fn max_magnitude(_negative: bool) -> $u {
            $u::MAX
        }

        #[inline]
        fn from_magnitude(magnitude: $u, _negative: bool) -> Self {
            magnitude
        }

        #[inline]
        fn to_magnitude(self) -> ($u, bool) {
            (self, false)
        }
    }
)* } }

macro_rules! impl_signed { ($($i:ident => $u:ident),*) => { $(
    impl Integer for $i {}
    impl Sealed for $i {
        type Unsigned = $u;
        const SIGNED: bool = true;

        #[inline]
        fn max_magnitude(negative: bool) -> $u {
            $i::MAX as $u + negative as $u
        }

        #[inline]
        fn from_magnitude(magnitude: $u, negative: bool) -> Self {
            if negative { magnitude.wrapping_neg() as $i } else { magnitude as $i }
        }

        #[inline]
        fn to_magnitude(self) -> ($u, bool) {
            (self.unsigned_abs(), self < 0)
        }
    }
)* } }

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

#[inline]
fn assert_base(base: u32) {
    assert!((2 ..= 36).contains(&base), "base must be between 2 and 36 (inclusive), got {base}");
}

/// Parses an integer written in `base` from the start of `text` into `value`.
///
/// Signed types accept one leading `-` or `+`; unsigned types accept no sign. Digits above 9 are
/// letters, in either case. Parsing stops at the first byte that is not a digit in `base`, and
/// `end` points at it.
///
/// - If no digit follows the optional sign, fails with [Error::InvalidArgument] and `end == 0`.
/// - If the value does not fit in `T`, fails with [Error::RangeError]; `end` still points past
///   the digits.
///
/// On failure `value` is left untouched.
///
/// ## Panics
///
/// If `base` is not in `2..=36`.
///
/// ## Example
///
/// ```
/// let mut value = 0i32;
/// let outcome = charconv::parse_integer(b"-7fffffff!", &mut value, 16);
/// assert!(outcome.is_ok());
/// assert_eq!(outcome.end, 9);
/// assert_eq!(value, -0x7fffffff);
/// ```
pub fn parse_integer<T: Integer>(text: &[u8], value: &mut T, base: u32) -> ParseOutcome {
    assert_base(base);

    // Strip sign if the type is signed; it is applied back at the end.
    let mut next = 0;
    let mut negative = false;
    if T::SIGNED {
        match text.first() {
            Some(b'-') => {
                negative = true;
                next = 1;
            }
            Some(b'+') => next = 1,
            _ => {}
        }
    }

    let max_magnitude = T::max_magnitude(negative);
    let (overflow_value, max_digit) = max_magnitude.div_rem(base);

    let mut result = T::Unsigned::ZERO;
    let mut overflowed = false;
    let digits_start = next;
    while let Some(&char) = text.get(next) {
        let digit = table::digit_value(char);
        if digit as u32 >= base {
            break
        }
        next += 1;

        if result < overflow_value || (result == overflow_value && digit <= max_digit) {
            result = result.mul_add(base, digit);
        } else {
            // Keep consuming so `end` lands after the digits; the value is garbage now.
            overflowed = true;
        }
    }

    if next == digits_start {
        return ParseOutcome::err(0, Error::InvalidArgument)
    }
    if overflowed {
        return ParseOutcome::err(next, Error::RangeError)
    }

    *value = T::from_magnitude(result, negative);
    ParseOutcome::ok(next)
}

/// Prints `value` in `base` (lowercase letters above 9) into `buf`, returning the number of bytes
/// written. Negative values get a leading `-`.
///
/// Fails with [Error::RangeError] without writing anything if the text does not fit.
///
/// ## Panics
///
/// If `base` is not in `2..=36`.
///
/// ## Example
///
/// ```
/// let mut buf = [0u8; 8];
/// let n = charconv::format_integer(&mut buf, -255i16, 16).unwrap();
/// assert_eq!(&buf[..n], b"-ff");
/// ```
pub fn format_integer<T: Integer>(buf: &mut [u8], value: T, base: u32) -> Result<usize, Error> {
    assert_base(base);
    let (magnitude, negative) = value.to_magnitude();

    let mut len = 1;
    let mut rest = magnitude.div_rem(base).0;
    while rest > T::Unsigned::ZERO {
        rest = rest.div_rem(base).0;
        len += 1;
    }

    let total = negative as usize + len;
    common::ensure_fits(buf, total)?;

    let mut pos = 0;
    common::write_sign(negative, buf, &mut pos);
    let mut rest = magnitude;
    for slot in buf[pos .. total].iter_mut().rev() {
        let (quotient, digit) = rest.div_rem(base);
        *slot = table::DIGIT_CHARS[digit as usize];
        rest = quotient;
    }
    Ok(total)
}
