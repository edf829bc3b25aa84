//! Routines for actually writing integers as decimal text.

use super::common::{self, Error};

const DIGITS_LUT: &[u8; 200] =
    b"00010203040506070809\
      10111213141516171819\
      20212223242526272829\
      30313233343536373839\
      40414243444546474849\
      50515253545556575859\
      60616263646566676869\
      70717273747576777879\
      80818283848586878889\
      90919293949596979899";

/// Copies the two digits of `pair` (`< 100`) to `buf[offset..offset + 2]`.
#[inline]
fn write_lut_pair(buf: &mut [u8], offset: usize, pair: u64) {
    let idx = pair as usize * 2;
    buf[offset .. offset + 2].copy_from_slice(&DIGITS_LUT[idx .. idx + 2]);
}

/// Number of decimal digits of `x`.
pub const fn len_u64(x: u64) -> usize {
    // Hypothesis: most callers hand in 15-17 digit mantissas, so high-to-low is likelier to get
    // well predicted.
    if x >= 10000000000000000000 {
        20
    } else if x >= 1000000000000000000 {
        19
    } else if x >= 100000000000000000 {
        18
    } else if x >= 10000000000000000 {
        17
    } else if x >= 1000000000000000 {
        16
    } else if x >= 100000000000000 {
        15
    } else if x >= 10000000000000 {
        14
    } else if x >= 1000000000000 {
        13
    } else if x >= 100000000000 {
        12
    } else if x >= 10000000000 {
        11
    } else if x >= 1000000000 {
        10
    } else if x >= 100000000 {
        9
    } else if x >= 10000000 {
        8
    } else if x >= 1000000 {
        7
    } else if x >= 100000 {
        6
    } else if x >= 10000 {
        5
    } else if x >= 1000 {
        4
    } else if x >= 100 {
        3
    } else if x >= 10 {
        2
    } else {
        1
    }
}

/// Print an `u64` with `len` digits into `buf[..len]`, returning `len`. Invariant: `len` is
/// exactly `len_u64(x)` and `buf` holds at least `len` bytes.
#[inline]
pub fn print_u64_known_len(mut x: u64, buf: &mut [u8], len: usize) -> usize {
    debug_assert_eq!(len, len_u64(x));
    let mut end = len;
    while end >= 2 {
        let pair = x % 100;
        x /= 100;
        end -= 2;
        write_lut_pair(buf, end, pair);
    }
    if end == 1 {
        buf[0] = b'0' + x as u8;
    }
    len
}

/// Minimal base-10 rendering of `x`. Writes nothing and returns `RangeError` if the digits don't
/// fit in `buf`.
#[inline]
pub fn format_unsigned_integer(buf: &mut [u8], x: u64) -> Result<usize, Error> {
    let len = len_u64(x);
    common::ensure_fits(buf, len)?;
    Ok(print_u64_known_len(x, buf, len))
}

/// Length of a scientific exponent suffix written by [print_exp]: `e`, sign, at least two digits.
#[inline]
pub const fn len_exp(x: i32) -> usize {
    let x_abs = x.unsigned_abs() as u64;
    2 + if x_abs < 10 { 2 } else { len_u64(x_abs) }
}

/// Print a scientific exponent as `e+05`, `e-123`, returning the number of bytes written. The
/// caller has already checked that [len_exp] bytes fit.
#[inline]
pub fn print_exp(x: i32, buf: &mut [u8]) -> usize {
    let x_abs = x.unsigned_abs() as u64;
    buf[0] = b'e';
    buf[1] = if x < 0 { b'-' } else { b'+' };
    if x_abs < 10 {
        buf[2] = b'0';
        buf[3] = b'0' + x_abs as u8;
        4
    } else {
        2 + print_u64_known_len(x_abs, &mut buf[2..], len_u64(x_abs))
    }
}

/// Exact length of `significand × 10^exponent` (`significand` having `digit_count` digits) laid
/// out in fixed notation, sign included.
pub const fn required_buffer_length(digit_count: usize, exponent: common::Exp, is_negative: bool) -> usize {
    let sign = is_negative as usize;
    if exponent >= 0 {
        // 1234e2 -> 123400
        sign + digit_count + exponent as usize
    } else if digit_count > exponent.unsigned_abs() as usize {
        // 1234e-2 -> 12.34
        sign + digit_count + 1
    } else {
        // 1234e-6 -> 0.001234
        sign + 2 + exponent.unsigned_abs() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u64() {
        let mut buf = [0u8; 80];

        let n = format_unsigned_integer(&mut buf, 1234).unwrap();
        assert_eq!(&buf[..n], b"1234");

        let n = format_unsigned_integer(&mut buf, 0).unwrap();
        assert_eq!(&buf[..n], b"0");

        let n = format_unsigned_integer(&mut buf, 1).unwrap();
        assert_eq!(&buf[..n], b"1");

        let n = format_unsigned_integer(&mut buf, 9).unwrap();
        assert_eq!(&buf[..n], b"9");

        let n = format_unsigned_integer(&mut buf, 10).unwrap();
        assert_eq!(&buf[..n], b"10");

        let n = format_unsigned_integer(&mut buf, 061295).unwrap();
        assert_eq!(&buf[..n], b"61295");

        let n = format_unsigned_integer(&mut buf, 99_999_999_999_999_999).unwrap();
        assert_eq!(&buf[..n], b"99999999999999999");

        let n = format_unsigned_integer(&mut buf, u64::MAX).unwrap();
        assert_eq!(&buf[..n], b"18446744073709551615");
    }

    #[test]
    fn test_u64_too_small() {
        let mut buf = [b'#'; 6];
        assert_eq!(format_unsigned_integer(&mut buf[..3], 1234), Err(Error::RangeError));
        assert_eq!(&buf, b"######");
        assert_eq!(format_unsigned_integer(&mut buf[..4], 1234), Ok(4));
        assert_eq!(&buf, b"1234##");
    }

    #[test]
    fn test_exp() {
        let mut buf = [0u8; 80];

        for x in -999 ..= 999 {
            let len = print_exp(x, &mut buf);
            let std = format!("e{}{:02}", if x < 0 { '-' } else { '+' }, x.unsigned_abs());
            assert_eq!(&buf[..len], std.as_bytes());
            assert_eq!(len, len_exp(x));
        }
    }

    #[test]
    fn test_required_buffer_length() {
        assert_eq!(required_buffer_length(4, 2, false), "123400".len());
        assert_eq!(required_buffer_length(4, 0, true), "-1234".len());
        assert_eq!(required_buffer_length(4, -2, false), "12.34".len());
        assert_eq!(required_buffer_length(4, -4, false), "0.1234".len());
        assert_eq!(required_buffer_length(4, -6, true), "-0.001234".len());
    }

    use proptest::prelude::*;
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200_000))]

        #[test]
        fn proptest_u64(x in any::<u64>()) {
            let mut buf = [0u8; 80];
            let len = format_unsigned_integer(&mut buf, x).unwrap();
            let std = format!("{x}");
            assert_eq!(len, len_u64(x));
            assert_eq!(&buf[..len], std.as_bytes())
        }
    }
}
