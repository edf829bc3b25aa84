//! Routines and types that are *shared* between all renderers and the parser.

use core::fmt;

/// The two recoverable failure kinds of every conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The input holds no digits after the optional sign (parsing only).
    InvalidArgument,
    /// The parsed magnitude does not fit the target type, or the rendered text does not fit the
    /// output buffer.
    RangeError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "invalid argument: no digits to parse"),
            Error::RangeError => write!(f, "result out of range"),
        }
    }
}

impl core::error::Error for Error {}

/// Where parsing stopped, and whether it succeeded.
///
/// `end` is an offset into the input. When `error` is `None`, the parsed value has been written to
/// the caller's out-parameter; otherwise the out-parameter is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOutcome {
    pub end: usize,
    pub error: Option<Error>,
}

impl ParseOutcome {
    #[inline]
    pub const fn ok(end: usize) -> Self {
        ParseOutcome { end, error: None }
    }

    #[inline]
    pub const fn err(end: usize, error: Error) -> Self {
        ParseOutcome { end, error: Some(error) }
    }

    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Notation requested from [`format_float`](crate::format_float).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `123.456`
    Fixed,
    /// `1.23456e+02`
    Scientific,
    /// `1.edd2f1a9fbe77p+6`
    Hex,
    /// Whichever of fixed or scientific is shorter.
    General,
}

/// The exponent is represented by an i32 regardless of underlying type; this is sufficiently wide
/// to accomodate the exponent of any floating point format.
pub type Exp = i32;

/// Checks that `len` bytes fit in `buf`, logging the overflow otherwise.
#[inline]
pub fn ensure_fits(buf: &[u8], len: usize) -> Result<(), Error> {
    if len > buf.len() {
        crate::debug!(needed = len, available = buf.len(), "output buffer too small");
        return Err(Error::RangeError)
    }
    Ok(())
}

/// Copies `str` into `buf` at `*pos`, advancing `*pos`. The caller has already checked bounds.
#[inline]
pub fn write_to(str: &[u8], buf: &mut [u8], pos: &mut usize) -> usize {
    buf[*pos .. *pos + str.len()].copy_from_slice(str);
    *pos += str.len();
    str.len()
}

/// Writes a single `char` into `buf` at `*pos`, advancing `*pos`. The caller has already checked
/// bounds.
#[inline]
pub fn write_char_to(char: u8, buf: &mut [u8], pos: &mut usize) -> usize {
    buf[*pos] = char;
    *pos += 1;
    1
}

/// Writes a `-` when `negative`, returning the number of bytes written (0 or 1).
#[inline]
pub fn write_sign(negative: bool, buf: &mut [u8], pos: &mut usize) -> usize {
    if negative {
        write_char_to(b'-', buf, pos)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(Error::InvalidArgument.to_string(), "invalid argument: no digits to parse");
        assert_eq!(Error::RangeError.to_string(), "result out of range");
    }

    #[test]
    fn writers() {
        let mut buf = [0u8; 8];
        let mut pos = 0;
        write_sign(true, &mut buf, &mut pos);
        write_sign(false, &mut buf, &mut pos);
        write_to(b"inf", &mut buf, &mut pos);
        write_char_to(b'!', &mut buf, &mut pos);
        assert_eq!(&buf[..pos], b"-inf!");
    }

    #[test]
    fn fits() {
        let buf = [0u8; 4];
        assert_eq!(ensure_fits(&buf, 4), Ok(()));
        assert_eq!(ensure_fits(&buf, 5), Err(Error::RangeError));
    }
}
