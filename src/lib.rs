//! Locale-independent, allocation-free conversions between numbers and text, after C++17's
//! `std::from_chars` and `std::to_chars`.
//!
//! - [parse_integer] reads an integer of any width in any base from 2 to 36.
//! - [format_integer] writes one back.
//! - [format_float] writes an `f32` or `f64` in fixed, scientific, general or hexadecimal
//!   notation, either as the shortest text that reads back to the same value or with an explicit
//!   precision.
//! - [format_hex_bits] writes any IEEE-754 binary format given by its bit pattern, including x87
//!   extended precision and binary128, in hexadecimal notation.
//!
//! Every function writes into a caller-provided `&mut [u8]` and reports [Error::RangeError]
//! rather than writing past its end.
//!
//! ```
//! use charconv::{Notation, parse_integer, format_float};
//!
//! let mut value = 0i32;
//! let outcome = parse_integer(b"-7fffffff rest", &mut value, 16);
//! assert_eq!((value, outcome.end, outcome.error), (-0x7fffffff, 9, None));
//!
//! let mut buf = [0u8; 32];
//! let n = format_float(&mut buf, 1.5f64, Notation::Hex, None).unwrap();
//! assert_eq!(&buf[..n], b"1.8p+0");
//! ```

#![cfg_attr(not(test), no_std)]

/// Logs at trace level through `tracing` with the `tracing` feature, and compiles to nothing
/// otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}
#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Logs at debug level through `tracing` with the `tracing` feature, and compiles to nothing
/// otherwise.
#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}
#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub(crate) use {debug, trace};

mod conv;
pub use conv::{
    Classification, Error, Float, FloatLayout, Integer, Notation, ParseOutcome,
    format_float, format_hex_bits, format_integer, max_chars10, parse_integer,
};

/// Safe API for formatting floating point numbers to text, into a buffer large enough for any
/// value with unspecified precision.
///
/// ## Example
///
/// ```
/// use charconv::{Buffer, Error, Notation};
///
/// let mut buffer = Buffer::new();
/// assert_eq!(buffer.format(1.234f64, Notation::Scientific, None), Ok("1.234e+00"));
/// assert_eq!(buffer.format(-f64::NAN, Notation::General, None), Ok("-nan(ind)"));
/// let mut buffer = Buffer::new();
/// assert_eq!(buffer.format(0.1f32, Notation::Fixed, Some(3)), Ok("0.100"));
/// assert_eq!(buffer.format(1.0f32, Notation::Fixed, Some(1000)), Err(Error::RangeError));
/// ```
#[derive(Clone, Copy)]
pub struct Buffer<F: Float> {
    bytes: F::Buffer,
}

impl<F: Float> Buffer<F> {
    /// This is a cheap operation; you don't need to worry about reusing buffers for efficiency.
    pub fn new() -> Self {
        Buffer { bytes: F::new_buffer() }
    }

    /// Print `num` into this buffer in `notation`, and return a reference to its string
    /// representation within the buffer. See [format_float] for the meaning of `precision`.
    ///
    /// With `precision` unspecified, this never fails: the buffer holds the longest output of any
    /// `F` in any notation. An explicit precision can ask for more digits than fit, in which case
    /// this returns [Error::RangeError].
    pub fn format(&mut self, num: F, notation: Notation, precision: Option<usize>) -> Result<&str, Error> {
        let buf = F::buffer_as_mut(&mut self.bytes);
        let n = format_float(buf, num, notation, precision)?;
        debug_assert!(n <= F::BUFFER_LEN);
        debug_assert!(buf[..n].is_ascii());
        // SAFETY: every renderer writes ASCII only.
        Ok(unsafe { core::str::from_utf8_unchecked(&buf[..n]) })
    }
}

impl<F: Float> Default for Buffer<F> {
    fn default() -> Self {
        Self::new()
    }
}
