use super::layout::FloatLayout;

/// A floating point type which [charconv](crate) can serialise into a string.
///
/// This trait is "sealed", meaning it cannot be implemented for any other types.
pub trait Float: Sealed {}
impl Float for f32 {}
impl Float for f64 {}

/// What kind of value a float holds, for picking a renderer. The sign is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Finite,
    Infinite,
    NanQuiet,
    NanSignaling,
    Zero,
}

impl Classification {
    /// Classifies a raw bit pattern laid out as `layout`, for formats without a native Rust type.
    pub const fn from_bits(bits: u128, layout: &FloatLayout) -> Self {
        let exponent = layout.exponent_field(bits);
        let fraction = bits & layout.fraction_mask();
        if exponent == layout.max_exponent_field() {
            if fraction == 0 {
                Classification::Infinite
            } else if fraction & layout.quiet_bit() != 0 {
                Classification::NanQuiet
            } else {
                Classification::NanSignaling
            }
        } else if exponent == 0 && bits & layout.significand_mask() == 0 {
            Classification::Zero
        } else {
            Classification::Finite
        }
    }

    #[inline]
    pub const fn is_nonfinite(self) -> bool {
        matches!(self, Classification::Infinite | Classification::NanQuiet | Classification::NanSignaling)
    }
}

pub trait Sealed
where
    Self: Copy + PartialOrd + core::fmt::Display + core::fmt::LowerExp + ryu::Float,
    Self: core::panic::RefUnwindSafe + Send + Sync + Unpin + core::panic::UnwindSafe,
{
    type Buffer;
    fn new_buffer() -> Self::Buffer;
    const BUFFER_LEN: usize;
    fn buffer_as_mut(buf: &mut Self::Buffer) -> &mut [u8];

    const LAYOUT: FloatLayout;

    /// Worst case length of any scientific, general or hex rendering with unspecified precision.
    const MAX_CHARS10: usize;

    /// Lower bound of the magnitudes shown in full in general notation with a precision.
    const MIN_FRACTIONAL: Self;
    /// Upper bound of the magnitudes rendered through the fixed-notation renderer.
    const MAX_FRACTIONAL: Self;
    /// Upper bound of the magnitudes rendered as a plain truncated integer.
    const MAX_INTEGER: Self;
    const ONE: Self;

    /// The raw bit pattern, zero-extended.
    fn to_raw(self) -> u128;

    fn abs(self) -> Self;
    fn is_sign_negative(self) -> bool;

    /// Truncates a finite, non-negative value below `MAX_INTEGER`.
    fn trunc_to_u64(self) -> u64;

    fn classification(self) -> Classification;
}

macro_rules! impl_float { (
    float = $f:ident,
    layout = $layout:path,
    max_fractional = $max_fractional:literal,
    max_integer = $max_integer:ident,
    max_chars10 = $max_chars10:expr,
    buffer_len = $buffer_len:expr,
) => {
    impl Sealed for $f {
        type Buffer = [u8; $buffer_len];

        fn new_buffer() -> Self::Buffer {
            [0; $buffer_len]
        }

        const BUFFER_LEN: usize = $buffer_len;

        fn buffer_as_mut(buf: &mut Self::Buffer) -> &mut [u8] {
            buf.as_mut_slice()
        }

        const LAYOUT: FloatLayout = $layout;
        const MAX_CHARS10: usize = $max_chars10;

        const MIN_FRACTIONAL: Self = 1e-4;
        const MAX_FRACTIONAL: Self = $max_fractional;
        const MAX_INTEGER: Self = $max_integer::MAX as $f;
        const ONE: Self = 1.0;

        #[inline]
        fn to_raw(self) -> u128 {
            self.to_bits() as u128
        }

        #[inline]
        fn abs(self) -> Self {
            $f::abs(self)
        }

        #[inline]
        fn is_sign_negative(self) -> bool {
            $f::is_sign_negative(self)
        }

        #[inline]
        fn trunc_to_u64(self) -> u64 {
            debug_assert!(0.0 <= self && self < Self::MAX_INTEGER);
            self as $max_integer as u64
        }

        #[inline]
        fn classification(self) -> Classification {
            if self.is_nan() {
                if self.to_raw() & Self::LAYOUT.quiet_bit() != 0 {
                    Classification::NanQuiet
                } else {
                    Classification::NanSignaling
                }
            } else if self.is_infinite() {
                Classification::Infinite
            } else if self == 0.0 {
                Classification::Zero
            } else {
                Classification::Finite
            }
        }
    }
} }

/// Size of buffer necessary for serialising any `$f` with unspecified precision, fixed notation
/// included: the sign, the digits of the largest or smallest value, the decimal point.
const fn len_dec(max_exp: usize, mantissa: usize) -> usize {
    let decimal_point = 2;
    (max_exp + decimal_point + mantissa).next_multiple_of(8)
}

impl_float!(
    float = f32,
    layout = FloatLayout::BINARY32,
    max_fractional = 1e7,
    max_integer = u32,
    // -1.23456789e-38
    max_chars10 = 1 + 9 + 1 + 1 + 1 + 2,
    buffer_len = len_dec(45, 9),
);

impl_float!(
    float = f64,
    layout = FloatLayout::BINARY64,
    max_fractional = 1e16,
    max_integer = u64,
    // -1.2345678901234567e-308
    max_chars10 = 1 + 17 + 1 + 1 + 1 + 3,
    buffer_len = len_dec(324, 20),
);
