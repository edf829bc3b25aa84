//! Bit layouts of the supported IEEE-754 binary interchange formats.

/// Describes where the fields of a binary floating point format live in its bit pattern, and how
/// it is printed in hexadecimal notation.
///
/// The bit pattern is always handled as a `u128` holding the value's bytes, zero-extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatLayout {
    /// Width of the whole bit pattern, padding excluded.
    pub total_bits: u32,
    /// Number of stored fraction bits, excluding any explicit integer bit.
    pub significand_bits: u32,
    /// Width of the exponent field.
    pub exponent_bits: u32,
    /// `exponent_field - exponent_bias` is the unbiased exponent of a normal value.
    pub exponent_bias: i32,
    /// Number of hex digits after the point needed to print the significand exactly.
    pub hex_precision: u32,
    /// Whether the integer bit of the significand is stored (x87 extended precision).
    pub explicit_integer_bit: bool,
    /// How far above the fraction the integer bit sits in the leading hex digit. The printed
    /// exponent is lowered by the same amount.
    pub hex_exponent_offset: u32,
}

impl FloatLayout {
    pub const BINARY32: FloatLayout = FloatLayout {
        total_bits: 32,
        significand_bits: 23,
        exponent_bits: 8,
        exponent_bias: 127,
        hex_precision: 6,
        explicit_integer_bit: false,
        hex_exponent_offset: 0,
    };

    pub const BINARY64: FloatLayout = FloatLayout {
        total_bits: 64,
        significand_bits: 52,
        exponent_bits: 11,
        exponent_bias: 1023,
        hex_precision: 13,
        explicit_integer_bit: false,
        hex_exponent_offset: 0,
    };

    /// x87 extended precision. The leading hex digit carries the explicit integer bit and the
    /// three fraction bits below it, so normal values print as `8.` through `f.`.
    pub const BINARY80: FloatLayout = FloatLayout {
        total_bits: 80,
        significand_bits: 63,
        exponent_bits: 15,
        exponent_bias: 16383,
        hex_precision: 15,
        explicit_integer_bit: true,
        hex_exponent_offset: 3,
    };

    pub const BINARY128: FloatLayout = FloatLayout {
        total_bits: 128,
        significand_bits: 112,
        exponent_bits: 15,
        exponent_bias: 16383,
        hex_precision: 28,
        explicit_integer_bit: false,
        hex_exponent_offset: 0,
    };

    /// The layout of the C `long double` on the compilation target.
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), not(target_env = "msvc")))]
    pub const LONG_DOUBLE: FloatLayout = Self::BINARY80;
    #[cfg(any(
        all(target_arch = "aarch64", not(target_vendor = "apple"), not(target_os = "windows")),
        target_arch = "riscv64",
        target_arch = "s390x",
    ))]
    pub const LONG_DOUBLE: FloatLayout = Self::BINARY128;
    #[cfg(not(any(
        all(any(target_arch = "x86", target_arch = "x86_64"), not(target_env = "msvc")),
        all(target_arch = "aarch64", not(target_vendor = "apple"), not(target_os = "windows")),
        target_arch = "riscv64",
        target_arch = "s390x",
    )))]
    pub const LONG_DOUBLE: FloatLayout = Self::BINARY64;

    /// Number of bits holding the significand, including an explicit integer bit if stored.
    #[inline]
    pub const fn stored_significand_bits(&self) -> u32 {
        self.significand_bits + self.explicit_integer_bit as u32
    }

    /// Mask of the stored significand, integer bit included if explicit.
    #[inline]
    pub const fn significand_mask(&self) -> u128 {
        lsb_mask(self.stored_significand_bits())
    }

    /// Mask of the fraction bits only.
    #[inline]
    pub const fn fraction_mask(&self) -> u128 {
        lsb_mask(self.significand_bits)
    }

    /// The all-ones exponent field of infinities and NaNs.
    #[inline]
    pub const fn max_exponent_field(&self) -> u64 {
        (1 << self.exponent_bits) - 1
    }

    /// Extracts the exponent field. Masking (rather than shifting alone) discards the sign bit and
    /// any padding above it.
    #[inline]
    pub const fn exponent_field(&self, bits: u128) -> u64 {
        ((bits >> self.stored_significand_bits()) as u64) & self.max_exponent_field()
    }

    #[inline]
    pub const fn sign_bit(&self, bits: u128) -> bool {
        (bits >> (self.total_bits - 1)) & 1 == 1
    }

    /// The most significant fraction bit, set for quiet NaNs.
    #[inline]
    pub const fn quiet_bit(&self) -> u128 {
        1 << (self.significand_bits - 1)
    }

    /// Number of bits in the hex digits after the point.
    #[inline]
    pub const fn hex_bits(&self) -> u32 {
        self.hex_precision * 4
    }
}

/// Mask of the lowest `n` bits, `n < 128`.
#[inline]
pub const fn lsb_mask(n: u32) -> u128 {
    debug_assert!(n < 128);
    (1 << n) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_partition_the_pattern() {
        for layout in [FloatLayout::BINARY32, FloatLayout::BINARY64, FloatLayout::BINARY80, FloatLayout::BINARY128] {
            assert_eq!(
                1 + layout.exponent_bits + layout.stored_significand_bits(),
                layout.total_bits,
                "{layout:?}",
            );
            assert_eq!(layout.exponent_bias as u64, layout.max_exponent_field() / 2);
            // The integer bit lands on a nibble boundary once aligned.
            assert_eq!(
                (layout.hex_bits() + layout.hex_exponent_offset) as i32 - layout.significand_bits as i32,
                if layout == FloatLayout::BINARY32 { 1 } else { 0 },
            );
        }
    }

    #[test]
    fn native_agrees() {
        let bits = (-1.5f64).to_bits() as u128;
        let layout = FloatLayout::BINARY64;
        assert!(layout.sign_bit(bits));
        assert_eq!(layout.exponent_field(bits), 1023);
        assert_eq!(bits & layout.significand_mask(), 1 << 51);

        let bits = 2.0f32.to_bits() as u128;
        let layout = FloatLayout::BINARY32;
        assert!(!layout.sign_bit(bits));
        assert_eq!(layout.exponent_field(bits), 128);
    }

    #[test]
    fn extended_one() {
        // 1.0 as x87 extended: sign 0, exponent 0x3fff, explicit integer bit set.
        let bits = (0x3fffu128 << 64) | (1 << 63);
        let layout = FloatLayout::BINARY80;
        assert_eq!(layout.exponent_field(bits), 0x3fff);
        assert_eq!(bits & layout.significand_mask(), 1 << 63);
        assert_eq!(bits & layout.fraction_mask(), 0);
        // Padding above the sign bit is ignored.
        let padded = bits | (0xffff << 80);
        assert_eq!(layout.exponent_field(padded), 0x3fff);
    }

    #[test]
    fn long_double_for_target() {
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), not(target_env = "msvc")))]
        assert_eq!(FloatLayout::LONG_DOUBLE, FloatLayout::BINARY80);
        #[cfg(all(target_arch = "x86_64", target_env = "msvc"))]
        assert_eq!(FloatLayout::LONG_DOUBLE, FloatLayout::BINARY64);
        #[cfg(all(target_arch = "aarch64", target_os = "linux"))]
        assert_eq!(FloatLayout::LONG_DOUBLE, FloatLayout::BINARY128);
        #[cfg(all(target_arch = "aarch64", target_vendor = "apple"))]
        assert_eq!(FloatLayout::LONG_DOUBLE, FloatLayout::BINARY64);

        // Whatever the target, `long double` is at least as wide as `double`.
        assert!(FloatLayout::LONG_DOUBLE.significand_bits >= FloatLayout::BINARY64.significand_bits);
        assert!(FloatLayout::LONG_DOUBLE.exponent_bits >= FloatLayout::BINARY64.exponent_bits);

        // 1.5 in the target's `long double` goes through the hex renderer like any other layout.
        let layout = FloatLayout::LONG_DOUBLE;
        let integer_bit = if layout.explicit_integer_bit { 1u128 << layout.significand_bits } else { 0 };
        let bits = ((layout.exponent_bias as u128) << layout.stored_significand_bits())
            | integer_bit
            | (1u128 << (layout.significand_bits - 1));
        let mut buf = [0u8; 64];
        let n = crate::format_hex_bits(&mut buf, bits, &layout, None).unwrap();
        let expected = if layout.explicit_integer_bit { "cp-3" } else { "1.8p+0" };
        assert_eq!(&buf[..n], expected.as_bytes());
    }
}
