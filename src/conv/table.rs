//! Static byte-to-digit lookup for parsing, and digit characters for rendering.

/// Marks a byte that is not a digit in any base.
pub const INVALID: u8 = 255;

/// Maps every byte to its digit value: `0`-`9` to 0-9, `a`-`z` and `A`-`Z` to 10-35, anything else
/// to [INVALID].
pub static DIGIT_VALUES: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut c = 0;
    while c < 10 {
        table[b'0' as usize + c] = c as u8;
        c += 1;
    }
    let mut c = 0;
    while c < 26 {
        table[b'a' as usize + c] = 10 + c as u8;
        table[b'A' as usize + c] = 10 + c as u8;
        c += 1;
    }
    table
};

/// Lowercase digit characters for bases up to 36.
pub const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Value of `char` as a digit, or [INVALID]. Always `>= base` for a byte that is not a digit in
/// `base`, for any `base <= 36`.
#[inline]
pub fn digit_value(char: u8) -> u8 {
    DIGIT_VALUES[char as usize]
}
