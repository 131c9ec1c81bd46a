//! Constant-time operations to prevent timing attacks

use subtle::Choice;

/// Read bit `index` of a little-endian bit string as a `Choice`.
///
/// Bit `i` is bit `i % 8` of byte `i / 8`. The byte index is public, only
/// the bit value is treated as secret.
#[inline(always)]
pub fn bit_at(bytes: &[u8], index: usize) -> Choice {
    Choice::from((bytes[index / 8] >> (index % 8)) & 1)
}

/// Constant-time mask generation for a boolean condition
///
/// Returns an all-1s mask if condition is true, all-0s if false
pub const fn ct_mask(condition: bool) -> u64 {
    0u64.wrapping_sub(condition as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_at() {
        let bytes = [0b0000_0101u8, 0b1000_0000];
        assert!(bool::from(bit_at(&bytes, 0)));
        assert!(!bool::from(bit_at(&bytes, 1)));
        assert!(bool::from(bit_at(&bytes, 2)));
        assert!(bool::from(bit_at(&bytes, 15)));
        assert!(!bool::from(bit_at(&bytes, 8)));
    }

    #[test]
    fn test_ct_mask() {
        assert_eq!(ct_mask(true), u64::MAX);
        assert_eq!(ct_mask(false), 0);
    }
}
