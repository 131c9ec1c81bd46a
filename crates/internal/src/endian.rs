//! Endianness utility functions

/// Byte order of a fixed-width integer encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first
    LittleEndian,
    /// Most significant byte first
    BigEndian,
}

/// Convert a u64 from little-endian byte order to native byte order
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Convert a u64 from big-endian byte order to native byte order
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Decode `N` little-endian limbs from `8 * N` bytes in the given byte order.
///
/// With `LittleEndian` the first eight bytes hold limb 0; with `BigEndian`
/// the last eight bytes hold limb 0 and every limb is big-endian.
///
/// # Panics
///
/// Panics if `bytes.len() != 8 * N`; callers pass fixed-size arrays.
pub fn limbs_from_bytes<const N: usize>(bytes: &[u8], order: ByteOrder) -> [u64; N] {
    assert_eq!(bytes.len(), 8 * N);
    let mut limbs = [0u64; N];
    for (i, limb) in limbs.iter_mut().enumerate() {
        *limb = match order {
            ByteOrder::LittleEndian => u64_from_le_bytes(&bytes[8 * i..8 * i + 8]),
            ByteOrder::BigEndian => {
                let end = 8 * (N - i);
                u64_from_be_bytes(&bytes[end - 8..end])
            }
        };
    }
    limbs
}

/// Encode little-endian limbs into `out` in the given byte order.
///
/// # Panics
///
/// Panics if `out.len() != 8 * N`.
pub fn limbs_to_bytes<const N: usize>(limbs: &[u64; N], order: ByteOrder, out: &mut [u8]) {
    assert_eq!(out.len(), 8 * N);
    for (i, limb) in limbs.iter().enumerate() {
        match order {
            ByteOrder::LittleEndian => out[8 * i..8 * i + 8].copy_from_slice(&limb.to_le_bytes()),
            ByteOrder::BigEndian => {
                let end = 8 * (N - i);
                out[end - 8..end].copy_from_slice(&limb.to_be_bytes());
            }
        }
    }
}
