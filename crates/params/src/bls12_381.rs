//! Constants for the BLS12-381 fields and groups

use crate::ByteOrder;

/// Size of a scalar field element (Fr) in bytes
pub const BLS12_381_SCALAR_SIZE: usize = 32;

/// Number of significant bits in the scalar field modulus r
pub const BLS12_381_SCALAR_BITS: usize = 255;

/// Size of a base field element (Fp) in bytes
pub const BLS12_381_FP_SIZE: usize = 48;

/// Size of a quadratic extension element (Fp2) in bytes
pub const BLS12_381_FP2_SIZE: usize = 2 * BLS12_381_FP_SIZE;

/// Size of a sextic extension element (Fp6) in bytes
pub const BLS12_381_FP6_SIZE: usize = 3 * BLS12_381_FP2_SIZE;

/// Size of a degree-12 extension element (Fp12) in bytes
pub const BLS12_381_FP12_SIZE: usize = 6 * BLS12_381_FP2_SIZE;

/// Storage width of a G1 affine point (x, y) in bytes
pub const BLS12_381_G1_AFFINE_SIZE: usize = 2 * BLS12_381_FP_SIZE;

/// Storage width of a G1 projective point (X, Y, Z) in bytes
pub const BLS12_381_G1_PROJECTIVE_SIZE: usize = 3 * BLS12_381_FP_SIZE;

/// Storage width of a G2 affine point (x, y) in bytes
pub const BLS12_381_G2_AFFINE_SIZE: usize = 2 * BLS12_381_FP2_SIZE;

/// Storage width of a G2 projective point (X, Y, Z) in bytes
pub const BLS12_381_G2_PROJECTIVE_SIZE: usize = 3 * BLS12_381_FP2_SIZE;

/// Byte order of scalar field encodings
pub const SCALAR_BYTE_ORDER: ByteOrder = ByteOrder::LittleEndian;

/// Byte order of base field encodings, and therefore of every Fp2 and Fp12
/// component.
///
/// Pinned by the conformance tests that check the encoding of `1`.
pub const FP_BYTE_ORDER: ByteOrder = ByteOrder::LittleEndian;

/// BLS parameter x = -0xd201000000010000 (absolute value)
pub const BLS_X: u64 = 0xd201_0000_0001_0000;

/// Sign of BLS parameter x
pub const BLS_X_IS_NEGATIVE: bool = true;
