//! Parameters of the algebraic permutations over the BLS12-381 scalar field

/// State width of Poseidon128
pub const POSEIDON128_WIDTH: usize = 3;

/// Number of full rounds of Poseidon128 (split evenly around the partial rounds)
pub const POSEIDON128_FULL_ROUNDS: usize = 8;

/// Number of partial rounds of Poseidon128
pub const POSEIDON128_PARTIAL_ROUNDS: usize = 56;

/// State width of Rescue
pub const RESCUE_WIDTH: usize = 3;

/// Number of rounds of Rescue
pub const RESCUE_ROUNDS: usize = 14;

/// S-box exponent alpha shared by both permutations
pub const SBOX_ALPHA: u64 = 5;

/// alpha^-1 mod (r - 1), little-endian bytes
pub const SBOX_ALPHA_INV: [u8; 32] = [
    0xcd, 0xcc, 0xcc, 0xcc, 0x32, 0x33, 0x33, 0x33,
    0x99, 0xf1, 0x98, 0x99, 0x67, 0x0e, 0x7f, 0x21,
    0x02, 0xf0, 0x73, 0x9d, 0x69, 0x56, 0x4a, 0xe1,
    0x1c, 0x32, 0x72, 0xdd, 0xba, 0x0f, 0x5f, 0x2e,
];

/// Exact bit length of `SBOX_ALPHA_INV`
pub const SBOX_ALPHA_INV_BITS: usize = 254;
