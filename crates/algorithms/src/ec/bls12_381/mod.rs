//! BLS12-381 arithmetic core: the scalar field, the `Fp` tower up to `Fp12`
//! and raw G₁/G₂ point construction.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

#[macro_use]
mod util;

mod field;
mod g1;
mod g2;
pub mod pow;
mod scalar;

#[cfg(test)]
mod tests;

// Public API exports (following blsarith conventions)
pub use field::fp::Fp;
pub use field::fp12::Fp12;
pub use field::fp2::Fp2;
pub use field::fp6::Fp6;
pub use g1::{G1Affine, G1Projective};
pub use g2::{G2Affine, G2Projective};
pub use pow::{pow_fixed, Exponent, PowBase};
pub use scalar::Scalar;
pub use self::scalar::Scalar as Bls12_381Scalar;

#[cfg(feature = "alloc")]
mod serialize;
