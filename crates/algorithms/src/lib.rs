//! Arithmetic primitives for the BLS12-381 pairing-friendly curve
//!
//! This crate provides the scalar field, the base field tower
//! `Fp -> Fp2 -> Fp6 -> Fp12`, raw G₁/G₂ point construction and a
//! fixed-length exponentiation shared by the scalar field and `Fp12`.
//! Algebraic permutations over the scalar field (Poseidon128, Rescue) are
//! available behind the `permutation` feature.
//!
//! Secret-dependent operations run in constant time: comparisons, decoding
//! and exponentiation only branch on public lengths. The library is usable
//! in both `std` and `no_std` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Type system
pub mod types;
pub use types::FixedSize;

// Elliptic curve arithmetic
#[cfg(feature = "ec")]
pub mod ec;
#[cfg(feature = "ec")]
pub use ec::bls12_381::{
    pow_fixed, Exponent, Fp, Fp12, Fp2, G1Affine, G1Projective, G2Affine, G2Projective,
    PowBase, Scalar,
};

// Algebraic permutations
#[cfg(feature = "permutation")]
pub mod permutation;
#[cfg(feature = "permutation")]
pub use permutation::{Hades, Permutation, Poseidon128, Rescue};
