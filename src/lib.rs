//! # blsarith
//!
//! Constant-time arithmetic core for the BLS12-381 pairing-friendly curve.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blsarith = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `alloc`: Slice-based `Serialize` implementations
//! - `permutation` (default): Poseidon128 and Rescue over the scalar field
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`blsarith-api`]: Error type and serialization traits
//! - [`blsarith-params`]: Sizes, byte orders and permutation parameters
//! - [`blsarith-algorithms`]: Fields, tower, points and permutations

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use blsarith_algorithms as algorithms;
pub use blsarith_api as api;
pub use blsarith_internal as internal;
pub use blsarith_params as params;

pub use blsarith_algorithms::ec::bls12_381;

#[cfg(feature = "permutation")]
pub use blsarith_algorithms::permutation;

// Dependencies that appear in the public API
#[cfg(feature = "full")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for blsarith users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Field and group types
    pub use crate::bls12_381::{
        Fp, Fp12, Fp2, G1Affine, G1Projective, G2Affine, G2Projective, Scalar,
    };

    // Exponentiation
    pub use crate::bls12_381::{pow_fixed, Exponent, PowBase};

    pub use crate::algorithms::FixedSize;

    #[cfg(feature = "alloc")]
    pub use crate::api::{Serialize, SerializeSecret};

    #[cfg(feature = "permutation")]
    pub use crate::permutation::{Permutation, Poseidon128, Rescue};

    pub use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
}
