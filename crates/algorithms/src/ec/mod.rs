//! Elliptic curve arithmetic
//!
//! Only BLS12-381 is provided: its scalar field, the base field tower up to
//! `Fp12` and unvalidated point construction on G₁ and G₂.

pub mod bls12_381;

pub use bls12_381::{
    Bls12_381Scalar, Fp as Bls12_381Fp, Fp12 as Bls12_381Fp12, Fp2 as Bls12_381Fp2,
    G1Affine as Bls12_381G1Affine, G1Projective as Bls12_381G1,
    G2Affine as Bls12_381G2Affine, G2Projective as Bls12_381G2,
};
