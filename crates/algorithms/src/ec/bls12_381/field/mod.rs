//! The BLS12-381 base field and its extension tower
//!
//! `Fp -> Fp2 -> Fp6 -> Fp12`, each layer a struct of coefficients from the
//! layer below.

pub mod fp; // Base field
pub mod fp2; // Quadratic extension
pub mod fp6; // Degree-6 extension
pub mod fp12; // Degree-12 extension (target field)
