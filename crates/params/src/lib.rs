//! Constant values for the blsarith library
//!
//! Sizes, encodings and algorithm parameters live here so that every crate
//! in the workspace agrees on them.

#![no_std]

pub mod bls12_381;
pub mod permutation;

pub use blsarith_internal::endian::ByteOrder;
