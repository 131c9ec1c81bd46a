//! Internal utilities shared by the blsarith crates
//!
//! Nothing in here is part of the stable API: limb-level carry arithmetic,
//! fixed-width endian conversions and constant-time helpers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod arith;
pub mod constant_time;
pub mod endian;
