//! Shared helpers for the blsarith integration tests
//!
//! `strategies` generates canonical encodings for property tests and
//! `constant_time` holds the timing harness used to compare inputs that
//! should take the same time.

pub mod constant_time;
pub mod strategies;
