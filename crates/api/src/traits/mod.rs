//! Traits shared by the blsarith crates

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};
