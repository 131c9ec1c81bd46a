//! Public API traits and types for the blsarith library
//!
//! This crate provides the public API surface for the blsarith workspace: the
//! error type shared by every crate and the byte-serialization traits
//! implemented by field elements.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
#[cfg(feature = "alloc")]
pub use traits::{Serialize, SerializeSecret};

// Re-export trait modules for direct access
#[cfg(feature = "alloc")]
pub use traits::serialize;
