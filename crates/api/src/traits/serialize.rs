//! Traits for byte serialization of field elements.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::Result;
use zeroize::Zeroizing;

/// A trait for public values that can be serialized to and from bytes.
pub trait Serialize: Sized {
    /// Creates a value from its canonical byte encoding.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the value to its canonical byte encoding.
    fn to_bytes(&self) -> Vec<u8>;
}

/// A trait for values that may hold secrets (e.g. scalars used as keys).
pub trait SerializeSecret: Sized {
    /// Creates a value from a byte slice. Input should be zeroized after use.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the value to a byte vector that is zeroized on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
