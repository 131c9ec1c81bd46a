//! `blsarith_api` byte-serialization traits for the field types.
//!
//! These are the slice-level entry points: they check the length, decode in
//! constant time and only then branch on the outcome.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use blsarith_api::{Error as CoreError, Result as CoreResult, Serialize, SerializeSecret};
use subtle::CtOption;
use zeroize::Zeroizing;

use super::{Fp, Fp12, Fp2, Scalar};
use crate::error::{to_core_result, validate};

fn fixed<'a, const N: usize>(bytes: &'a [u8], context: &'static str) -> CoreResult<&'a [u8; N]> {
    bytes.try_into().map_err(|_| {
        log::debug!("rejected {} encoding of {} bytes", context, bytes.len());
        CoreError::InvalidLength {
            context,
            expected: N,
            actual: bytes.len(),
        }
    })
}

fn canonical<T: Default + subtle::ConditionallySelectable>(
    decoded: CtOption<T>,
    context: &'static str,
) -> CoreResult<T> {
    let is_some: bool = decoded.is_some().into();
    if !is_some {
        log::debug!("rejected non-canonical {} encoding", context);
    }
    to_core_result(validate::canonical(is_some, context), context)?;
    Ok(decoded.unwrap_or(T::default()))
}

impl SerializeSecret for Scalar {
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        canonical(Scalar::from_bytes(fixed(bytes, "Scalar")?), "Scalar")
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.to_bytes().to_vec())
    }
}

impl Serialize for Fp {
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        canonical(Fp::from_bytes(fixed(bytes, "Fp")?), "Fp")
    }

    fn to_bytes(&self) -> Vec<u8> {
        Fp::to_bytes(*self).to_vec()
    }
}

impl Serialize for Fp2 {
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        canonical(Fp2::from_bytes(fixed(bytes, "Fp2")?), "Fp2")
    }

    fn to_bytes(&self) -> Vec<u8> {
        Fp2::to_bytes(self).to_vec()
    }
}

impl Serialize for Fp12 {
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        Fp12::from_bytes(bytes).map_err(CoreError::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Fp12::to_bytes(self).to_vec()
    }
}
