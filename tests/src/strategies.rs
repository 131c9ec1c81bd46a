//! proptest strategies producing canonical encodings

use blsarith_algorithms::ec::bls12_381::{Fp, Fp12, Fp2, Scalar};
use proptest::prelude::*;

/// Clear the top bits of every 48-byte little-endian limb so that it is
/// below the base field modulus
fn reduce_fp_chunks(mut bytes: Vec<u8>) -> Vec<u8> {
    for chunk in bytes.chunks_exact_mut(Fp::SIZE) {
        chunk[Fp::SIZE - 1] &= 0x0f;
    }
    bytes
}

/// Canonical 32-byte scalar encodings (values below `2^254`)
pub fn scalar_bytes() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_map(|mut b| {
        b[31] &= 0x3f;
        b
    })
}

pub fn scalar() -> impl Strategy<Value = Scalar> {
    scalar_bytes().prop_map(|b| Scalar::from_bytes(&b).unwrap())
}

/// Canonical 96-byte `Fp2` encodings
pub fn fp2_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), Fp2::SIZE).prop_map(reduce_fp_chunks)
}

pub fn fp2() -> impl Strategy<Value = Fp2> {
    fp2_bytes().prop_map(|b| {
        let mut arr = [0u8; 96];
        arr.copy_from_slice(&b);
        Fp2::from_bytes(&arr).unwrap()
    })
}

/// Canonical 576-byte `Fp12` encodings
pub fn fp12_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), Fp12::SIZE).prop_map(reduce_fp_chunks)
}

pub fn fp12() -> impl Strategy<Value = Fp12> {
    fp12_bytes().prop_map(|b| Fp12::from_bytes(&b).unwrap())
}

/// An exponent buffer together with a bit length that fits in it
pub fn exponent() -> impl Strategy<Value = (Vec<u8>, usize)> {
    prop::collection::vec(any::<u8>(), 0..40).prop_flat_map(|bytes| {
        let max_bits = bytes.len() * 8;
        (Just(bytes), 0..=max_bits)
    })
}
