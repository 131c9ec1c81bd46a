//! Property-based tests for fixed-length exponentiation

use blsarith_algorithms::ec::bls12_381::{Fp12, Scalar};
use blsarith_algorithms::Error;
use blsarith_tests::strategies;
use proptest::prelude::*;

/// Zero every bit at position `>= bits`
fn truncate(bytes: &[u8], bits: usize) -> Vec<u8> {
    bytes
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let low = i * 8;
            if bits >= low + 8 {
                b
            } else if bits <= low {
                0
            } else {
                b & ((1u8 << (bits - low)) - 1)
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn scalar_pow_ignores_bits_above_length(
        x in strategies::scalar(),
        (exp, bits) in strategies::exponent(),
    ) {
        let clean = truncate(&exp, bits);
        prop_assert_eq!(x.pow(&exp, bits).unwrap(), x.pow(&clean, bits).unwrap());
    }

    #[test]
    fn scalar_pow_leading_zero_bits(
        x in strategies::scalar(),
        e in any::<u32>(),
        pad in 0usize..4,
    ) {
        let mut bytes = e.to_le_bytes().to_vec();
        bytes.extend(core::iter::repeat(0u8).take(pad));
        let exact = x.pow(&e.to_le_bytes(), 32).unwrap();
        prop_assert_eq!(x.pow(&bytes, bytes.len() * 8).unwrap(), exact);
    }

    #[test]
    fn scalar_pow_adds_exponents(x in strategies::scalar(), a in any::<u32>(), b in any::<u32>()) {
        let sum = a as u64 + b as u64;
        let lhs = x.pow(&sum.to_le_bytes(), 64).unwrap();
        let rhs = x.pow(&a.to_le_bytes(), 32).unwrap() * x.pow(&b.to_le_bytes(), 32).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn scalar_pow_rejects_overlong_bit_length(
        x in strategies::scalar(),
        exp in prop::collection::vec(any::<u8>(), 0..40),
        extra in 1usize..64,
    ) {
        let bits = exp.len() * 8 + extra;
        let rejected = matches!(
            x.pow(&exp, bits),
            Err(Error::Parameter { name: "exp_bit_length", .. })
        );
        prop_assert!(rejected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn fp12_pow_adds_exponents(x in strategies::fp12(), a in any::<u16>(), b in any::<u16>()) {
        let sum = a as u32 + b as u32;
        let lhs = x.pow(&sum.to_le_bytes(), 32).unwrap();
        let rhs = x.pow(&a.to_le_bytes(), 16).unwrap() * x.pow(&b.to_le_bytes(), 16).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn fp12_pow_ignores_bits_above_length(
        x in strategies::fp12(),
        (exp, bits) in strategies::exponent(),
    ) {
        let clean = truncate(&exp, bits);
        prop_assert_eq!(x.pow(&exp, bits).unwrap(), x.pow(&clean, bits).unwrap());
    }

    #[test]
    fn fp12_pow_of_one_is_one((exp, bits) in strategies::exponent()) {
        prop_assert_eq!(Fp12::one().pow(&exp, bits).unwrap(), Fp12::one());
    }
}

#[test]
fn scalar_pow_agrees_with_scalar_order() {
    // x^(r-1) = 1 for every non-zero x; r - 1 has 255 bits
    let r_minus_one = (-Scalar::one()).to_bytes();
    for k in 1u64..20 {
        let x = Scalar::from(k);
        assert_eq!(x.pow(&r_minus_one, 255).unwrap(), Scalar::one());
    }
}
