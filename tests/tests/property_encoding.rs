//! Property-based tests for the fixed-width encodings

use blsarith_algorithms::ec::bls12_381::{Fp, Fp12, Fp2, Scalar};
use blsarith_algorithms::Error;
use blsarith_tests::strategies;
use proptest::prelude::*;

proptest! {
    #[test]
    fn scalar_bytes_roundtrip(bytes in strategies::scalar_bytes()) {
        let s = Scalar::from_bytes(&bytes).unwrap();
        prop_assert_eq!(s.to_bytes(), bytes);
    }

    #[test]
    fn scalar_compare_matches_integer_order(
        a in strategies::scalar_bytes(),
        b in strategies::scalar_bytes(),
    ) {
        let sa = Scalar::from_bytes(&a).unwrap();
        let sb = Scalar::from_bytes(&b).unwrap();

        // Little-endian bytes, so compare from the most significant end
        let mut ra = a;
        let mut rb = b;
        ra.reverse();
        rb.reverse();

        prop_assert_eq!(sa.compare(&sb), ra.cmp(&rb));
        prop_assert_eq!(sb.compare(&sa), rb.cmp(&ra));
        prop_assert_eq!(sa.cmp(&sb), sa.compare(&sb));
    }

    #[test]
    fn fp2_bytes_roundtrip(bytes in strategies::fp2_bytes()) {
        let mut arr = [0u8; 96];
        arr.copy_from_slice(&bytes);
        let x = Fp2::from_bytes(&arr).unwrap();
        prop_assert_eq!(x.to_bytes().to_vec(), bytes);
    }

    #[test]
    fn fp2_components_match_halves(x in strategies::fp2()) {
        let bytes = x.to_bytes();
        prop_assert_eq!(&bytes[..48], &x.c0().to_bytes()[..]);
        prop_assert_eq!(&bytes[48..], &x.c1().to_bytes()[..]);
        prop_assert_eq!(Fp2::assign(x.c0(), x.c1()), x);
    }

    #[test]
    fn fp12_bytes_roundtrip(bytes in strategies::fp12_bytes()) {
        let x = Fp12::from_bytes(&bytes).unwrap();
        prop_assert_eq!(x.to_bytes().to_vec(), bytes);
    }

    #[test]
    fn fp12_rejects_wrong_length(len in 0usize..1200) {
        prop_assume!(len != Fp12::SIZE);
        let bytes = vec![0u8; len];
        let is_length_error = matches!(
            Fp12::from_bytes(&bytes),
            Err(Error::Length { expected: 576, .. })
        );
        prop_assert!(is_length_error);
    }

    #[test]
    fn fp12_rejects_non_canonical_component(
        bytes in strategies::fp12_bytes(),
        component in 0usize..12,
    ) {
        // All-ones limb is above the modulus
        let mut bytes = bytes;
        for b in &mut bytes[component * Fp::SIZE..(component + 1) * Fp::SIZE] {
            *b = 0xff;
        }
        prop_assert!(Fp12::from_bytes(&bytes).is_err());
    }
}
