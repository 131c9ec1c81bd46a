//! The facade crate and its prelude expose the whole arithmetic surface

use blsarith::params::bls12_381::{
    BLS12_381_FP12_SIZE, BLS12_381_FP2_SIZE, BLS12_381_FP_SIZE, BLS12_381_SCALAR_SIZE,
};
use blsarith::prelude::*;

#[test]
fn sizes_agree_with_params() {
    assert_eq!(Scalar::size(), BLS12_381_SCALAR_SIZE);
    assert_eq!(Fp::SIZE, BLS12_381_FP_SIZE);
    assert_eq!(Fp2::SIZE, BLS12_381_FP2_SIZE);
    assert_eq!(Fp12::size(), BLS12_381_FP12_SIZE);
    assert_eq!(G1Affine::size(), 2 * BLS12_381_FP_SIZE);
    assert_eq!(G2Projective::size(), 3 * BLS12_381_FP2_SIZE);
}

#[test]
fn serialize_trait_reports_api_errors() {
    let err = <Fp12 as Serialize>::from_bytes(&[0u8; 10]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLength {
            expected: 576,
            actual: 10,
            ..
        }
    ));

    let one = <Fp2 as Serialize>::to_bytes(&Fp2::one());
    assert_eq!(one.len(), 96);
    assert_eq!(one[0], 1);
    assert!(one[1..].iter().all(|&b| b == 0));
}

#[test]
fn secret_scalar_roundtrip() {
    let s = Scalar::from(0x1234_5678u64);
    let bytes = s.to_bytes_zeroizing();
    assert_eq!(&bytes[..4], &[0x78, 0x56, 0x34, 0x12]);
    assert_eq!(<Scalar as SerializeSecret>::from_bytes(&bytes).unwrap(), s);
}

#[test]
fn points_from_raw_coordinates() {
    let g = G1Affine::generator();
    let p = G1Projective::from_coordinates_unchecked(g.x(), g.y());
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(G1Affine::from(p), g);

    // Off-curve coordinates are stored as given
    let q = G1Affine::from_coordinates_unchecked(Fp::one(), Fp::one());
    assert!(!bool::from(q.is_on_curve()));
    assert_eq!(q.x(), Fp::one());
    assert!(bool::from(G1Affine::from_coordinates(Fp::one(), Fp::one()).is_none()));

    let h = G2Affine::generator();
    let r = G2Projective::from_coordinates_unchecked(h.x(), h.y());
    assert_eq!(G2Affine::from(r), h);
}

#[test]
fn shared_ladder_through_prelude() {
    let x = Scalar::from(2u64);
    let exp = Exponent::new(&[10], 4).unwrap();
    assert_eq!(pow_fixed(&x, &exp), Scalar::from(1024u64));
    assert_eq!(x.pow(&[10], 4).unwrap(), Scalar::from(1024u64));
}

#[test]
fn permutations_through_prelude() {
    let identity: Vec<Vec<Scalar>> = (0..3)
        .map(|i| {
            (0..3)
                .map(|j| Scalar::from((i == j) as u64))
                .collect()
        })
        .collect();

    let mut rescue = Rescue::new(vec![Scalar::zero(); Rescue::NB_CONSTANTS], identity.clone())
        .unwrap();
    let input = [Scalar::from(5u64), Scalar::from(6u64), Scalar::from(7u64)];
    rescue.init(&input[0], &input[1], &input[2]);
    rescue.apply_perm();
    assert_eq!(rescue.state(), input);

    let mut poseidon =
        Poseidon128::new(vec![Scalar::zero(); Poseidon128::NB_CONSTANTS], identity).unwrap();
    poseidon.init(&Scalar::zero(), &Scalar::zero(), &Scalar::one());
    poseidon.apply_perm();
    // 0 and 1 are fixed points of x^5
    assert_eq!(poseidon.state(), [Scalar::zero(), Scalar::zero(), Scalar::one()]);
}
