//! Point construction tests for G1 and G2

use super::super::{Fp, Fp2, G1Affine, G1Projective, G2Affine, G2Projective};
use crate::types::FixedSize;

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use subtle::ConditionallySelectable;

// ============================================================================
// G1 Tests
// ============================================================================

#[test]
fn test_g1_is_on_curve() {
    assert!(bool::from(G1Affine::identity().is_on_curve()));
    assert!(bool::from(G1Affine::generator().is_on_curve()));
    assert!(bool::from(G1Projective::identity().is_on_curve()));
    assert!(bool::from(G1Projective::generator().is_on_curve()));

    // Scaling the projective coordinates keeps the point on the curve
    let z = Fp::from_raw_unchecked([
        0xba7a_fa1f_9a6f_e250,
        0xfa0f_5b59_5eaf_e731,
        0x3bdc_4776_94c3_06e7,
        0x2149_be4b_3949_fa24,
        0x64aa_6e06_49b2_078c,
        0x12b1_08ac_3364_3c3e,
    ]);
    let gen = G1Affine::generator();
    let mut test = G1Projective {
        x: gen.x * z,
        y: gen.y * z,
        z,
    };
    assert!(bool::from(test.is_on_curve()));

    test.x = z;
    assert!(!bool::from(test.is_on_curve()));
}

#[test]
fn test_g1_set_coordinates_unchecked() {
    let g = G1Affine::generator();
    let p = G1Projective::from_coordinates_unchecked(g.x(), g.y());
    assert_eq!(p.x(), g.x());
    assert_eq!(p.y(), g.y());
    assert_eq!(p.z(), Fp::one());
    assert_eq!(p, G1Projective::generator());
    assert_eq!(G1Affine::from(p), g);
}

#[test]
fn test_g1_unchecked_accepts_off_curve() {
    let one = Fp::one();
    let p = G1Projective::from_coordinates_unchecked(one, one);
    assert_eq!(p.x(), one);
    assert_eq!(p.y(), one);
    assert!(!bool::from(p.is_on_curve()));
    assert!(!bool::from(p.is_identity()));

    // The validated constructor refuses the same coordinates
    assert!(bool::from(G1Projective::from_coordinates(one, one).is_none()));
    assert!(bool::from(G1Affine::from_coordinates(one, one).is_none()));

    let g = G1Affine::generator();
    assert!(bool::from(G1Affine::from_coordinates(g.x(), g.y()).is_some()));
}

#[test]
fn test_g1_affine_projective_equality() {
    let a = G1Projective::generator();
    let b = G1Projective::identity();

    assert!(a == a);
    assert!(b == b);
    assert!(a != b);

    let z = Fp::from_raw_unchecked([
        0xba7a_fa1f_9a6f_e250,
        0xfa0f_5b59_5eaf_e731,
        0x3bdc_4776_94c3_06e7,
        0x2149_be4b_3949_fa24,
        0x64aa_6e06_49b2_078c,
        0x12b1_08ac_3364_3c3e,
    ]);
    let c = G1Projective {
        x: a.x * z,
        y: a.y * z,
        z,
    };
    assert!(bool::from(c.is_on_curve()));
    assert!(a == c);
    assert!(G1Affine::from(c) == G1Affine::from(a));
    assert!(bool::from(G1Affine::from(b).is_identity()));
    assert!(G1Projective::from(G1Affine::identity()) == b);
}

#[test]
fn test_g1_conditional_selection() {
    let a = G1Affine::generator();
    let b = G1Affine::identity();

    assert_eq!(G1Affine::conditional_select(&a, &b, 0u8.into()), a);
    assert_eq!(G1Affine::conditional_select(&a, &b, 1u8.into()), b);
}

#[test]
fn test_g1_sizes() {
    assert_eq!(G1Affine::SIZE, 96);
    assert_eq!(G1Projective::SIZE, 144);
    assert_eq!(G1Affine::size(), 2 * Fp::SIZE);
    assert_eq!(G1Projective::size(), 3 * Fp::SIZE);
}

// ============================================================================
// G2 Tests
// ============================================================================

#[test]
fn test_g2_is_on_curve() {
    assert!(bool::from(G2Affine::identity().is_on_curve()));
    assert!(bool::from(G2Affine::generator().is_on_curve()));
    assert!(bool::from(G2Projective::identity().is_on_curve()));
    assert!(bool::from(G2Projective::generator().is_on_curve()));

    let mut rng = ChaCha20Rng::seed_from_u64(0x92);
    let z = Fp2::random(&mut rng);
    let gen = G2Affine::generator();
    let mut test = G2Projective {
        x: gen.x * z,
        y: gen.y * z,
        z,
    };
    assert!(bool::from(test.is_on_curve()));
    assert_eq!(G2Affine::from(test), gen);

    test.x = z;
    assert!(!bool::from(test.is_on_curve()));
}

#[test]
fn test_g2_set_coordinates_unchecked() {
    let g = G2Affine::generator();
    let p = G2Projective::from_coordinates_unchecked(g.x(), g.y());
    assert_eq!(p.z(), Fp2::one());
    assert_eq!(p, G2Projective::generator());

    let junk = Fp2::assign(Fp::one(), Fp::one());
    let q = G2Projective::from_coordinates_unchecked(junk, junk);
    assert_eq!(q.x(), junk);
    assert_eq!(q.y(), junk);
    assert!(!bool::from(q.is_on_curve()));
    assert!(bool::from(G2Projective::from_coordinates(junk, junk).is_none()));

    let a = G2Affine::from_coordinates_unchecked(junk, junk);
    assert_eq!(a.x(), junk);
    assert!(!bool::from(a.is_identity()));
}

#[test]
fn test_g2_sizes() {
    assert_eq!(G2Affine::SIZE, 192);
    assert_eq!(G2Projective::SIZE, 288);
    assert_eq!(G2Affine::size(), 2 * Fp2::SIZE);
    assert_eq!(G2Projective::size(), 3 * Fp2::SIZE);
}

#[test]
fn test_identity_round_trips() {
    assert_eq!(
        G2Projective::from(G2Affine::from(G2Projective::identity())),
        G2Projective::identity()
    );
    assert!(bool::from(G2Affine::default().is_identity()));
    assert!(bool::from(G1Projective::default().is_identity()));
}
