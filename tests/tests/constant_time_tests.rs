//! Timing comparisons for operations that must not depend on secret data
//!
//! Wall-clock measurements are noisy on shared machines, so these are
//! ignored by default. Run them with `--ignored` on an idle host.

use blsarith_algorithms::ec::bls12_381::{Fp12, Fp2, Fp6, Scalar};
use blsarith_tests::constant_time::{TestConfig, TimingTester};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

fn assert_same_timing<A: FnMut(), B: FnMut()>(name: &str, config: &TestConfig, mut a: A, mut b: B) {
    for _ in 0..config.num_warmup {
        a();
        b();
    }

    let tester = TimingTester::from_config(config);
    let t1 = tester.measure(&mut a);
    let t2 = tester.measure(&mut b);

    let analysis = match tester.analyze(&t1, &t2, config) {
        Ok(result) => result,
        Err(e) => panic!("Analysis error: {}", e),
    };
    analysis.report(name);

    assert!(
        analysis.is_constant_time,
        "{} is not constant-time: combined_score={:.3} (threshold: {:.3})",
        name, analysis.combined_score, config.combined_score_threshold
    );
}

#[test]
#[ignore = "timing measurement"]
fn test_scalar_pow_independent_of_exponent_bits() {
    let config = TestConfig::for_pow();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let x = Scalar::random(&mut rng);
    let zeros = [0u8; 32];
    let ones = [0xffu8; 32];

    assert_same_timing(
        "Scalar::pow",
        &config,
        || {
            black_box(black_box(&x).pow(black_box(&zeros), 255).unwrap());
        },
        || {
            black_box(black_box(&x).pow(black_box(&ones), 255).unwrap());
        },
    );
}

#[test]
#[ignore = "timing measurement"]
fn test_fp12_pow_independent_of_exponent_bits() {
    let config = TestConfig::for_fp12_pow();
    let x = Fp12::from(Fp6::from(Fp2::one() + Fp2::one()));
    let sparse = {
        let mut e = [0u8; 32];
        e[0] = 1;
        e
    };
    let dense = [0xffu8; 32];

    assert_same_timing(
        "Fp12::pow",
        &config,
        || {
            black_box(black_box(&x).pow(black_box(&sparse), 255).unwrap());
        },
        || {
            black_box(black_box(&x).pow(black_box(&dense), 255).unwrap());
        },
    );
}

#[test]
#[ignore = "timing measurement"]
fn test_scalar_compare_independent_of_first_difference() {
    let config = TestConfig::for_field_op();
    let a = Scalar::from_raw([1, 2, 3, 4]);
    let low_diff = Scalar::from_raw([2, 2, 3, 4]);
    let high_diff = Scalar::from_raw([1, 2, 3, 5]);

    assert_same_timing(
        "Scalar::compare",
        &config,
        || {
            black_box(black_box(&a).compare(black_box(&low_diff)));
        },
        || {
            black_box(black_box(&a).compare(black_box(&high_diff)));
        },
    );
}

#[test]
#[ignore = "timing measurement"]
fn test_scalar_from_bytes_independent_of_validity() {
    let config = TestConfig::for_field_op();
    let valid = Scalar::from(7u64).to_bytes();
    let invalid = [0xffu8; 32];

    assert_same_timing(
        "Scalar::from_bytes",
        &config,
        || {
            black_box(Scalar::from_bytes(black_box(&valid)));
        },
        || {
            black_box(Scalar::from_bytes(black_box(&invalid)));
        },
    );
}
