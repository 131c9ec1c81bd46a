//! Poseidon128: the Hades strategy with three lanes, 8 full and 56 partial
//! rounds

use alloc::vec::Vec;

use blsarith_params::permutation::{
    POSEIDON128_FULL_ROUNDS, POSEIDON128_PARTIAL_ROUNDS, POSEIDON128_WIDTH,
};

use super::{Hades, Permutation};
use crate::ec::bls12_381::Scalar;
use crate::error::Result;

/// Poseidon128 context: the constants and a three-lane state
#[derive(Clone, Debug)]
pub struct Poseidon128 {
    hades: Hades,
    state: [Scalar; POSEIDON128_WIDTH],
}

impl Poseidon128 {
    /// Number of round constants expected by [`Poseidon128::new`]
    pub const NB_CONSTANTS: usize =
        POSEIDON128_WIDTH * (POSEIDON128_FULL_ROUNDS + POSEIDON128_PARTIAL_ROUNDS);

    /// Build a context with a zero state.
    ///
    /// Fails unless `ark` has [`Poseidon128::NB_CONSTANTS`] entries and `mds`
    /// is 3 x 3.
    pub fn new(ark: Vec<Scalar>, mds: Vec<Vec<Scalar>>) -> Result<Self> {
        let hades = Hades::new(
            POSEIDON128_WIDTH,
            POSEIDON128_FULL_ROUNDS,
            POSEIDON128_PARTIAL_ROUNDS,
            ark,
            mds,
        )?;

        Ok(Poseidon128 {
            hades,
            state: [Scalar::zero(); POSEIDON128_WIDTH],
        })
    }
}

impl Permutation for Poseidon128 {
    fn init(&mut self, a: &Scalar, b: &Scalar, c: &Scalar) {
        self.state = [*a, *b, *c];
    }

    fn apply_perm(&mut self) {
        self.hades.permute(&mut self.state);
    }

    fn state(&self) -> [Scalar; 3] {
        self.state
    }
}
