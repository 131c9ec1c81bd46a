//! Rescue over three lanes
//!
//! Each of the 14 rounds is two half rounds. The first applies the inverse
//! power map `x^(1/5)`, the second `x^5`, and both are followed by the MDS
//! matrix and a fresh set of round constants. One extra set of constants is
//! added before the first round.

use alloc::vec::Vec;

use blsarith_params::permutation::{
    RESCUE_ROUNDS, RESCUE_WIDTH, SBOX_ALPHA_INV, SBOX_ALPHA_INV_BITS,
};

use super::{add_constants, apply_mds, check_constants, sbox, Permutation};
use crate::ec::bls12_381::{pow_fixed, Exponent, Scalar};
use crate::error::Result;

/// Rescue context: the constants and a three-lane state
#[derive(Clone, Debug)]
pub struct Rescue {
    ark: Vec<Scalar>,
    mds: Vec<Vec<Scalar>>,
    alpha_inv: Exponent<'static>,
    state: [Scalar; RESCUE_WIDTH],
}

impl Rescue {
    /// Number of round constants expected by [`Rescue::new`]
    pub const NB_CONSTANTS: usize = RESCUE_WIDTH * (2 * RESCUE_ROUNDS + 1);

    /// Build a context with a zero state.
    ///
    /// Fails unless `ark` has [`Rescue::NB_CONSTANTS`] entries and `mds` is
    /// 3 x 3.
    pub fn new(ark: Vec<Scalar>, mds: Vec<Vec<Scalar>>) -> Result<Self> {
        check_constants(
            "Rescue round constants",
            RESCUE_WIDTH,
            Self::NB_CONSTANTS,
            &ark,
            &mds,
        )?;
        let alpha_inv = Exponent::new(&SBOX_ALPHA_INV, SBOX_ALPHA_INV_BITS)?;

        log::trace!("Rescue set up: width {}, {} rounds", RESCUE_WIDTH, RESCUE_ROUNDS);

        Ok(Rescue {
            ark,
            mds,
            alpha_inv,
            state: [Scalar::zero(); RESCUE_WIDTH],
        })
    }

    /// `x^(1/5)`, the inverse of the `x^5` S-box
    pub fn inverse_sbox(&self, x: &Scalar) -> Scalar {
        pow_fixed(x, &self.alpha_inv)
    }
}

impl Permutation for Rescue {
    fn init(&mut self, a: &Scalar, b: &Scalar, c: &Scalar) {
        self.state = [*a, *b, *c];
    }

    fn apply_perm(&mut self) {
        let mut scratch = [Scalar::zero(); RESCUE_WIDTH];
        let (first, rest) = self.ark.split_at(RESCUE_WIDTH);
        let mut state = self.state;

        add_constants(&mut state, first);
        for round in rest.chunks_exact(2 * RESCUE_WIDTH) {
            let (c1, c2) = round.split_at(RESCUE_WIDTH);

            for x in state.iter_mut() {
                *x = self.inverse_sbox(x);
            }
            apply_mds(&self.mds, &mut state, &mut scratch);
            add_constants(&mut state, c1);

            state.iter_mut().for_each(sbox);
            apply_mds(&self.mds, &mut state, &mut scratch);
            add_constants(&mut state, c2);
        }

        self.state = state;
    }

    fn state(&self) -> [Scalar; 3] {
        self.state
    }
}
