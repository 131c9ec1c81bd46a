//! Hades strategy: full S-box rounds around a block of partial rounds
//!
//! A round adds one round constant per lane, applies `x^5` (to every lane in
//! a full round, to the last lane only in a partial round) and multiplies the
//! state by the MDS matrix. The first half of the full rounds runs before the
//! partial rounds and the second half after them.

use alloc::vec;
use alloc::vec::Vec;

use super::{add_constants, apply_mds, check_constants, sbox};
use crate::ec::bls12_381::Scalar;
use crate::error::{validate, Result};

/// Number of round constants consumed by one application of the permutation
pub fn number_of_constants(width: usize, full_rounds: usize, partial_rounds: usize) -> usize {
    width * (full_rounds + partial_rounds)
}

/// Hades permutation with caller supplied constants
#[derive(Clone, Debug)]
pub struct Hades {
    width: usize,
    full_rounds: usize,
    partial_rounds: usize,
    ark: Vec<Scalar>,
    mds: Vec<Vec<Scalar>>,
}

impl Hades {
    /// Set up the permutation.
    ///
    /// `full_rounds` must be even, `ark` must hold exactly
    /// [`number_of_constants`] scalars and `mds` must be `width x width`.
    pub fn new(
        width: usize,
        full_rounds: usize,
        partial_rounds: usize,
        ark: Vec<Scalar>,
        mds: Vec<Vec<Scalar>>,
    ) -> Result<Self> {
        if let Err(e) = validate::parameter(width > 0, "width", "state must have at least one lane")
        {
            log::debug!("rejected Hades setup with an empty state");
            return Err(e);
        }
        if let Err(e) = validate::parameter(full_rounds % 2 == 0, "full_rounds", "must be even") {
            log::debug!("rejected Hades setup with {} full rounds", full_rounds);
            return Err(e);
        }
        check_constants(
            "Hades round constants",
            width,
            number_of_constants(width, full_rounds, partial_rounds),
            &ark,
            &mds,
        )?;

        log::trace!(
            "Hades set up: width {}, {} full rounds, {} partial rounds",
            width,
            full_rounds,
            partial_rounds
        );

        Ok(Hades {
            width,
            full_rounds,
            partial_rounds,
            ark,
            mds,
        })
    }

    /// Number of lanes
    pub fn width(&self) -> usize {
        self.width
    }

    /// Permute `state` in place. Fails if `state.len()` is not the width.
    pub fn apply(&self, state: &mut [Scalar]) -> Result<()> {
        if let Err(e) = validate::length("Hades state", state.len(), self.width) {
            log::debug!(
                "rejected Hades state of {} lanes, width is {}",
                state.len(),
                self.width
            );
            return Err(e);
        }
        self.permute(state);
        Ok(())
    }

    /// Permute a state already known to have `width` lanes.
    pub(crate) fn permute(&self, state: &mut [Scalar]) {
        let mut scratch = vec![Scalar::zero(); self.width];
        let half = self.full_rounds / 2;

        let rounds = core::iter::repeat(true)
            .take(half)
            .chain(core::iter::repeat(false).take(self.partial_rounds))
            .chain(core::iter::repeat(true).take(half));

        for (full, round_constants) in rounds.zip(self.ark.chunks_exact(self.width)) {
            add_constants(state, round_constants);
            if full {
                state.iter_mut().for_each(sbox);
            } else if let Some(last) = state.last_mut() {
                sbox(last);
            }
            apply_mds(&self.mds, state, &mut scratch);
        }
    }
}
