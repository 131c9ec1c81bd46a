//! Algebraic permutations over the BLS12-381 scalar field
//!
//! Both permutations work on a state of three scalars and are built from the
//! same pieces: round constant addition, a power map S-box and a linear layer
//! given by an MDS matrix. Constants are supplied by the caller.

use alloc::vec::Vec;

use crate::ec::bls12_381::Scalar;
use crate::error::{validate, Result};

pub mod hades;
pub mod poseidon128;
pub mod rescue;


pub use hades::{number_of_constants, Hades};
pub use poseidon128::Poseidon128;
pub use rescue::Rescue;

/// A keyed permutation over a state of three scalars
pub trait Permutation {
    /// Replace the whole state
    fn init(&mut self, a: &Scalar, b: &Scalar, c: &Scalar);

    /// Apply the permutation to the current state in place
    fn apply_perm(&mut self);

    /// Copy of the current state
    fn state(&self) -> [Scalar; 3];
}

/// `x^5`
#[inline(always)]
pub(crate) fn sbox(x: &mut Scalar) {
    let x2 = x.square();
    *x *= x2.square();
}

#[inline(always)]
pub(crate) fn add_constants(state: &mut [Scalar], constants: &[Scalar]) {
    for (s, c) in state.iter_mut().zip(constants) {
        *s += c;
    }
}

/// `state <- mds * state`, using `scratch` as the output buffer
pub(crate) fn apply_mds(mds: &[Vec<Scalar>], state: &mut [Scalar], scratch: &mut [Scalar]) {
    for (out, row) in scratch.iter_mut().zip(mds) {
        *out = row
            .iter()
            .zip(state.iter())
            .fold(Scalar::zero(), |acc, (m, s)| acc + m * s);
    }
    state.copy_from_slice(scratch);
}

/// Check the shape of caller supplied constants.
pub(crate) fn check_constants(
    context: &'static str,
    width: usize,
    expected_constants: usize,
    ark: &[Scalar],
    mds: &[Vec<Scalar>],
) -> Result<()> {
    if let Err(e) = validate::length(context, ark.len(), expected_constants) {
        log::debug!(
            "{}: got {} round constants, expected {}",
            context,
            ark.len(),
            expected_constants
        );
        return Err(e);
    }

    let square = mds.len() == width && mds.iter().all(|row| row.len() == width);
    if let Err(e) = validate::parameter(square, "mds", "matrix must be width x width") {
        log::debug!("{}: MDS matrix has {} rows, width is {}", context, mds.len(), width);
        return Err(e);
    }

    Ok(())
}
