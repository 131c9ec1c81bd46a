//! Fixed-length exponentiation shared by the scalar field and `Fp12`.
//!
//! The exponent is a little-endian bit string of explicit length `n`. The
//! ladder always performs `n` squarings and `n` multiplications and picks
//! the multiplied value with a constant-time select, so the running time
//! depends on `n` only. Bits at positions `>= n` are never read.

use blsarith_internal::constant_time::bit_at;
use subtle::ConditionallySelectable;

use crate::error::{validate, Result};

/// Arithmetic needed by [`pow_fixed`].
pub trait PowBase: Copy + ConditionallySelectable {
    /// Multiplicative identity
    fn one() -> Self;

    /// `self * self`
    fn square(&self) -> Self;

    /// `self * rhs`
    fn mul(&self, rhs: &Self) -> Self;
}

/// A borrowed exponent with an explicit bit length.
#[derive(Clone, Copy, Debug)]
pub struct Exponent<'a> {
    bytes: &'a [u8],
    bits: usize,
}

impl<'a> Exponent<'a> {
    /// Wrap `bytes`, of which only the low `bits` bits are significant.
    ///
    /// Fails if `bits > 8 * bytes.len()`.
    pub fn new(bytes: &'a [u8], bits: usize) -> Result<Self> {
        if let Err(e) = validate::bit_length(bits, bytes.len()) {
            log::debug!(
                "rejected exponent: {} bits requested from a {}-byte buffer",
                bits,
                bytes.len()
            );
            return Err(e);
        }
        Ok(Exponent { bytes, bits })
    }

    /// Number of significant bits
    pub fn bit_length(&self) -> usize {
        self.bits
    }
}

/// Compute `base^exp` with a square-and-multiply ladder of fixed length.
pub fn pow_fixed<F: PowBase>(base: &F, exp: &Exponent<'_>) -> F {
    let mut acc = F::one();
    for i in (0..exp.bits).rev() {
        acc = acc.square();
        let product = acc.mul(base);
        acc = F::conditional_select(&acc, &product, bit_at(exp.bytes, i));
    }
    acc
}
