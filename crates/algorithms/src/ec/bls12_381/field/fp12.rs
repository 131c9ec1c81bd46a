//! Degree-12 extension `Fp12 = Fp6[w] / (w^2 - v)`, home of the pairing
//! target group.
//!
//! Canonical encoding is the six `Fp2` coefficients in the order
//! `c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2`, 576 bytes in total.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use blsarith_params::bls12_381::{BLS12_381_FP12_SIZE, BLS12_381_FP6_SIZE};
#[cfg(test)]
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp6::Fp6;
use crate::ec::bls12_381::pow::{pow_fixed, Exponent, PowBase};
use crate::error::{validate, Error, Result};
use crate::types::FixedSize;

/// Element `c0 + c1 * w`
#[derive(Copy, Clone)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp6,
    /// Coefficient of `w`
    pub c1: Fp6,
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w", self.c0, self.c1)
    }
}

impl Default for Fp12 {
    fn default() -> Self {
        Fp12::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp12 {}

impl From<Fp6> for Fp12 {
    fn from(f: Fp6) -> Fp12 {
        Fp12 {
            c0: f,
            c1: Fp6::zero(),
        }
    }
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl FixedSize for Fp12 {
    fn size() -> usize {
        Self::SIZE
    }
}

impl Fp12 {
    /// Encoded size in bytes
    pub const SIZE: usize = BLS12_381_FP12_SIZE;

    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    /// True iff all six `Fp2` coefficients are zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Constant-time decoding of the canonical 576-byte layout
    pub fn from_array(bytes: &[u8; 576]) -> CtOption<Fp12> {
        let mut lo = [0u8; BLS12_381_FP6_SIZE];
        let mut hi = [0u8; BLS12_381_FP6_SIZE];
        lo.copy_from_slice(&bytes[..BLS12_381_FP6_SIZE]);
        hi.copy_from_slice(&bytes[BLS12_381_FP6_SIZE..]);

        let c0 = Fp6::from_bytes(&lo);
        let c1 = Fp6::from_bytes(&hi);

        c0.and_then(|c0| c1.map(|c1| Fp12 { c0, c1 }))
    }

    /// Decode from a byte slice of exactly [`Fp12::SIZE`] bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Fp12> {
        let array: &[u8; 576] = match bytes.try_into() {
            Ok(array) => array,
            Err(_) => {
                log::debug!("rejected Fp12 encoding of {} bytes", bytes.len());
                return Err(Error::Length {
                    context: "Fp12::from_bytes",
                    expected: Self::SIZE,
                    actual: bytes.len(),
                });
            }
        };

        let decoded = Fp12::from_array(array);
        if decoded.is_none().into() {
            log::debug!("rejected non-canonical Fp12 encoding");
        }
        validate::canonical(decoded.is_some().into(), "Fp12")?;
        Ok(decoded.unwrap_or(Fp12::zero()))
    }

    /// Encode into the canonical 576-byte layout
    pub fn to_bytes(&self) -> [u8; 576] {
        let mut res = [0u8; 576];
        res[..BLS12_381_FP6_SIZE].copy_from_slice(&self.c0.to_bytes());
        res[BLS12_381_FP6_SIZE..].copy_from_slice(&self.c1.to_bytes());
        res
    }

    #[cfg(test)]
    pub(crate) fn random(mut rng: impl RngCore) -> Self {
        Fp12 {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }

    /// Conjugate over `Fp6`: `c0 - c1 * w`
    #[inline(always)]
    pub fn conjugate(&self) -> Self {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Complex squaring, two `Fp6` multiplications
    pub fn square(&self) -> Self {
        let ab = self.c0 * self.c1;
        let c0c1 = self.c0 + self.c1;
        let c0 = self.c1.mul_by_nonresidue() + self.c0;
        let c0 = c0 * c0c1 - ab - ab.mul_by_nonresidue();
        let c1 = ab + ab;

        Fp12 { c0, c1 }
    }

    /// Karatsuba multiplication, three `Fp6` multiplications
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let o = rhs.c0 + rhs.c1;
        let c1 = (self.c1 + self.c0) * o - aa - bb;
        let c0 = bb.mul_by_nonresidue() + aa;

        Fp12 { c0, c1 }
    }

    /// Multiplicative inverse, `None` for zero
    pub fn invert(&self) -> CtOption<Self> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fp12 {
                c0: self.c0 * t,
                c1: self.c1 * -t,
            })
    }

    /// Raise to the power given by the low `exp_bit_length` bits of the
    /// little-endian `exp`.
    ///
    /// Runs in time dependent only on `exp_bit_length`. Fails if
    /// `exp_bit_length > 8 * exp.len()`.
    pub fn pow(&self, exp: &[u8], exp_bit_length: usize) -> Result<Fp12> {
        let exp = Exponent::new(exp, exp_bit_length)?;
        Ok(pow_fixed(self, &exp))
    }
}

impl PowBase for Fp12 {
    fn one() -> Self {
        Fp12::one()
    }

    fn square(&self) -> Self {
        Fp12::square(self)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Fp12::mul(self, rhs)
    }
}

impl<'a> Neg for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn neg(self) -> Fp12 {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }
}

impl Neg for Fp12 {
    type Output = Fp12;

    #[inline]
    fn neg(self) -> Fp12 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn sub(self, rhs: &'b Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }
}

impl<'a, 'b> Add<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn add(self, rhs: &'b Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }
}

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn mul(self, rhs: &'b Fp12) -> Fp12 {
        Fp12::mul(self, rhs)
    }
}

impl_binops_additive!(Fp12, Fp12);
impl_binops_multiplicative!(Fp12, Fp12);
