//! Cubic extension `Fp6 = Fp2[v] / (v^3 - (u + 1))`

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use blsarith_params::bls12_381::BLS12_381_FP2_SIZE;
#[cfg(test)]
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp2::Fp2;

/// Element `c0 + c1 * v + c2 * v^2`
#[derive(Copy, Clone)]
pub struct Fp6 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of `v`
    pub c1: Fp2,
    /// Coefficient of `v^2`
    pub c2: Fp2,
}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

impl Default for Fp6 {
    fn default() -> Self {
        Fp6::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp6 {}

impl From<Fp2> for Fp6 {
    fn from(f: Fp2) -> Fp6 {
        Fp6 {
            c0: f,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }
}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Eq for Fp6 {}
impl PartialEq for Fp6 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl Fp6 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Decode `c0 || c1 || c2`
    pub(crate) fn from_bytes(bytes: &[u8; 288]) -> CtOption<Fp6> {
        let mut parts = [[0u8; BLS12_381_FP2_SIZE]; 3];
        for (i, part) in parts.iter_mut().enumerate() {
            part.copy_from_slice(&bytes[i * BLS12_381_FP2_SIZE..(i + 1) * BLS12_381_FP2_SIZE]);
        }
        let c0 = Fp2::from_bytes(&parts[0]);
        let c1 = Fp2::from_bytes(&parts[1]);
        let c2 = Fp2::from_bytes(&parts[2]);

        c0.and_then(|c0| c1.and_then(|c1| c2.map(|c2| Fp6 { c0, c1, c2 })))
    }

    /// Encode as `c0 || c1 || c2`
    pub(crate) fn to_bytes(&self) -> [u8; 288] {
        let mut res = [0u8; 288];
        res[..BLS12_381_FP2_SIZE].copy_from_slice(&self.c0.to_bytes());
        res[BLS12_381_FP2_SIZE..2 * BLS12_381_FP2_SIZE].copy_from_slice(&self.c1.to_bytes());
        res[2 * BLS12_381_FP2_SIZE..].copy_from_slice(&self.c2.to_bytes());
        res
    }

    #[cfg(test)]
    pub(crate) fn random(mut rng: impl RngCore) -> Self {
        Fp6 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }

    /// Multiply by the quadratic non-residue `v`
    #[inline(always)]
    pub fn mul_by_nonresidue(&self) -> Self {
        // (c0 + c1 v + c2 v^2) v = c2 (u + 1) + c0 v + c1 v^2
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Karatsuba multiplication, six `Fp2` multiplications
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let cc = self.c2 * rhs.c2;

        let t1 = ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - bb - cc).mul_by_nonresidue() + aa;
        let t2 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb + cc.mul_by_nonresidue();
        let t3 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - aa + bb - cc;

        Fp6 {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }

    /// Chung-Hasan SQR2 squaring
    pub fn square(&self) -> Self {
        let s0 = self.c0.square();
        let ab = self.c0 * self.c1;
        let s1 = ab + ab;
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let bc = self.c1 * self.c2;
        let s3 = bc + bc;
        let s4 = self.c2.square();

        Fp6 {
            c0: s3.mul_by_nonresidue() + s0,
            c1: s4.mul_by_nonresidue() + s1,
            c2: s1 + s2 + s3 - s0 - s4,
        }
    }

    /// Multiplicative inverse, `None` for zero
    pub fn invert(&self) -> CtOption<Self> {
        let c0 = (self.c1 * self.c2).mul_by_nonresidue();
        let c0 = self.c0.square() - c0;

        let c1 = self.c2.square().mul_by_nonresidue();
        let c1 = c1 - (self.c0 * self.c1);

        let c2 = self.c1.square();
        let c2 = c2 - (self.c0 * self.c2);

        let tmp = ((self.c1 * c2) + (self.c2 * c1)).mul_by_nonresidue();
        let tmp = tmp + (self.c0 * c0);

        tmp.invert().map(|t| Fp6 {
            c0: t * c0,
            c1: t * c1,
            c2: t * c2,
        })
    }
}

impl<'a> Neg for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn neg(self) -> Fp6 {
        Fp6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }
}

impl Neg for Fp6 {
    type Output = Fp6;

    #[inline]
    fn neg(self) -> Fp6 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn sub(self, rhs: &'b Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }
}

impl<'a, 'b> Add<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn add(self, rhs: &'b Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }
}

impl<'a, 'b> Mul<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn mul(self, rhs: &'b Fp6) -> Fp6 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp6, Fp6);
impl_binops_multiplicative!(Fp6, Fp6);
