//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use blsarith_params::bls12_381::{BLS12_381_FP2_SIZE, BLS12_381_FP_SIZE};
#[cfg(test)]
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;

/// Element `c0 + c1 * u` of the quadratic extension
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Constant coefficient
    pub c0: Fp,
    /// Coefficient of `u`
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Fp2 {
    /// Encoded size in bytes
    pub const SIZE: usize = BLS12_381_FP2_SIZE;

    /// Build from two coordinates, no arithmetic performed
    #[inline]
    pub const fn assign(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Constant coefficient
    pub const fn c0(&self) -> Fp {
        self.c0
    }

    /// Coefficient of `u`
    pub const fn c1(&self) -> Fp {
        self.c1
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Decode the two coordinates separately. Fails if either is not a
    /// canonical `Fp` encoding.
    pub fn from_component_bytes(c0: &[u8; 48], c1: &[u8; 48]) -> CtOption<Fp2> {
        let c0 = Fp::from_bytes(c0);
        let c1 = Fp::from_bytes(c1);

        c0.and_then(|c0| c1.map(|c1| Fp2 { c0, c1 }))
    }

    /// Decode `c0 || c1`
    pub fn from_bytes(bytes: &[u8; 96]) -> CtOption<Fp2> {
        let mut c0 = [0u8; BLS12_381_FP_SIZE];
        let mut c1 = [0u8; BLS12_381_FP_SIZE];
        c0.copy_from_slice(&bytes[..BLS12_381_FP_SIZE]);
        c1.copy_from_slice(&bytes[BLS12_381_FP_SIZE..]);
        Fp2::from_component_bytes(&c0, &c1)
    }

    /// Encode as `c0 || c1`
    pub fn to_bytes(&self) -> [u8; 96] {
        let mut res = [0u8; 96];
        res[..BLS12_381_FP_SIZE].copy_from_slice(&self.c0.to_bytes());
        res[BLS12_381_FP_SIZE..].copy_from_slice(&self.c1.to_bytes());
        res
    }

    #[cfg(test)]
    pub(crate) fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Complex conjugate `c0 - c1 * u`
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiply by the cubic non-residue `u + 1`
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (a + bu)(u + 1) = (a - b) + (a + b)u
        Fp2 {
            c0: self.c0 - self.c1,
            c1: self.c0 + self.c1,
        }
    }

    /// Square this element
    pub const fn square(&self) -> Fp2 {
        // Complex squaring:
        //   c0' = (c0 + c1)(c0 - c1)
        //   c1' = 2 * c0 * c1
        let a = (&self.c0).add(&self.c1);
        let b = (&self.c0).sub(&self.c1);
        let c = (&self.c0).add(&self.c0);

        Fp2 {
            c0: (&a).mul(&b),
            c1: (&c).mul(&self.c1),
        }
    }

    /// Multiply two elements with three base field multiplications
    pub const fn mul(&self, rhs: &Fp2) -> Fp2 {
        // Karatsuba:
        //   c0' = a0 b0 - a1 b1
        //   c1' = (a0 + a1)(b0 + b1) - a0 b0 - a1 b1
        let aa = (&self.c0).mul(&rhs.c0);
        let bb = (&self.c1).mul(&rhs.c1);
        let s = (&self.c0).add(&self.c1);
        let t = (&rhs.c0).add(&rhs.c1);

        Fp2 {
            c0: (&aa).sub(&bb),
            c1: (&(&(&s).mul(&t)).sub(&aa)).sub(&bb),
        }
    }

    /// Add two elements
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).add(&rhs.c0),
            c1: (&self.c1).add(&rhs.c1),
        }
    }

    /// Subtract two elements
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).sub(&rhs.c0),
            c1: (&self.c1).sub(&rhs.c1),
        }
    }

    /// Negate this element
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: (&self.c0).neg(),
            c1: (&self.c1).neg(),
        }
    }

    /// Multiplicative inverse, `None` for zero
    pub fn invert(&self) -> CtOption<Self> {
        // 1 / (a + bu) = (a - bu) / (a^2 + b^2)
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: self.c1 * -t,
        })
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn neg(self) -> Fp2 {
        self.neg()
    }
}

impl Neg for Fp2 {
    type Output = Fp2;

    #[inline]
    fn neg(self) -> Fp2 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp2, Fp2);
impl_binops_multiplicative!(Fp2, Fp2);
