//! Base field of secp256k1. p = 2^256 - 2^32 - 977.
//!
//! Elements store their canonical representative as a `BigUint` in [0, p).
//! Arithmetic goes through the modular kernel; inversion uses the extended
//! Euclidean algorithm and is not constant-time.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bignum;
use crate::modular;

/// Base field modulus p = 2^256 - 2^32 - 977.
pub static P: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        16,
    )
    .expect("base field modulus")
});

// (p + 1) / 4; square roots are u^((p+1)/4) because p = 3 (mod 4).
static SQRT_EXP: LazyLock<BigUint> = LazyLock::new(|| (&*P + 1u32) >> 2u32);

/// Base field element, canonical representative in [0, p).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fp(BigUint);

impl Fp {
    pub fn zero() -> Self {
        Fp(BigUint::zero())
    }

    pub fn one() -> Self {
        Fp(BigUint::one())
    }

    /// Reduce an arbitrary non-negative integer into the field.
    pub fn from_int(v: BigUint) -> Self {
        Fp(v % &*P)
    }

    /// Wrap an integer already known to be below p; None otherwise.
    pub fn try_from_int(v: BigUint) -> Option<Self> {
        if v < *P {
            Some(Fp(v))
        } else {
            None
        }
    }

    pub fn from_u64(v: u64) -> Self {
        Self::from_int(BigUint::from(v))
    }

    /// Decode big-endian bytes, rejecting values >= p.
    pub fn try_from_bytes(bytes: &[u8]) -> Option<Self> {
        Self::try_from_int(bignum::decode_be(bytes))
    }

    /// Fixed-width big-endian encoding of the representative.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        bignum::encode_be_padded(32, &self.0)
            .try_into()
            .expect("base field element byte length")
    }

    pub fn as_int(&self) -> &BigUint {
        &self.0
    }

    pub fn into_int(self) -> BigUint {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parity of the canonical representative.
    #[inline]
    pub fn is_even(&self) -> bool {
        !self.0.bit(0)
    }

    pub fn square(&self) -> Self {
        Fp(modular::sqr(&self.0, &P))
    }

    pub fn pow(&self, exp: &BigUint) -> Self {
        Fp(modular::pow(&self.0, exp, &P))
    }

    /// Multiplicative inverse; zero maps to zero.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(Fp::zero)
    }

    pub fn try_inverse(&self) -> Option<Self> {
        modular::inv(&self.0, &P).map(Fp)
    }

    /// Square root of a quadratic residue.
    ///
    /// Computes u^((p+1)/4) and checks it; returns None for non-residues.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow(&SQRT_EXP);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}

impl Add for Fp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fp(modular::add(&self.0, &rhs.0, &P))
    }
}

impl AddAssign for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Sub for Fp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fp(modular::sub(&self.0, &rhs.0, &P))
    }
}

impl SubAssign for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Neg for Fp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp(modular::neg(&self.0, &P))
    }
}

impl Mul for Fp {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Fp(modular::mul(&self.0, &rhs.0, &P))
    }
}

impl MulAssign for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl Div for Fp {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Fp {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl Display for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:064x}", self.0)
    }
}

impl Debug for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({})", self)
    }
}

impl Distribution<Fp> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp {
        loop {
            let bytes: [u8; 32] = rng.random();
            let v = bignum::decode_be(&bytes);
            if v < *P {
                return Fp(v);
            }
        }
    }
}
