//! Scalar field of the secp256k1 group.
//! n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//!
//! Elements store their canonical representative as a `BigUint` in [0, n).
//! Secret keys, signing nonces, and message digests all reduce into this
//! field through `from_bytes_reduced`.

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

/// Order of the group generated by the secp256k1 base point.
pub static N: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        16,
    )
    .expect("scalar field modulus")
});

// (n + 1) / 2; scalars at or above this are the "high" half.
static N_HALF: LazyLock<BigUint> = LazyLock::new(|| (&*N + 1u32) >> 1u32);

/// Scalar field element, canonical representative in [0, n).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fr(BigUint);

impl Fr {
    pub fn zero() -> Self {
        Fr(BigUint::zero())
    }

    pub fn one() -> Self {
        Fr(BigUint::one())
    }

    /// Reduce an arbitrary non-negative integer into the field.
    pub fn from_int(v: BigUint) -> Self {
        Fr(v % &*N)
    }

    /// Wrap an integer already known to be below n; None otherwise.
    pub fn try_from_int(v: BigUint) -> Option<Self> {
        if v < *N {
            Some(Fr(v))
        } else {
            None
        }
    }

    pub fn from_u64(v: u64) -> Self {
        Self::from_int(BigUint::from(v))
    }

    /// Decode big-endian bytes of any length and reduce mod n.
    pub fn from_bytes_reduced(bytes: &[u8]) -> Self {
        Self::from_int(bignum::decode_be(bytes))
    }

    /// Fixed-width big-endian encoding of the representative.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        bignum::encode_be_padded(32, &self.0)
            .try_into()
            .expect("scalar field element byte length")
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

    /// True when the representative is >= (n + 1) / 2.
    ///
    /// For s != 0 exactly one of s and -s is high, which is what canonical
    /// low-S signatures rely on.
    #[inline]
    pub fn is_high(&self) -> bool {
        self.0 >= *N_HALF
    }

    pub fn square(&self) -> Self {
        Fr(modular::sqr(&self.0, &N))
    }

    pub fn pow(&self, exp: &BigUint) -> Self {
        Fr(modular::pow(&self.0, exp, &N))
    }

    /// Multiplicative inverse; zero maps to zero.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(Fr::zero)
    }

    pub fn try_inverse(&self) -> Option<Self> {
        modular::inv(&self.0, &N).map(Fr)
    }
}

impl Add for Fr {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fr(modular::add(&self.0, &rhs.0, &N))
    }
}

impl AddAssign for Fr {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Sub for Fr {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fr(modular::sub(&self.0, &rhs.0, &N))
    }
}

impl SubAssign for Fr {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Neg for Fr {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fr(modular::neg(&self.0, &N))
    }
}

impl Mul for Fr {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Fr(modular::mul(&self.0, &rhs.0, &N))
    }
}

impl MulAssign for Fr {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl Div for Fr {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Fr {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl Display for Fr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:064x}", self.0)
    }
}

impl Debug for Fr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fr({})", self)
    }
}

impl Distribution<Fr> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fr {
        loop {
            let bytes: [u8; 32] = rng.random();
            let v = bignum::decode_be(&bytes);
            if v < *N {
                return Fr(v);
            }
        }
    }
}
