//! Modular arithmetic kernel shared by the two prime fields.
//!
//! Every operation assumes a modulus m > 1 and operands already reduced
//! into [0, m). `ext_gcd` is the exception and accepts arbitrary signed
//! integers.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::bignum;

#[inline]
pub(crate) fn add(x: &BigUint, y: &BigUint, m: &BigUint) -> BigUint {
    let z = x + y;
    if z < *m {
        z
    } else {
        z - m
    }
}

#[inline]
pub(crate) fn sub(x: &BigUint, y: &BigUint, m: &BigUint) -> BigUint {
    if x >= y {
        x - y
    } else {
        x + m - y
    }
}

#[inline]
pub(crate) fn neg(x: &BigUint, m: &BigUint) -> BigUint {
    if x.is_zero() {
        BigUint::zero()
    } else {
        m - x
    }
}

#[inline]
pub(crate) fn mul(x: &BigUint, y: &BigUint, m: &BigUint) -> BigUint {
    (x * y) % m
}

#[inline]
pub(crate) fn sqr(x: &BigUint, m: &BigUint) -> BigUint {
    mul(x, x, m)
}

/// Left-to-right square-and-multiply exponentiation.
pub(crate) fn pow(x: &BigUint, e: &BigUint, m: &BigUint) -> BigUint {
    let mut acc = BigUint::one();
    for bit in bignum::bits_lsb(e).into_iter().rev() {
        acc = sqr(&acc, m);
        if bit {
            acc = mul(&acc, x, m);
        }
    }
    acc
}

/// Extended Euclidean algorithm.
///
/// Returns (g, u, v) with g = gcd(a, b) and u*a + v*b = g.
pub(crate) fn ext_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut r0, mut r1) = (a.clone(), b.clone());
    let (mut s0, mut s1) = (BigInt::one(), BigInt::zero());
    let (mut t0, mut t1) = (BigInt::zero(), BigInt::one());

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r = &r0 - &q * &r1;
        r0 = r1;
        r1 = r;
        let s = &s0 - &q * &s1;
        s0 = s1;
        s1 = s;
        let t = &t0 - &q * &t1;
        t0 = t1;
        t1 = t;
    }

    (r0, s0, t0)
}

/// Modular inverse of x mod m, in [0, m).
///
/// Returns None when gcd(x, m) != 1.
pub(crate) fn inv(x: &BigUint, m: &BigUint) -> Option<BigUint> {
    let m_int = BigInt::from(m.clone());
    let (g, u, _) = ext_gcd(&BigInt::from(x.clone()), &m_int);
    if !g.is_one() {
        return None;
    }
    let mut u = u % &m_int;
    if u.sign() == Sign::Minus {
        u += &m_int;
    }
    Some(u.to_biguint().expect("reduced Bezout coefficient is non-negative"))
}

pub(crate) fn div(x: &BigUint, y: &BigUint, m: &BigUint) -> Option<BigUint> {
    inv(y, m).map(|y_inv| mul(x, &y_inv, m))
}
