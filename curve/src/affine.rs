// E(GF(p)) : y^2 = x^3 + 7, p = 2^256 - 2^32 - 977 (secp256k1)
// Generator: (0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798 :
//             0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8 : 1)
// Group order (prime): 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
// Cofactor: 1

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::basefield::Fp;
use crate::bignum;
use crate::scalarfield::Fr;

const TAG_COMPRESSED_EVEN: u8 = 0x02;
const TAG_COMPRESSED_ODD: u8 = 0x03;
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Point on the curve in affine coordinates, or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Point {
    /// The point at infinity (group identity).
    Infinity,
    /// An affine point. Coordinates produced by the group law satisfy
    /// y^2 = x^3 + 7; externally supplied ones must pass `is_on_curve`.
    Affine { x: Fp, y: Fp },
}

impl Point {
    /// Create an affine point from raw coordinates, without a curve check.
    pub fn new(x: Fp, y: Fp) -> Self {
        Point::Affine { x, y }
    }

    /// The secp256k1 base point.
    pub fn generator() -> Self {
        let x = BigUint::parse_bytes(
            b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            16,
        )
        .expect("generator x");
        let y = BigUint::parse_bytes(
            b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            16,
        )
        .expect("generator y");
        Point::new(
            Fp::try_from_int(x).expect("generator x below p"),
            Fp::try_from_int(y).expect("generator y below p"),
        )
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn x(&self) -> Option<&Fp> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&Fp> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Check the curve equation. The point at infinity is on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                y.square() == x.square() * x.clone() + Fp::from_u64(7)
            }
        }
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => {
                // A point of order 2 doubles to the identity.
                if y.is_zero() {
                    return Point::Infinity;
                }

                // λ = 3x^2 / 2y (the curve has a = 0)
                let x2 = x.square();
                let lambda =
                    (x2.clone() + x2.clone() + x2) / (y.clone() + y.clone());

                // x_r = λ^2 - 2x
                let x_r = lambda.square() - x.clone() - x.clone();

                // y_r = λ(x - x_r) - y
                let y_r = lambda * (x.clone() - x_r.clone()) - y.clone();

                Point::new(x_r, y_r)
            }
        }
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::new(x.clone(), -y.clone()),
        }
    }

    /// Scalar multiplication by double-and-add, most significant bit first.
    pub fn scalar_mul(&self, scalar: &Fr) -> Self {
        let mut acc = Point::Infinity;
        for bit in bignum::bits_lsb(scalar.as_int()).into_iter().rev() {
            acc = acc.double();
            if bit {
                acc = acc + self.clone();
            }
        }
        acc
    }

    /// Multiply the fixed generator.
    pub fn mul_generator(scalar: &Fr) -> Self {
        Point::generator().scalar_mul(scalar)
    }

    /// Recover the y-coordinate with the requested parity from x.
    ///
    /// Returns None when x^3 + 7 is not a quadratic residue, i.e. x is not
    /// the abscissa of any curve point.
    pub fn y_from_x(x: &Fp, want_even: bool) -> Option<Fp> {
        let rhs = x.square() * x.clone() + Fp::from_u64(7);
        let y = rhs.sqrt()?;
        if y.is_even() == want_even {
            Some(y)
        } else {
            Some(-y)
        }
    }

    /// SEC1 uncompressed encoding: 0x04 || X || Y. None for the identity.
    pub fn to_uncompressed_bytes(&self) -> Option<[u8; 65]> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => {
                let mut out = [0u8; 65];
                out[0] = TAG_UNCOMPRESSED;
                out[1..33].copy_from_slice(&x.to_bytes_be());
                out[33..65].copy_from_slice(&y.to_bytes_be());
                Some(out)
            }
        }
    }

    /// SEC1 compressed encoding: parity tag || X. None for the identity.
    pub fn to_compressed_bytes(&self) -> Option<[u8; 33]> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => {
                let mut out = [0u8; 33];
                out[0] = if y.is_even() {
                    TAG_COMPRESSED_EVEN
                } else {
                    TAG_COMPRESSED_ODD
                };
                out[1..33].copy_from_slice(&x.to_bytes_be());
                Some(out)
            }
        }
    }

    /// Parse a SEC1 uncompressed encoding.
    ///
    /// Rejects bad length, a tag other than 0x04, and coordinates >= p.
    /// The curve equation is not checked here; callers that accept
    /// untrusted points must follow up with `is_on_curve`.
    pub fn from_uncompressed_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != 65 || bytes[0] != TAG_UNCOMPRESSED {
            return None;
        }
        let x = Fp::try_from_bytes(&bytes[1..33])?;
        let y = Fp::try_from_bytes(&bytes[33..65])?;
        Some(Point::new(x, y))
    }

    /// Parse a SEC1 compressed encoding.
    ///
    /// Rejects bad length, a tag other than 0x02/0x03, X >= p, and an X
    /// that is on no curve point. A returned point is always valid.
    pub fn from_compressed_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != 33 {
            return None;
        }
        let want_even = match bytes[0] {
            TAG_COMPRESSED_EVEN => true,
            TAG_COMPRESSED_ODD => false,
            _ => return None,
        };
        let x = Fp::try_from_bytes(&bytes[1..33])?;
        let y = Point::y_from_x(&x, want_even)?;
        Some(Point::new(x, y))
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let (x1, y1, x2, y2) = match (self, other) {
            (Point::Infinity, q) => return q,
            (p, Point::Infinity) => return p,
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        if x1 == x2 {
            // Inverse points cancel; equal points double.
            return if y1 == -y2 {
                Point::Infinity
            } else {
                Point::new(x1, y1).double()
            };
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (y2 - y1.clone()) / (x2.clone() - x1.clone());

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - x1.clone() - x2;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (x1 - x_r.clone()) - y1;

        Point::new(x_r, y_r)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Self) {
        *self = self.clone() + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Self) {
        *self = self.clone() - other;
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<&Fr> for &Point {
    type Output = Point;

    fn mul(self, scalar: &Fr) -> Point {
        self.scalar_mul(scalar)
    }
}

impl Mul<&Point> for &Fr {
    type Output = Point;

    fn mul(self, point: &Point) -> Point {
        point.scalar_mul(self)
    }
}
