//! Signing and verifying keys for ECDSA over secp256k1.

use curve::{Fr, Point, RandomField};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{COMPRESSED_PUBLIC_KEY_SIZE, UNCOMPRESSED_PUBLIC_KEY_SIZE};
use crate::errors::EcdsaError;
use crate::signatures::{digest_scalar, hash_message, Signature};

/// A secret signing key: a scalar in [1, n-1].
///
/// # Example
///
/// ```
/// use ecdsa::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: Fr,
}

/// A public verifying key: the curve point sec * G.
///
/// Verifying keys are valid by construction — on the curve and never the
/// identity. The fallible constructors enforce this for imported bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Point,
}

impl SigningKey {
    /// Generates a random signing key from the provided generator.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let scalar = Fr::random(rng);
            if !scalar.is_zero() {
                return Self { scalar };
            }
        }
    }

    /// Derives a signing key from raw big-endian bytes of any length,
    /// reduced mod the group order.
    ///
    /// Returns [`EcdsaError::ZeroScalar`] when the reduction lands on
    /// zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        let scalar = Fr::from_bytes_reduced(bytes);
        if scalar.is_zero() {
            return Err(EcdsaError::ZeroScalar);
        }
        Ok(Self { scalar })
    }

    /// Fixed-width big-endian encoding of the secret scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.scalar.to_bytes_be()
    }

    pub fn as_scalar(&self) -> &Fr {
        &self.scalar
    }

    /// Derives the public verifying key sec * G.
    ///
    /// The result is never the identity because the secret lies in
    /// [1, n-1].
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: Point::mul_generator(&self.scalar),
        }
    }

    /// Signs a message: SHA-256 then [`SigningKey::sign_prehashed`].
    ///
    /// # Example
    ///
    /// ```
    /// use ecdsa::SigningKey;
    /// use rand::Rng;
    ///
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let nonce: [u8; 32] = rng.random();
    ///
    /// let signature = signing_key.sign(b"transfer 100", &nonce).expect("signing failed");
    /// assert!(signing_key.verifying_key().verify(b"transfer 100", &signature));
    /// ```
    pub fn sign(&self, msg: &[u8], nonce: &[u8]) -> Result<Signature, EcdsaError> {
        self.sign_prehashed(&hash_message(msg), nonce)
    }

    /// Signs an already-hashed message with a caller-supplied nonce.
    ///
    /// The nonce bytes are reduced mod the group order to obtain k; the
    /// signature is (r, s) with r the x-coordinate of k*G mod n and
    /// s = (r*sec + z) / k, normalized to low-S.
    ///
    /// Fails with [`EcdsaError::ZeroScalar`] when k or r is zero; retry
    /// with fresh randomness. The nonce must be uniformly random and kept
    /// secret — reusing or biasing it leaks the signing key.
    pub fn sign_prehashed(&self, digest: &[u8], nonce: &[u8]) -> Result<Signature, EcdsaError> {
        let k = Fr::from_bytes_reduced(nonce);
        if k.is_zero() {
            return Err(EcdsaError::ZeroScalar);
        }

        let nonce_point = Point::mul_generator(&k);
        let x = match nonce_point.x() {
            Some(x) => x.clone(),
            // Unreachable for k in [1, n-1]; kept as a guard.
            None => return Err(EcdsaError::ZeroScalar),
        };

        let r = Fr::from_int(x.into_int());
        if r.is_zero() {
            return Err(EcdsaError::ZeroScalar);
        }

        let z = digest_scalar(digest);
        let k_inv = k.try_inverse().ok_or(EcdsaError::ZeroScalar)?;
        let s = (r.clone() * self.scalar.clone() + z) * k_inv;

        Ok(Signature::new(r, s).normalize())
    }
}

impl VerifyingKey {
    /// Wraps a curve point, rejecting the identity and points off the
    /// curve.
    pub fn from_point(point: Point) -> Result<Self, EcdsaError> {
        if point.is_infinity() {
            return Err(EcdsaError::IdentityPoint);
        }
        if !point.is_on_curve() {
            return Err(EcdsaError::NotOnCurve);
        }
        Ok(Self { point })
    }

    /// Parses a SEC1 encoding, compressed or uncompressed, selected by
    /// length.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        let point = match bytes.len() {
            UNCOMPRESSED_PUBLIC_KEY_SIZE => Point::from_uncompressed_bytes(bytes),
            COMPRESSED_PUBLIC_KEY_SIZE => Point::from_compressed_bytes(bytes),
            _ => return Err(EcdsaError::InvalidLength),
        }
        .ok_or(EcdsaError::InvalidEncoding)?;
        Self::from_point(point)
    }

    /// SEC1 uncompressed encoding: 0x04 || X || Y.
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        self.point
            .to_uncompressed_bytes()
            .expect("verifying keys are never the identity")
    }

    /// SEC1 compressed encoding: 0x02/0x03 || X.
    pub fn to_compressed_bytes(&self) -> [u8; 33] {
        self.point
            .to_compressed_bytes()
            .expect("verifying keys are never the identity")
    }

    pub fn as_point(&self) -> &Point {
        &self.point
    }

    /// Verifies a signature over a message: SHA-256 then
    /// [`VerifyingKey::verify_prehashed`].
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> bool {
        self.verify_prehashed(&hash_message(msg), sig)
    }

    /// Verifies a signature over an already-hashed message.
    ///
    /// Rejects r = 0, s = 0, and the malleable high-S form, then checks
    /// that the x-coordinate of (z/s)*G + (r/s)*Q reduces to r mod the
    /// group order.
    pub fn verify_prehashed(&self, digest: &[u8], sig: &Signature) -> bool {
        if sig.r.is_zero() || sig.s.is_zero() || sig.s.is_high() {
            return false;
        }

        let w = match sig.s.try_inverse() {
            Some(w) => w,
            None => return false,
        };
        let u1 = digest_scalar(digest) * w.clone();
        let u2 = sig.r.clone() * w;

        let candidate = Point::mul_generator(&u1) + self.point.scalar_mul(&u2);
        match candidate.x() {
            None => false,
            Some(x) => Fr::from_int(x.clone().into_int()) == sig.r,
        }
    }
}

impl From<&SigningKey> for VerifyingKey {
    /// Equivalent to calling `signing_key.verifying_key()`.
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}
