//! ECDSA signatures over the secp256k1 elliptic curve.
//!
//! This library implements the full signing pipeline on top of the
//! [`curve`] crate:
//! - Key generation from raw randomness or any [`rand::Rng`]
//! - Signing and verification, over raw messages (SHA-256) or
//!   caller-supplied digests
//! - Low-S canonicalization of signatures
//! - SEC1 public-key and DER signature wire formats
//!
//! # Overview
//!
//! A signature on a digest z under secret key sec and nonce k is the pair
//! (r, s) with r the x-coordinate of k*G reduced mod the group order and
//! s = (r*sec + z) / k. Verification recomputes the nonce point from
//! public data and compares x-coordinates.
//!
//! # Example
//!
//! ```
//! use ecdsa::{Signature, SigningKey, VerifyingKey};
//! use rand::Rng;
//!
//! let mut rng = rand::rng();
//! let signing_key = SigningKey::random(&mut rng);
//! let verifying_key = VerifyingKey::from(&signing_key);
//!
//! // The signing nonce is caller-supplied; it must be fresh per signature.
//! let nonce: [u8; 32] = rng.random();
//! let signature = signing_key.sign(b"hello", &nonce).expect("signing failed");
//! assert!(verifying_key.verify(b"hello", &signature));
//!
//! // DER round-trip.
//! let der = signature.to_der();
//! assert_eq!(Signature::from_der(&der).expect("well-formed"), signature);
//! ```
//!
//! # Security Considerations
//!
//! - Nonces must come from a cryptographically secure random source and
//!   never repeat across signatures; a reused or biased nonce reveals the
//!   signing key
//! - Scalar multiplication and modular inversion are not constant-time;
//!   this library makes no side-channel claims
//! - Verification only accepts low-S signatures; normalize imported ones
//!   with [`Signature::normalize`]

mod constants;
mod errors;
mod keys;
mod signatures;

#[cfg(test)]
mod tests;

pub use constants::{
    COMPRESSED_PUBLIC_KEY_SIZE, DIGEST_SIZE, MAX_DER_SIGNATURE_SIZE, SECRET_KEY_SIZE,
    UNCOMPRESSED_PUBLIC_KEY_SIZE,
};
pub use errors::EcdsaError;
pub use keys::{SigningKey, VerifyingKey};
pub use signatures::Signature;
