//! Signature type, low-S canonicalization, and DER encoding.

use curve::bignum;
use curve::Fr;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{DER_INTEGER_TAG, DER_SEQUENCE_TAG, MAX_DER_SIGNATURE_SIZE};
use crate::errors::EcdsaError;

/// An ECDSA signature: the pair (r, s) of scalars.
///
/// Signatures produced by this crate always carry the canonical low-S
/// form; verification rejects the high-S mirror. Signatures imported from
/// elsewhere should go through [`Signature::normalize`] first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// x-coordinate of the nonce point, reduced mod the group order.
    pub r: Fr,
    /// The response scalar (r*sec + z) / k.
    pub s: Fr,
}

impl Signature {
    pub fn new(r: Fr, s: Fr) -> Self {
        Signature { r, s }
    }

    /// Replace s by its negation when it falls in the high half of the
    /// scalar field. (r, s) and (r, -s) verify equally; only the low form
    /// is canonical.
    pub fn normalize(self) -> Self {
        if self.s.is_high() {
            Signature {
                r: self.r,
                s: -self.s,
            }
        } else {
            self
        }
    }

    /// DER encoding: SEQUENCE { INTEGER r, INTEGER s }.
    ///
    /// Each integer is minimal big-endian with a 0x00 byte prepended when
    /// the leading byte would read as a sign bit.
    pub fn to_der(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(MAX_DER_SIGNATURE_SIZE - 2);
        der_write_integer(&mut body, self.r.as_int());
        der_write_integer(&mut body, self.s.as_int());

        let mut out = Vec::with_capacity(body.len() + 2);
        out.push(DER_SEQUENCE_TAG);
        out.push(body.len() as u8);
        out.extend_from_slice(&body);
        out
    }

    /// Strict DER decoding.
    ///
    /// Rejects a missing SEQUENCE tag, a length byte that does not cover
    /// the rest of the input exactly, anything but two INTEGER records,
    /// trailing bytes, and integers >= the group order.
    pub fn from_der(bytes: &[u8]) -> Result<Self, EcdsaError> {
        if bytes.len() < 2 || bytes[0] != DER_SEQUENCE_TAG {
            return Err(EcdsaError::MalformedDer);
        }
        if bytes[1] as usize != bytes.len() - 2 {
            return Err(EcdsaError::MalformedDer);
        }

        let (r, rest) = der_read_integer(&bytes[2..])?;
        let (s, rest) = der_read_integer(rest)?;
        if !rest.is_empty() {
            return Err(EcdsaError::MalformedDer);
        }

        let r = Fr::try_from_int(r).ok_or(EcdsaError::OutOfRange)?;
        let s = Fr::try_from_int(s).ok_or(EcdsaError::OutOfRange)?;
        Ok(Signature { r, s })
    }
}

fn der_write_integer(out: &mut Vec<u8>, v: &BigUint) {
    let mut bytes = bignum::encode_be(v);
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0x00);
    }
    out.push(DER_INTEGER_TAG);
    out.push(bytes.len() as u8);
    out.extend_from_slice(&bytes);
}

fn der_read_integer(input: &[u8]) -> Result<(BigUint, &[u8]), EcdsaError> {
    if input.len() < 2 || input[0] != DER_INTEGER_TAG {
        return Err(EcdsaError::MalformedDer);
    }
    let len = input[1] as usize;
    if len == 0 || input.len() < 2 + len {
        return Err(EcdsaError::MalformedDer);
    }
    Ok((bignum::decode_be(&input[2..2 + len]), &input[2 + len..]))
}

/// SHA-256 digest of a raw message.
pub(crate) fn hash_message(msg: &[u8]) -> [u8; 32] {
    Sha256::digest(msg).into()
}

/// Reduce a digest into the scalar field: z = digest mod n.
///
/// No truncation beyond the reduction is applied; the group order is a
/// 256-bit prime, so a 32-byte digest maps in directly.
pub(crate) fn digest_scalar(digest: &[u8]) -> Fr {
    Fr::from_bytes_reduced(digest)
}
