//! Big-endian byte and bit views of arbitrary-precision integers.

use num_bigint::BigUint;

/// Interpret a byte slice as a big-endian unsigned integer.
///
/// The empty slice decodes to zero.
#[inline]
pub fn decode_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Minimal-length big-endian encoding. Zero encodes to a single 0x00 byte.
#[inline]
pub fn encode_be(v: &BigUint) -> Vec<u8> {
    v.to_bytes_be()
}

/// Fixed-width big-endian encoding, zero-extended on the left.
///
/// A value that does not fit in `len` bytes is truncated to its low
/// `len` bytes, i.e. the result encodes v mod 256^len.
pub fn encode_be_padded(len: usize, v: &BigUint) -> Vec<u8> {
    let raw = v.to_bytes_be();
    if raw.len() >= len {
        raw[raw.len() - len..].to_vec()
    } else {
        let mut out = vec![0u8; len - raw.len()];
        out.extend_from_slice(&raw);
        out
    }
}

/// Bit decomposition, least significant bit first, shortest representation.
///
/// Zero decomposes to the empty vector.
pub fn bits_lsb(v: &BigUint) -> Vec<bool> {
    (0..v.bits()).map(|i| v.bit(i)).collect()
}
