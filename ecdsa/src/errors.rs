//! Error types for ECDSA keys and signatures.

/// Errors that can occur while deriving keys, signing, or decoding wire
/// formats.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EcdsaError {
    /// A secret key, nonce, or candidate r reduced to zero mod the group
    /// order.
    ///
    /// During signing this means the caller should retry with fresh
    /// randomness; the probability of hitting it with uniform 32-byte
    /// input is negligible.
    ZeroScalar,
    /// A byte string has the wrong length for its format.
    InvalidLength,
    /// A SEC1 tag byte is unknown, a coordinate is >= the field modulus,
    /// or a compressed x-coordinate is on no curve point.
    InvalidEncoding,
    /// Decoded coordinates do not satisfy the curve equation.
    NotOnCurve,
    /// The point at infinity cannot serve as a public key.
    IdentityPoint,
    /// A DER signature failed structural parsing.
    MalformedDer,
    /// A DER integer is outside the scalar field.
    OutOfRange,
}
