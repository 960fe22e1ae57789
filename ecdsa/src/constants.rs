//! Constants for the serialized forms used by this crate.

/// Size of a SEC1 uncompressed public key in bytes.
///
/// One tag byte (0x04) followed by the 32-byte x- and y-coordinates.
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// Size of a SEC1 compressed public key in bytes.
///
/// One parity tag byte (0x02 or 0x03) followed by the 32-byte
/// x-coordinate.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Size of a serialized secret key in bytes.
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of a SHA-256 message digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Maximum size of a DER-encoded signature in bytes.
///
/// SEQUENCE and length bytes plus two INTEGERs of at most 33 bytes
/// (32 bytes of magnitude and an optional sign-padding 0x00) with their
/// own tag and length bytes.
pub const MAX_DER_SIGNATURE_SIZE: usize = 72;

pub(crate) const DER_SEQUENCE_TAG: u8 = 0x30;
pub(crate) const DER_INTEGER_TAG: u8 = 0x02;
