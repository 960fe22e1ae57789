//! secp256k1 elliptic curve group and its prime fields.
//!
//! This crate provides affine curve points, the base field `Fp` and scalar
//! field `Fr`, big-endian integer conversion helpers, and helpers for random
//! sampling. The curve parameters and generator are fixed to the secp256k1
//! values in the `affine` module.

mod affine;
mod basefield;
pub mod bignum;
mod modular;
mod random;
mod scalarfield;

pub use affine::Point;
pub use basefield::{Fp, P};
pub use random::RandomField;
pub use scalarfield::{Fr, N};
