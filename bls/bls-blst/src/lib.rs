//! Pairing engine backed by the [`blst`] library.

pub mod public_key;
pub mod secret_key;
pub mod signature;

use bls_core::traits::{Engine, InfinityPolicy};

pub use public_key::PublicKey;
pub use secret_key::SecretKey;
pub use signature::Signature;

#[derive(Clone, Copy, Default, Debug)]
pub struct Blst;

impl Engine for Blst {
    const NAME: &'static str = "blst";

    // `blst` only checks that points are on the curve when decoding them.
    const DESERIALIZATION_CHECKS_SUBGROUP: bool = false;

    const INFINITY_PUBLIC_KEY: InfinityPolicy = InfinityPolicy::RejectWhenValidating;

    type SecretKey = SecretKey;
    type PublicKey = PublicKey;
    type Signature = Signature;
}
