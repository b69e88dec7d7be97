//! Pure Rust pairing engine backed by [`bls12_381`].
//!
//! Unlike `blst`, this engine builds for `wasm32` targets.

pub mod public_key;
pub mod secret_key;
pub mod signature;

use bls12_381::{
    hash_to_curve::{ExpandMsgXmd, HashToCurve},
    G2Projective,
};
use bls_core::{
    consts::DOMAIN_SEPARATION_TAG,
    traits::{Engine, InfinityPolicy},
};
use sha2::Sha256;

pub use public_key::PublicKey;
pub use secret_key::SecretKey;
pub use signature::Signature;

#[derive(Clone, Copy, Default, Debug)]
pub struct Zkcrypto;

impl Engine for Zkcrypto {
    const NAME: &'static str = "zkcrypto";
    const DESERIALIZATION_CHECKS_SUBGROUP: bool = true;
    const INFINITY_PUBLIC_KEY: InfinityPolicy = InfinityPolicy::Reject;

    type SecretKey = SecretKey;
    type PublicKey = PublicKey;
    type Signature = Signature;
}

fn hash_to_g2(message: &[u8]) -> G2Projective {
    <G2Projective as HashToCurve<ExpandMsgXmd<Sha256>>>::hash_to_curve(
        [message],
        DOMAIN_SEPARATION_TAG,
    )
}
