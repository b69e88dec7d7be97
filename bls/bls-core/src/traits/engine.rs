use core::fmt::Debug;

use super::{
    PublicKey as PublicKeyTrait, SecretKey as SecretKeyTrait, Signature as SignatureTrait,
};

/// A pairing engine: the external implementation of BLS12-381 arithmetic.
///
/// Differences in behavior between engines are expressed as associated constants
/// so that generic code can account for them without matching on engine names.
pub trait Engine: Clone + Copy + Default + Debug + Send + Sync + 'static {
    const NAME: &'static str;

    /// Whether [`PublicKeyTrait::deserialize`] and [`SignatureTrait::deserialize`]
    /// always check subgroup membership, even when validation was not requested.
    const DESERIALIZATION_CHECKS_SUBGROUP: bool;

    /// What happens to a public key that decodes to the point at infinity.
    const INFINITY_PUBLIC_KEY: InfinityPolicy;

    type SecretKey: SecretKeyTrait<PublicKey = Self::PublicKey, Signature = Self::Signature>;
    type PublicKey: PublicKeyTrait;
    type Signature: SignatureTrait<PublicKey = Self::PublicKey>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InfinityPolicy {
    /// The identity is never a usable public key.
    Reject,
    /// The identity is rejected only if the caller asked for validation.
    RejectWhenValidating,
}
