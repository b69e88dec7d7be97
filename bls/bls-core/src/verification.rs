use log::debug;

use crate::{
    aggregation::aggregate_public_keys,
    scalar::RandomScalar,
    traits::{PublicKey as PublicKeyTrait, Signature as SignatureTrait, SignatureSet},
};

/// Treatment of a single (identity public key, identity signature) pair in [`aggregate_verify`].
///
/// Some conformance vectors expect that pair to verify.
/// Accepting it weakens the scheme and should only be done to pass those vectors.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum InfinityPairPolicy {
    #[default]
    Reject,
    Accept,
}

#[must_use]
pub fn verify<S: SignatureTrait>(signature: &S, public_key: &S::PublicKey, message: &[u8]) -> bool {
    if signature.is_infinity() || public_key.is_infinity() {
        return false;
    }

    signature.verify(message, public_key)
}

/// Verifies a signature made by several signers over the same message.
#[must_use]
pub fn fast_aggregate_verify<S: SignatureTrait>(
    signature: &S,
    public_keys: &[&S::PublicKey],
    message: &[u8],
) -> bool {
    match aggregate_public_keys(public_keys) {
        Ok(public_key) => verify(signature, &public_key, message),
        Err(error) => {
            debug!("fast aggregate verification rejected: {error}");
            false
        }
    }
}

/// Verifies an aggregate of signatures over one message per signer.
///
/// Messages are not required to be distinct.
#[must_use]
pub fn aggregate_verify<S: SignatureTrait>(
    signature: &S,
    public_keys: &[&S::PublicKey],
    messages: &[&[u8]],
    policy: InfinityPairPolicy,
) -> bool {
    if public_keys.is_empty() || public_keys.len() != messages.len() {
        return false;
    }

    if let [public_key] = public_keys {
        if policy == InfinityPairPolicy::Accept
            && signature.is_infinity()
            && public_key.is_infinity()
        {
            debug!("accepting identity public key and signature pair");
            return true;
        }
    }

    if public_keys.iter().any(|public_key| public_key.is_infinity()) {
        return false;
    }

    signature.aggregate_verify(messages, public_keys)
}

/// Verifies independent signature sets with a single weighted pairing check.
///
/// Each set is weighted with a fresh [`RandomScalar`] so that invalid signatures cannot be
/// crafted to cancel each other out.
#[must_use]
pub fn verify_multiple_signatures<S: SignatureTrait>(sets: &[SignatureSet<'_, S>]) -> bool {
    if sets.is_empty() {
        return false;
    }

    if sets
        .iter()
        .any(|set| set.signature.is_infinity() || set.public_key.is_infinity())
    {
        return false;
    }

    let scalars = RandomScalar::draw(sets.len());

    S::multi_verify(sets, &scalars)
}
