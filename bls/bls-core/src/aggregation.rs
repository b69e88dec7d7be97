use crate::{
    error::Error,
    traits::{PublicKey as PublicKeyTrait, Signature as SignatureTrait},
};

/// Sums public keys.
///
/// There is no aggregate of zero keys. Returning the identity would let an empty committee
/// verify against an identity signature. [`PublicKeyTrait::aggregate_nonempty`] rejects empty
/// input with [`Error::EmptyAggregate`].
pub fn aggregate_public_keys<P: PublicKeyTrait>(public_keys: &[&P]) -> Result<P, Error> {
    P::aggregate_nonempty(public_keys)
}

pub fn aggregate_signatures<S: SignatureTrait>(signatures: &[&S]) -> Result<S, Error> {
    S::aggregate_nonempty(signatures)
}
