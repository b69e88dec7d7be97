use derive_more::Constructor;

use crate::{public_key::PublicKey, signature::Signature};

/// One independently signed message in a batch passed to
/// [`Signature::verify_multiple_signatures`].
///
/// The message is generic so that owned sets can be moved to another thread.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Constructor)]
pub struct SignatureSet<M> {
    pub message: M,
    pub public_key: PublicKey,
    pub signature: Signature,
}
