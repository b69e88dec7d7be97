use core::fmt::Debug;

use derive_more::Constructor;

use crate::{
    consts::SIGNATURE_UNCOMPRESSED_SIZE,
    error::Error,
    format::{CoordType, PointFormat},
    scalar::RandomScalar,
    signature_bytes::SignatureBytes,
};

use super::PublicKey as PublicKeyTrait;

/// A point in G2 owned by a pairing engine.
pub trait Signature: Clone + Copy + PartialEq + Eq + Debug + Send + Sync + 'static {
    type PublicKey: PublicKeyTrait;

    fn deserialize(
        bytes: &[u8],
        format: PointFormat,
        coordinates: CoordType,
    ) -> Result<Self, Error>;

    fn to_compressed(&self) -> SignatureBytes;

    fn to_uncompressed(&self) -> [u8; SIGNATURE_UNCOMPRESSED_SIZE];

    fn is_infinity(&self) -> bool;

    fn subgroup_check(&self) -> bool;

    fn aggregate_in_place(&mut self, other: &Self);

    #[must_use]
    fn aggregate(mut self, other: &Self) -> Self {
        self.aggregate_in_place(other);
        self
    }

    fn aggregate_nonempty(signatures: &[&Self]) -> Result<Self, Error> {
        let (first, rest) = signatures.split_first().ok_or(Error::EmptyAggregate)?;
        Ok(rest
            .iter()
            .fold(**first, |aggregate, signature| aggregate.aggregate(signature)))
    }

    fn to_bytes(&self, format: PointFormat) -> Vec<u8> {
        match format {
            PointFormat::Compressed => self.to_compressed().as_bytes().to_vec(),
            PointFormat::Uncompressed => self.to_uncompressed().to_vec(),
        }
    }

    /// Checks `e(public_key, H(message)) == e(G1, self)`.
    fn verify(&self, message: &[u8], public_key: &Self::PublicKey) -> bool;

    /// Checks `e(G1, self) == ∏ e(public_keys[i], H(messages[i]))`.
    ///
    /// Callers guarantee that both slices are nonempty and have the same length.
    fn aggregate_verify(&self, messages: &[&[u8]], public_keys: &[&Self::PublicKey]) -> bool;

    /// Checks `e(G1, ∑ r[i] · signatures[i]) == ∏ e(r[i] · public_keys[i], H(messages[i]))`.
    ///
    /// Callers guarantee that `sets` is nonempty and that there is one scalar per set.
    /// Engines may split the work across threads but must use the scalars they are given.
    fn multi_verify(sets: &[SignatureSet<'_, Self>], scalars: &[RandomScalar]) -> bool;
}

#[derive(Clone, Copy, Debug, Constructor)]
pub struct SignatureSet<'all, S: Signature> {
    pub message: &'all [u8],
    pub public_key: &'all S::PublicKey,
    pub signature: &'all S,
}
