use core::fmt::Debug;

use crate::{
    consts::PUBLIC_KEY_UNCOMPRESSED_SIZE,
    error::Error,
    format::{CoordType, PointFormat},
    public_key_bytes::PublicKeyBytes,
};

/// A point in G1 owned by a pairing engine.
pub trait PublicKey: Clone + Copy + PartialEq + Eq + Debug + Send + Sync + 'static {
    /// Decodes a point without any checks beyond what the engine always performs.
    ///
    /// `bytes` has already been checked to have the length `format` requires.
    fn deserialize(
        bytes: &[u8],
        format: PointFormat,
        coordinates: CoordType,
    ) -> Result<Self, Error>;

    fn to_compressed(&self) -> PublicKeyBytes;

    fn to_uncompressed(&self) -> [u8; PUBLIC_KEY_UNCOMPRESSED_SIZE];

    fn is_infinity(&self) -> bool;

    fn subgroup_check(&self) -> bool;

    fn aggregate_in_place(&mut self, other: &Self);

    #[must_use]
    fn aggregate(mut self, other: &Self) -> Self {
        self.aggregate_in_place(other);
        self
    }

    /// [`eth_aggregate_pubkeys`](https://github.com/ethereum/consensus-specs/blob/86fb82b221474cc89387fa6436806507b3849d88/specs/altair/bls.md#eth_aggregate_pubkeys)
    fn aggregate_nonempty(keys: &[&Self]) -> Result<Self, Error> {
        let (first, rest) = keys.split_first().ok_or(Error::EmptyAggregate)?;
        Ok(rest.iter().fold(**first, |aggregate, key| aggregate.aggregate(key)))
    }

    fn to_bytes(&self, format: PointFormat) -> Vec<u8> {
        match format {
            PointFormat::Compressed => self.to_compressed().as_bytes().to_vec(),
            PointFormat::Uncompressed => self.to_uncompressed().to_vec(),
        }
    }
}
