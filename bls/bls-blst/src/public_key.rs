use blst::min_pk::{AggregatePublicKey as RawAggregatePublicKey, PublicKey as RawPublicKey};
use derive_more::From;
use itertools::Itertools as _;

use bls_core::{
    consts::{is_infinity_encoding, PUBLIC_KEY_UNCOMPRESSED_SIZE},
    error::Error,
    format::{CoordType, PointFormat},
    traits::PublicKey as PublicKeyTrait,
    PublicKeyBytes,
};

// `blst` keeps public keys in affine coordinates regardless of `CoordType`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, From)]
pub struct PublicKey(RawPublicKey);

impl PublicKeyTrait for PublicKey {
    #[inline]
    fn deserialize(bytes: &[u8], format: PointFormat, _: CoordType) -> Result<Self, Error> {
        let result = match format {
            PointFormat::Compressed => RawPublicKey::uncompress(bytes),
            PointFormat::Uncompressed => RawPublicKey::deserialize(bytes),
        };

        result.map(Self).map_err(|_| Error::InvalidPublicKey)
    }

    #[inline]
    fn to_compressed(&self) -> PublicKeyBytes {
        PublicKeyBytes::from(self.as_raw().compress())
    }

    #[inline]
    fn to_uncompressed(&self) -> [u8; PUBLIC_KEY_UNCOMPRESSED_SIZE] {
        self.as_raw().serialize()
    }

    #[inline]
    fn is_infinity(&self) -> bool {
        is_infinity_encoding(&self.as_raw().compress())
    }

    // `RawPublicKey::validate` also rejects the identity, which is in every subgroup.
    // Whether the identity is usable is decided by `InfinityPolicy`.
    #[inline]
    fn subgroup_check(&self) -> bool {
        self.is_infinity() || self.as_raw().validate().is_ok()
    }

    #[inline]
    fn aggregate_in_place(&mut self, other: &Self) {
        let mut self_aggregate = RawAggregatePublicKey::from_public_key(self.as_raw());
        let other_aggregate = RawAggregatePublicKey::from_public_key(other.as_raw());
        self_aggregate.add_aggregate(&other_aggregate);
        self.0 = self_aggregate.to_public_key();
    }

    fn aggregate_nonempty(keys: &[&Self]) -> Result<Self, Error> {
        if keys.is_empty() {
            return Err(Error::EmptyAggregate);
        }

        let raw_keys = keys.iter().map(|key| key.as_raw()).collect_vec();

        RawAggregatePublicKey::aggregate(raw_keys.as_slice(), false)
            .map(|aggregate| Self(aggregate.to_public_key()))
            .map_err(|_| Error::InvalidPublicKey)
    }
}

impl PublicKey {
    pub(crate) const fn as_raw(&self) -> &RawPublicKey {
        &self.0
    }
}
