use blst::{
    blst_scalar,
    min_pk::{AggregateSignature as RawAggregateSignature, Signature as RawSignature},
    BLST_ERROR,
};
use derive_more::From;
use itertools::Itertools as _;

use bls_core::{
    consts::{is_infinity_encoding, DOMAIN_SEPARATION_TAG, SIGNATURE_UNCOMPRESSED_SIZE},
    error::Error,
    format::{CoordType, PointFormat},
    traits::{Signature as SignatureTrait, SignatureSet},
    RandomScalar, SignatureBytes,
};

use super::public_key::PublicKey;

#[derive(Clone, Copy, PartialEq, Eq, Debug, From)]
pub struct Signature(RawSignature);

impl Default for Signature {
    #[inline]
    fn default() -> Self {
        RawSignature::uncompress(SignatureBytes::empty().as_bytes())
            .map(Self)
            .expect("compressed signature constructed in SignatureBytes::empty is valid")
    }
}

impl SignatureTrait for Signature {
    type PublicKey = PublicKey;

    #[inline]
    fn deserialize(bytes: &[u8], format: PointFormat, _: CoordType) -> Result<Self, Error> {
        let result = match format {
            PointFormat::Compressed => RawSignature::uncompress(bytes),
            PointFormat::Uncompressed => RawSignature::deserialize(bytes),
        };

        result.map(Self).map_err(|_| Error::InvalidSignature)
    }

    #[inline]
    fn to_compressed(&self) -> SignatureBytes {
        SignatureBytes::from(self.as_raw().compress())
    }

    #[inline]
    fn to_uncompressed(&self) -> [u8; SIGNATURE_UNCOMPRESSED_SIZE] {
        self.as_raw().serialize()
    }

    #[inline]
    fn is_infinity(&self) -> bool {
        is_infinity_encoding(&self.as_raw().compress())
    }

    #[inline]
    fn subgroup_check(&self) -> bool {
        self.as_raw().validate(false).is_ok()
    }

    #[inline]
    fn aggregate_in_place(&mut self, other: &Self) {
        let mut self_aggregate = RawAggregateSignature::from_signature(self.as_raw());
        let other_aggregate = RawAggregateSignature::from_signature(other.as_raw());
        self_aggregate.add_aggregate(&other_aggregate);
        self.0 = self_aggregate.to_signature();
    }

    fn aggregate_nonempty(signatures: &[&Self]) -> Result<Self, Error> {
        if signatures.is_empty() {
            return Err(Error::EmptyAggregate);
        }

        let raw_signatures = signatures.iter().map(|signature| signature.as_raw()).collect_vec();

        RawAggregateSignature::aggregate(raw_signatures.as_slice(), false)
            .map(|aggregate| Self(aggregate.to_signature()))
            .map_err(|_| Error::InvalidSignature)
    }

    #[must_use]
    fn verify(&self, message: &[u8], public_key: &PublicKey) -> bool {
        let result = self.as_raw().verify(
            true,
            message,
            DOMAIN_SEPARATION_TAG,
            &[],
            public_key.as_raw(),
            false,
        );

        result == BLST_ERROR::BLST_SUCCESS
    }

    #[must_use]
    fn aggregate_verify(&self, messages: &[&[u8]], public_keys: &[&PublicKey]) -> bool {
        let public_keys = public_keys.iter().map(|key| key.as_raw()).collect_vec();

        let result = self.as_raw().aggregate_verify(
            true,
            messages,
            DOMAIN_SEPARATION_TAG,
            public_keys.as_slice(),
            false,
        );

        result == BLST_ERROR::BLST_SUCCESS
    }

    #[must_use]
    fn multi_verify(sets: &[SignatureSet<'_, Self>], scalars: &[RandomScalar]) -> bool {
        if sets.len() != scalars.len() {
            return false;
        }

        let messages = sets.iter().map(|set| set.message).collect_vec();
        let signatures = sets.iter().map(|set| set.signature.as_raw()).collect_vec();
        let public_keys = sets.iter().map(|set| set.public_key.as_raw()).collect_vec();

        let randoms = scalars
            .iter()
            .map(|scalar| {
                let mut raw = blst_scalar::default();
                raw.b[..RandomScalar::BYTES].copy_from_slice(&scalar.to_le_bytes());
                raw
            })
            .collect_vec();

        // `blst` splits the pairings across its own thread pool.
        let result = RawSignature::verify_multiple_aggregate_signatures(
            messages.as_slice(),
            DOMAIN_SEPARATION_TAG,
            public_keys.as_slice(),
            false,
            signatures.as_slice(),
            true,
            randoms.as_slice(),
            RandomScalar::BITS,
        );

        result == BLST_ERROR::BLST_SUCCESS
    }
}

impl Signature {
    #[must_use]
    pub const fn as_raw(&self) -> &RawSignature {
        &self.0
    }
}
