use bls12_381::{
    multi_miller_loop, G1Affine, G2Affine, G2Prepared, G2Projective, Gt, Scalar,
};
use itertools::Itertools as _;
use rayon::iter::{IndexedParallelIterator as _, IntoParallelRefIterator as _, ParallelIterator as _};

use bls_core::{
    consts::{SIGNATURE_COMPRESSED_SIZE, SIGNATURE_UNCOMPRESSED_SIZE},
    error::Error,
    format::{CoordType, PointFormat},
    traits::{Signature as SignatureTrait, SignatureSet},
    RandomScalar, SignatureBytes,
};

use super::public_key::PublicKey;

#[derive(Clone, Copy, Debug)]
pub enum Signature {
    Affine(G2Affine),
    Projective(G2Projective),
}

impl Default for Signature {
    #[inline]
    fn default() -> Self {
        Self::Projective(G2Projective::identity())
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.to_projective() == other.to_projective()
    }
}

impl Eq for Signature {}

impl SignatureTrait for Signature {
    type PublicKey = PublicKey;

    fn deserialize(
        bytes: &[u8],
        format: PointFormat,
        coordinates: CoordType,
    ) -> Result<Self, Error> {
        let point = match format {
            PointFormat::Compressed => {
                let bytes = <&[u8; SIGNATURE_COMPRESSED_SIZE]>::try_from(bytes)
                    .map_err(|_| Error::InvalidSignature)?;

                G2Affine::from_compressed_unchecked(bytes)
            }
            PointFormat::Uncompressed => {
                let bytes = <&[u8; SIGNATURE_UNCOMPRESSED_SIZE]>::try_from(bytes)
                    .map_err(|_| Error::InvalidSignature)?;

                G2Affine::from_uncompressed_unchecked(bytes)
            }
        };

        let point = Option::<G2Affine>::from(point).ok_or(Error::InvalidSignature)?;

        if !bool::from(point.is_on_curve()) {
            return Err(Error::InvalidSignature);
        }

        if !bool::from(point.is_torsion_free()) {
            return Err(Error::InvalidOrder);
        }

        Ok(match coordinates {
            CoordType::Affine => Self::Affine(point),
            CoordType::Jacobian => Self::Projective(point.into()),
        })
    }

    #[inline]
    fn to_compressed(&self) -> SignatureBytes {
        SignatureBytes::from(self.to_affine().to_compressed())
    }

    #[inline]
    fn to_uncompressed(&self) -> [u8; SIGNATURE_UNCOMPRESSED_SIZE] {
        self.to_affine().to_uncompressed()
    }

    #[inline]
    fn is_infinity(&self) -> bool {
        match self {
            Self::Affine(point) => point.is_identity().into(),
            Self::Projective(point) => point.is_identity().into(),
        }
    }

    #[inline]
    fn subgroup_check(&self) -> bool {
        self.to_affine().is_torsion_free().into()
    }

    #[inline]
    fn aggregate_in_place(&mut self, other: &Self) {
        let sum = match other {
            Self::Affine(point) => self.to_projective().add_mixed(point),
            Self::Projective(point) => self.to_projective().add(point),
        };

        *self = Self::Projective(sum);
    }

    fn verify(&self, message: &[u8], public_key: &PublicKey) -> bool {
        let public_key = public_key.to_affine();
        let hash = G2Prepared::from(G2Affine::from(crate::hash_to_g2(message)));
        let generator = -G1Affine::generator();
        let signature = G2Prepared::from(self.to_affine());

        multi_miller_loop(&[(&public_key, &hash), (&generator, &signature)])
            .final_exponentiation()
            == Gt::identity()
    }

    fn aggregate_verify(&self, messages: &[&[u8]], public_keys: &[&PublicKey]) -> bool {
        if messages.len() != public_keys.len() {
            return false;
        }

        let pairs = messages
            .par_iter()
            .zip(public_keys.par_iter())
            .map(|(message, public_key)| {
                let hash = G2Affine::from(crate::hash_to_g2(message));
                (public_key.to_affine(), G2Prepared::from(hash))
            })
            .collect::<Vec<_>>();

        let generator = -G1Affine::generator();
        let signature = G2Prepared::from(self.to_affine());

        let terms = pairs
            .iter()
            .map(|(public_key, hash)| (public_key, hash))
            .chain([(&generator, &signature)])
            .collect_vec();

        multi_miller_loop(&terms).final_exponentiation() == Gt::identity()
    }

    fn multi_verify(sets: &[SignatureSet<'_, Self>], scalars: &[RandomScalar]) -> bool {
        if sets.len() != scalars.len() {
            return false;
        }

        // The scalars were drawn before this point, so every worker uses the one assigned to its set.
        let (terms, weighted_signatures): (Vec<_>, Vec<_>) = sets
            .par_iter()
            .zip(scalars.par_iter())
            .map(|(set, scalar)| {
                let scalar = Scalar::from(scalar.get());
                let hash = G2Prepared::from(G2Affine::from(crate::hash_to_g2(set.message)));
                let public_key = G1Affine::from(set.public_key.to_projective() * scalar);
                let signature = set.signature.to_projective() * scalar;

                ((public_key, hash), signature)
            })
            .unzip();

        let weighted_signature = weighted_signatures
            .into_iter()
            .fold(G2Projective::identity(), |sum, signature| sum + signature);

        let generator = -G1Affine::generator();
        let signature = G2Prepared::from(G2Affine::from(weighted_signature));

        let terms = terms
            .iter()
            .map(|(public_key, hash)| (public_key, hash))
            .chain([(&generator, &signature)])
            .collect_vec();

        multi_miller_loop(&terms).final_exponentiation() == Gt::identity()
    }
}

impl From<G2Projective> for Signature {
    #[inline]
    fn from(point: G2Projective) -> Self {
        Self::Projective(point)
    }
}

impl Signature {
    #[must_use]
    pub fn to_affine(self) -> G2Affine {
        match self {
            Self::Affine(point) => point,
            Self::Projective(point) => point.into(),
        }
    }

    #[must_use]
    pub fn to_projective(self) -> G2Projective {
        match self {
            Self::Affine(point) => point.into(),
            Self::Projective(point) => point,
        }
    }
}
