use bls12_381::{G1Affine, G1Projective};

use bls_core::{
    consts::{PUBLIC_KEY_COMPRESSED_SIZE, PUBLIC_KEY_UNCOMPRESSED_SIZE},
    error::Error,
    format::{CoordType, PointFormat},
    traits::PublicKey as PublicKeyTrait,
    PublicKeyBytes,
};

#[derive(Clone, Copy, Debug)]
pub enum PublicKey {
    Affine(G1Affine),
    Projective(G1Projective),
}

impl Default for PublicKey {
    #[inline]
    fn default() -> Self {
        Self::Projective(G1Projective::identity())
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_projective() == other.to_projective()
    }
}

impl Eq for PublicKey {}

impl From<G1Projective> for PublicKey {
    #[inline]
    fn from(point: G1Projective) -> Self {
        Self::Projective(point)
    }
}

impl PublicKeyTrait for PublicKey {
    fn deserialize(
        bytes: &[u8],
        format: PointFormat,
        coordinates: CoordType,
    ) -> Result<Self, Error> {
        let point = match format {
            PointFormat::Compressed => {
                let bytes = <&[u8; PUBLIC_KEY_COMPRESSED_SIZE]>::try_from(bytes)
                    .map_err(|_| Error::InvalidPublicKey)?;

                G1Affine::from_compressed_unchecked(bytes)
            }
            PointFormat::Uncompressed => {
                let bytes = <&[u8; PUBLIC_KEY_UNCOMPRESSED_SIZE]>::try_from(bytes)
                    .map_err(|_| Error::InvalidPublicKey)?;

                G1Affine::from_uncompressed(bytes)
            }
        };

        let point = Option::<G1Affine>::from(point).ok_or(Error::InvalidPublicKey)?;

        if !bool::from(point.is_torsion_free()) {
            return Err(Error::InvalidPublicKey);
        }

        Ok(match coordinates {
            CoordType::Affine => Self::Affine(point),
            CoordType::Jacobian => Self::Projective(point.into()),
        })
    }

    #[inline]
    fn to_compressed(&self) -> PublicKeyBytes {
        PublicKeyBytes::from(self.to_affine().to_compressed())
    }

    #[inline]
    fn to_uncompressed(&self) -> [u8; PUBLIC_KEY_UNCOMPRESSED_SIZE] {
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
}

impl PublicKey {
    #[must_use]
    pub fn to_affine(self) -> G1Affine {
        match self {
            Self::Affine(point) => point,
            Self::Projective(point) => point.into(),
        }
    }

    #[must_use]
    pub fn to_projective(self) -> G1Projective {
        match self {
            Self::Affine(point) => point.into(),
            Self::Projective(point) => point,
        }
    }
}
