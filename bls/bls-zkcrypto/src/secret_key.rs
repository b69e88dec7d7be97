use bls12_381::{G1Projective, Scalar};
use bls_core::{
    error::Error, impl_secret_key, traits::SecretKey as SecretKeyTrait, SecretKeyBytes,
};

use super::{public_key::PublicKey, signature::Signature};

impl_secret_key!(SecretKey, Scalar, Scalar::to_bytes);

impl SecretKeyTrait for SecretKey {
    type PublicKey = PublicKey;
    type Signature = Signature;

    #[inline]
    fn from_bytes(bytes: &SecretKeyBytes) -> Result<Self, Error> {
        let mut le_bytes = *bytes.as_array();
        le_bytes.reverse();

        Option::from(Scalar::from_bytes(&le_bytes))
            .map(Self)
            .ok_or(Error::InvalidSecretKey)
    }

    #[inline]
    fn to_bytes(&self) -> SecretKeyBytes {
        let mut bytes = self.as_raw().to_bytes();
        bytes.reverse();
        SecretKeyBytes::from(bytes)
    }

    #[inline]
    fn to_public_key(&self) -> PublicKey {
        PublicKey::Projective(G1Projective::generator() * self.as_raw())
    }

    #[inline]
    fn sign(&self, message: &[u8]) -> Signature {
        Signature::Projective(crate::hash_to_g2(message) * self.as_raw())
    }
}
