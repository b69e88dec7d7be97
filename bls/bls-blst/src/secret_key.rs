use blst::min_pk::SecretKey as RawSecretKey;

use bls_core::{
    consts::DOMAIN_SEPARATION_TAG, error::Error, impl_secret_key,
    traits::SecretKey as SecretKeyTrait, SecretKeyBytes,
};

use super::{public_key::PublicKey, signature::Signature};

// `RawSecretKey` already implements `Zeroize` (with `zeroize(drop)`):
// <https://github.com/supranational/blst/blob/v0.3.10/bindings/rust/src/lib.rs#L458-L460>
impl_secret_key!(SecretKey, RawSecretKey, RawSecretKey::to_bytes);

impl SecretKeyTrait for SecretKey {
    type PublicKey = PublicKey;
    type Signature = Signature;

    // `RawSecretKey::from_bytes` rejects zero and scalars that are not reduced modulo r.
    #[inline]
    fn from_bytes(bytes: &SecretKeyBytes) -> Result<Self, Error> {
        RawSecretKey::from_bytes(bytes.as_ref())
            .map(Self)
            .map_err(|_| Error::InvalidSecretKey)
    }

    #[inline]
    fn to_bytes(&self) -> SecretKeyBytes {
        SecretKeyBytes::from(self.as_raw().to_bytes())
    }

    #[inline]
    fn to_public_key(&self) -> PublicKey {
        self.as_raw().sk_to_pk().into()
    }

    #[inline]
    fn sign(&self, message: &[u8]) -> Signature {
        self.as_raw()
            .sign(message, DOMAIN_SEPARATION_TAG, &[])
            .into()
    }
}
