use core::fmt::{Binary, Display, LowerExp, LowerHex, Octal, Pointer, UpperExp, UpperHex};

use bls_core::{
    deserialization, format, keygen, traits::SecretKey as _, SecretKeyBytes, SECRET_KEY_SIZE,
};
use rand::{rngs::OsRng, RngCore as _};
use static_assertions::assert_not_impl_any;
use zeroize::Zeroizing;

use crate::{
    backend::Backend,
    context,
    dispatch::{dispatch, Variant as _},
    error::{Error, NotInitializedError},
    public_key::PublicKey,
    signature::Signature,
};

#[derive(PartialEq, Eq, Hash, derive_more::Debug)]
pub enum SecretKey {
    #[cfg(feature = "blst")]
    #[debug("[REDACTED]")]
    Blst(bls_blst::SecretKey),

    #[cfg(feature = "zkcrypto")]
    #[debug("[REDACTED]")]
    Zkcrypto(bls_zkcrypto::SecretKey),
}

assert_not_impl_any! {
    SecretKey:

    Clone,
    Copy,
    ToOwned,

    Binary,
    Display,
    LowerExp,
    LowerHex,
    Octal,
    Pointer,
    UpperExp,
    UpperHex,

    serde::Serialize,
}

impl SecretKey {
    /// Decodes a big-endian scalar with the active backend.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let active = context::active()?;

        dispatch!(active.backend, E => {
            let secret_key = deserialization::secret_key_from_bytes::<E>(bytes)?;
            Ok(E::wrap_secret_key(secret_key))
        })
    }

    pub fn from_hex(string: &str) -> Result<Self, Error> {
        let bytes = Zeroizing::new(format::from_prefixed_hex(string)?);
        Self::from_bytes(bytes.as_slice())
    }

    /// Derives a key from `key_material` with `KeyGen`.
    ///
    /// Without key material, 32 bytes are drawn from the operating system.
    /// If the operating system cannot provide them the derivation fails instead of
    /// falling back to a weaker source.
    pub fn from_keygen(key_material: Option<&[u8]>) -> Result<Self, Error> {
        let active = context::active()?;

        let bytes = match key_material {
            Some(key_material) => keygen::key_gen(key_material, b"")?,
            None => {
                let mut key_material = Zeroizing::new([0; SECRET_KEY_SIZE]);

                OsRng
                    .try_fill_bytes(key_material.as_mut_slice())
                    .map_err(|_| bls_core::Error::EntropyUnavailable)?;

                keygen::key_gen(key_material.as_slice(), b"")?
            }
        };

        dispatch!(active.backend, E => {
            let secret_key = deserialization::secret_key_from_secret_key_bytes::<E>(&bytes)?;
            Ok(E::wrap_secret_key(secret_key))
        })
    }

    pub fn random() -> Result<Self, Error> {
        Self::from_keygen(None)
    }

    pub fn to_public_key(&self) -> Result<PublicKey, NotInitializedError> {
        context::require(self.backend())?;

        Ok(match self {
            #[cfg(feature = "blst")]
            Self::Blst(secret_key) => PublicKey::Blst(secret_key.to_public_key()),
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(secret_key) => PublicKey::Zkcrypto(secret_key.to_public_key()),
        })
    }

    pub fn sign(&self, message: impl AsRef<[u8]>) -> Result<Signature, NotInitializedError> {
        context::require(self.backend())?;

        Ok(match self {
            #[cfg(feature = "blst")]
            Self::Blst(secret_key) => Signature::Blst(secret_key.sign(message.as_ref())),
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(secret_key) => Signature::Zkcrypto(secret_key.sign(message.as_ref())),
        })
    }

    #[must_use]
    pub fn to_bytes(&self) -> SecretKeyBytes {
        match self {
            #[cfg(feature = "blst")]
            Self::Blst(secret_key) => secret_key.to_bytes(),
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(secret_key) => secret_key.to_bytes(),
        }
    }

    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(format::to_prefixed_hex(self.to_bytes()))
    }

    #[must_use]
    pub const fn backend(&self) -> Backend {
        match self {
            #[cfg(feature = "blst")]
            Self::Blst(_) => Backend::Blst,
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(_) => Backend::Zkcrypto,
        }
    }
}
