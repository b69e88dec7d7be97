use bls_core::{
    aggregation, deserialization,
    format::{self, CoordType, PointFormat},
    traits::Signature as _,
    verification, SignatureBytes,
};

use crate::{
    backend::Backend,
    context,
    dispatch::{dispatch, Variant as _},
    error::{Error, NotInitializedError, TaskError},
    public_key::PublicKey,
    signature_set::SignatureSet,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Signature {
    #[cfg(feature = "blst")]
    Blst(bls_blst::Signature),

    #[cfg(feature = "zkcrypto")]
    Zkcrypto(bls_zkcrypto::Signature),
}

impl Signature {
    /// Decodes a signature and checks that it is in the prime order subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes_with(bytes, CoordType::Affine, true)
    }

    pub fn from_bytes_with(
        bytes: &[u8],
        coordinates: CoordType,
        validate: bool,
    ) -> Result<Self, Error> {
        let active = context::active()?;

        dispatch!(active.backend, E => {
            let signature =
                deserialization::signature_from_bytes::<E>(bytes, coordinates, validate)?;

            Ok(E::wrap_signature(signature))
        })
    }

    pub fn from_hex(string: &str) -> Result<Self, Error> {
        Self::from_bytes(&format::from_prefixed_hex(string)?)
    }

    pub fn aggregate(signatures: &[Self]) -> Result<Self, Error> {
        let active = context::active()?;

        dispatch!(active.backend, E => {
            let signatures = signatures
                .iter()
                .map(E::signature_of)
                .collect::<Result<Vec<_>, _>>()?;

            let aggregate = aggregation::aggregate_signatures(&signatures)?;
            Ok(E::wrap_signature(aggregate))
        })
    }

    pub fn verify(
        &self,
        public_key: &PublicKey,
        message: impl AsRef<[u8]>,
    ) -> Result<bool, NotInitializedError> {
        let active = context::require(self.backend())?;

        dispatch!(active.backend, E => {
            let signature = E::signature_of(self)?;
            let public_key = E::public_key_of(public_key)?;
            Ok(verification::verify(signature, public_key, message.as_ref()))
        })
    }

    /// Verifies a signature made by all of `public_keys` over the same message.
    pub fn verify_aggregate(
        &self,
        public_keys: &[PublicKey],
        message: impl AsRef<[u8]>,
    ) -> Result<bool, NotInitializedError> {
        let active = context::require(self.backend())?;

        dispatch!(active.backend, E => {
            let signature = E::signature_of(self)?;
            let public_keys = public_keys
                .iter()
                .map(E::public_key_of)
                .collect::<Result<Vec<_>, _>>()?;

            Ok(verification::fast_aggregate_verify(
                signature,
                &public_keys,
                message.as_ref(),
            ))
        })
    }

    /// Verifies an aggregate signature in which `public_keys[i]` signed `messages[i]`.
    pub fn verify_multiple(
        &self,
        public_keys: &[PublicKey],
        messages: &[impl AsRef<[u8]>],
    ) -> Result<bool, NotInitializedError> {
        let active = context::require(self.backend())?;

        dispatch!(active.backend, E => {
            let signature = E::signature_of(self)?;
            let public_keys = public_keys
                .iter()
                .map(E::public_key_of)
                .collect::<Result<Vec<_>, _>>()?;
            let messages = messages
                .iter()
                .map(|message| message.as_ref())
                .collect::<Vec<&[u8]>>();

            Ok(verification::aggregate_verify(
                signature,
                &public_keys,
                &messages,
                active.infinity_pair_policy,
            ))
        })
    }

    /// Verifies independent signature sets at once.
    ///
    /// Each set is weighted with a fresh random scalar, so invalid signatures crafted to cancel
    /// each other out are rejected. An empty batch is rejected.
    pub fn verify_multiple_signatures(
        sets: &[SignatureSet<impl AsRef<[u8]>>],
    ) -> Result<bool, NotInitializedError> {
        let active = context::active()?;

        dispatch!(active.backend, E => {
            let sets = sets
                .iter()
                .map(|set| -> Result<_, NotInitializedError> {
                    Ok(bls_core::SignatureSet::new(
                        set.message.as_ref(),
                        E::public_key_of(&set.public_key)?,
                        E::signature_of(&set.signature)?,
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(verification::verify_multiple_signatures(&sets))
        })
    }

    /// Runs [`Self::verify_multiple_signatures`] on Tokio's blocking thread pool.
    pub async fn async_verify_multiple_signatures<M>(
        sets: Vec<SignatureSet<M>>,
    ) -> Result<bool, TaskError>
    where
        M: AsRef<[u8]> + Send + 'static,
    {
        context::active()?;

        let verified = tokio::task::spawn_blocking(move || Self::verify_multiple_signatures(&sets))
            .await??;

        Ok(verified)
    }

    #[must_use]
    pub fn to_bytes(&self, format: PointFormat) -> Vec<u8> {
        match self {
            #[cfg(feature = "blst")]
            Self::Blst(signature) => signature.to_bytes(format),
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(signature) => signature.to_bytes(format),
        }
    }

    #[must_use]
    pub fn to_hex(&self, format: PointFormat) -> String {
        format::to_prefixed_hex(self.to_bytes(format))
    }

    #[must_use]
    pub fn compress(&self) -> SignatureBytes {
        match self {
            #[cfg(feature = "blst")]
            Self::Blst(signature) => signature.to_compressed(),
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(signature) => signature.to_compressed(),
        }
    }

    #[must_use]
    pub fn is_infinity(&self) -> bool {
        match self {
            #[cfg(feature = "blst")]
            Self::Blst(signature) => signature.is_infinity(),
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(signature) => signature.is_infinity(),
        }
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
