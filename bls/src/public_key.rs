use bls_core::{
    aggregation, deserialization,
    format::{self, CoordType, PointFormat},
    traits::PublicKey as _,
    PublicKeyBytes,
};

use crate::{
    backend::Backend,
    context,
    dispatch::{dispatch, Variant as _},
    error::Error,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PublicKey {
    #[cfg(feature = "blst")]
    Blst(bls_blst::PublicKey),

    #[cfg(feature = "zkcrypto")]
    Zkcrypto(bls_zkcrypto::PublicKey),
}

impl PublicKey {
    /// Decodes and validates a public key, keeping it in coordinates suited for aggregation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes_with(bytes, CoordType::Jacobian, true)
    }

    /// Decodes a public key in either format, chosen by the length of `bytes`.
    ///
    /// Skipping validation is only safe for keys that were validated before.
    pub fn from_bytes_with(
        bytes: &[u8],
        coordinates: CoordType,
        validate: bool,
    ) -> Result<Self, Error> {
        let active = context::active()?;

        dispatch!(active.backend, E => {
            let public_key =
                deserialization::public_key_from_bytes::<E>(bytes, coordinates, validate)?;

            Ok(E::wrap_public_key(public_key))
        })
    }

    pub fn from_hex(string: &str) -> Result<Self, Error> {
        Self::from_bytes(&format::from_prefixed_hex(string)?)
    }

    pub fn aggregate(public_keys: &[Self]) -> Result<Self, Error> {
        let active = context::active()?;

        dispatch!(active.backend, E => {
            let public_keys = public_keys
                .iter()
                .map(E::public_key_of)
                .collect::<Result<Vec<_>, _>>()?;

            let aggregate = aggregation::aggregate_public_keys(&public_keys)?;
            Ok(E::wrap_public_key(aggregate))
        })
    }

    #[must_use]
    pub fn to_bytes(&self, format: PointFormat) -> Vec<u8> {
        match self {
            #[cfg(feature = "blst")]
            Self::Blst(public_key) => public_key.to_bytes(format),
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(public_key) => public_key.to_bytes(format),
        }
    }

    #[must_use]
    pub fn to_hex(&self, format: PointFormat) -> String {
        format::to_prefixed_hex(self.to_bytes(format))
    }

    #[must_use]
    pub fn compress(&self) -> PublicKeyBytes {
        match self {
            #[cfg(feature = "blst")]
            Self::Blst(public_key) => public_key.to_compressed(),
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(public_key) => public_key.to_compressed(),
        }
    }

    #[must_use]
    pub fn is_infinity(&self) -> bool {
        match self {
            #[cfg(feature = "blst")]
            Self::Blst(public_key) => public_key.is_infinity(),
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto(public_key) => public_key.is_infinity(),
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
