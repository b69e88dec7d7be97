use derive_more::derive::AsRef;
use fixed_hash::construct_fixed_hash;
use impl_serde::impl_fixed_hash_serde;

use crate::consts::{COMPRESSION_FLAG, INFINITY_FLAG, SIGNATURE_COMPRESSED_SIZE};

construct_fixed_hash! {
    /// A compressed signature that has not been validated.
    #[derive(AsRef)]
    pub struct SignatureBytes(SIGNATURE_COMPRESSED_SIZE);
}

impl_fixed_hash_serde!(SignatureBytes, SIGNATURE_COMPRESSED_SIZE);

impl SignatureBytes {
    /// The compressed encoding of the point at infinity.
    ///
    /// Individual signatures are never allowed to be this, but aggregates may be.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        let mut bytes = Self::zero();
        bytes.as_mut()[0] = COMPRESSION_FLAG | INFINITY_FLAG;
        bytes
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::empty()
    }
}
