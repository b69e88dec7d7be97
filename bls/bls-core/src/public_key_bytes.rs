use derive_more::derive::AsRef;
use fixed_hash::construct_fixed_hash;
use impl_serde::impl_fixed_hash_serde;

use crate::consts::PUBLIC_KEY_COMPRESSED_SIZE;

construct_fixed_hash! {
    /// A compressed public key that has not been validated.
    #[derive(AsRef)]
    pub struct PublicKeyBytes(PUBLIC_KEY_COMPRESSED_SIZE);
}

impl_fixed_hash_serde!(PublicKeyBytes, PUBLIC_KEY_COMPRESSED_SIZE);

