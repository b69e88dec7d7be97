use core::{fmt::Debug, hash::Hash};

use crate::{error::Error, secret_key_bytes::SecretKeyBytes};

use super::{PublicKey as PublicKeyTrait, Signature as SignatureTrait};

/// A nonzero scalar owned by a pairing engine.
///
/// Implementors must not implement `Clone`, `Copy`, formatting traits other than a redacted
/// `Debug` or `serde::Serialize`. Use [`impl_secret_key`](crate::impl_secret_key) to enforce this.
pub trait SecretKey: Debug + PartialEq + Eq + Hash + Send + Sync + Sized {
    type PublicKey: PublicKeyTrait;
    type Signature: SignatureTrait<PublicKey = Self::PublicKey>;

    /// Decodes a big-endian scalar. Zero has already been rejected by the caller.
    fn from_bytes(bytes: &SecretKeyBytes) -> Result<Self, Error>;
    fn to_bytes(&self) -> SecretKeyBytes;
    fn to_public_key(&self) -> Self::PublicKey;
    fn sign(&self, message: &[u8]) -> Self::Signature;
}

#[macro_export]
macro_rules! impl_secret_key {
    ($name:ident, $raw:ty, $to_bytes:expr) => {
        #[derive(derive_more::Debug)]
        // Inspired by `DebugSecret` from the `secrecy` crate.
        #[debug("[REDACTED]")]
        pub struct $name($raw);

        // Prevent `SecretKey` from implementing some traits to avoid leaking secret keys.
        static_assertions::assert_not_impl_any! {
            $name:
            Clone, Copy, core::ops::Deref, ToOwned,
            core::fmt::Binary, core::fmt::Display, core::fmt::LowerExp, core::fmt::LowerHex,
            core::fmt::Octal, core::fmt::Pointer, core::fmt::UpperExp, core::fmt::UpperHex,
            serde::Serialize,
        }

        impl PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ($to_bytes)(self.as_raw()) == ($to_bytes)(other.as_raw())
            }
        }

        impl Eq for $name {}

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, hasher: &mut H) {
                ($to_bytes)(self.as_raw()).hash(hasher)
            }
        }

        impl $name {
            const fn as_raw(&self) -> &$raw {
                &self.0
            }
        }
    };
}
