use bls_core::traits::Engine;

use crate::{
    error::NotInitializedError, public_key::PublicKey, secret_key::SecretKey,
    signature::Signature,
};

/// Evaluates `$body` with `$engine` bound to the engine type of `$backend`.
macro_rules! dispatch {
    ($backend:expr, $engine:ident => $body:expr) => {
        match $backend {
            #[cfg(feature = "blst")]
            $crate::backend::Backend::Blst => {
                type $engine = bls_blst::Blst;
                $body
            }
            #[cfg(feature = "zkcrypto")]
            $crate::backend::Backend::Zkcrypto => {
                type $engine = bls_zkcrypto::Zkcrypto;
                $body
            }
        }
    };
}

pub(crate) use dispatch;

/// Conversions between engine values and the variants of the dispatching enums.
pub(crate) trait Variant: Engine {
    fn wrap_secret_key(secret_key: Self::SecretKey) -> SecretKey;
    fn wrap_public_key(public_key: Self::PublicKey) -> PublicKey;
    fn wrap_signature(signature: Self::Signature) -> Signature;

    fn project_public_key(public_key: &PublicKey) -> Option<&Self::PublicKey>;
    fn project_signature(signature: &Signature) -> Option<&Self::Signature>;

    // A value created by a backend that has since been replaced is unusable.
    fn public_key_of(public_key: &PublicKey) -> Result<&Self::PublicKey, NotInitializedError> {
        Self::project_public_key(public_key)
            .ok_or_else(|| NotInitializedError::new(Some(public_key.backend())))
    }

    fn signature_of(signature: &Signature) -> Result<&Self::Signature, NotInitializedError> {
        Self::project_signature(signature)
            .ok_or_else(|| NotInitializedError::new(Some(signature.backend())))
    }
}

#[cfg(feature = "blst")]
impl Variant for bls_blst::Blst {
    fn wrap_secret_key(secret_key: Self::SecretKey) -> SecretKey {
        SecretKey::Blst(secret_key)
    }

    fn wrap_public_key(public_key: Self::PublicKey) -> PublicKey {
        PublicKey::Blst(public_key)
    }

    fn wrap_signature(signature: Self::Signature) -> Signature {
        Signature::Blst(signature)
    }

    fn project_public_key(public_key: &PublicKey) -> Option<&Self::PublicKey> {
        match public_key {
            PublicKey::Blst(public_key) => Some(public_key),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    fn project_signature(signature: &Signature) -> Option<&Self::Signature> {
        match signature {
            Signature::Blst(signature) => Some(signature),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

#[cfg(feature = "zkcrypto")]
impl Variant for bls_zkcrypto::Zkcrypto {
    fn wrap_secret_key(secret_key: Self::SecretKey) -> SecretKey {
        SecretKey::Zkcrypto(secret_key)
    }

    fn wrap_public_key(public_key: Self::PublicKey) -> PublicKey {
        PublicKey::Zkcrypto(public_key)
    }

    fn wrap_signature(signature: Self::Signature) -> Signature {
        Signature::Zkcrypto(signature)
    }

    fn project_public_key(public_key: &PublicKey) -> Option<&Self::PublicKey> {
        match public_key {
            PublicKey::Zkcrypto(public_key) => Some(public_key),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    fn project_signature(signature: &Signature) -> Option<&Self::Signature> {
        match signature {
            Signature::Zkcrypto(signature) => Some(signature),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}
