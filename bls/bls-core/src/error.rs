use derive_more::Display;
use thiserror::Error;

/// Errors caused by invalid input or invalid use of the API.
///
/// None of these mean the pairing engine is unusable.
/// Verification functions treat them as a rejected signature.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum Error {
    #[error("secret key is zero")]
    ZeroSecretKey,
    #[error("public key is the point at infinity")]
    ZeroPublicKey,
    #[error("signature is the point at infinity")]
    ZeroSignature,
    #[error("no values to aggregate")]
    EmptyAggregate,
    #[error("signature is not in the prime order subgroup")]
    InvalidOrder,
    #[error("{kind} cannot be {length} bytes long")]
    InvalidLength { kind: Kind, length: usize },
    #[error("secret key is not a canonical scalar")]
    InvalidSecretKey,
    #[error("public key encoding is invalid")]
    InvalidPublicKey,
    #[error("signature encoding is invalid")]
    InvalidSignature,
    #[error("hexadecimal string is invalid")]
    InvalidHex,
    #[error("key material must be at least 32 bytes long")]
    KeyMaterialTooShort,
    #[error("operating system random number generator failed")]
    EntropyUnavailable,
    #[error("pairing engine failed its self-test")]
    SelfTestFailed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Kind {
    #[display("secret key")]
    SecretKey,
    #[display("public key")]
    PublicKey,
    #[display("signature")]
    Signature,
}
