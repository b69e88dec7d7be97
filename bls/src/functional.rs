//! Byte-oriented interface layered over the value types.
//!
//! Arguments may be encoded bytes, `0x`-prefixed hex strings or values that were decoded before.
//! Verification functions treat arguments that fail to decode as a failed verification but still
//! propagate [`NotInitializedError`].

use bls_core::{PublicKeyBytes, SignatureBytes};
use derive_more::Constructor;

use crate::{
    context,
    error::{or_false, Error, NotInitializedError, TaskError},
    public_key::PublicKey,
    secret_key::SecretKey,
    signature::Signature,
    signature_set::SignatureSet,
};

pub trait PublicKeyArg {
    fn to_public_key(&self) -> Result<PublicKey, Error>;
}

pub trait SignatureArg {
    fn to_signature(&self) -> Result<Signature, Error>;
}

impl PublicKeyArg for PublicKey {
    fn to_public_key(&self) -> Result<PublicKey, Error> {
        Ok(*self)
    }
}

impl PublicKeyArg for PublicKeyBytes {
    fn to_public_key(&self) -> Result<PublicKey, Error> {
        PublicKey::from_bytes(self.as_bytes())
    }
}

impl PublicKeyArg for [u8] {
    fn to_public_key(&self) -> Result<PublicKey, Error> {
        PublicKey::from_bytes(self)
    }
}

impl<const N: usize> PublicKeyArg for [u8; N] {
    fn to_public_key(&self) -> Result<PublicKey, Error> {
        PublicKey::from_bytes(self)
    }
}

impl PublicKeyArg for Vec<u8> {
    fn to_public_key(&self) -> Result<PublicKey, Error> {
        PublicKey::from_bytes(self)
    }
}

impl PublicKeyArg for str {
    fn to_public_key(&self) -> Result<PublicKey, Error> {
        PublicKey::from_hex(self)
    }
}

impl<T: PublicKeyArg + ?Sized> PublicKeyArg for &T {
    fn to_public_key(&self) -> Result<PublicKey, Error> {
        (**self).to_public_key()
    }
}

impl SignatureArg for Signature {
    fn to_signature(&self) -> Result<Signature, Error> {
        Ok(*self)
    }
}

impl SignatureArg for SignatureBytes {
    fn to_signature(&self) -> Result<Signature, Error> {
        Signature::from_bytes(self.as_bytes())
    }
}

impl SignatureArg for [u8] {
    fn to_signature(&self) -> Result<Signature, Error> {
        Signature::from_bytes(self)
    }
}

impl<const N: usize> SignatureArg for [u8; N] {
    fn to_signature(&self) -> Result<Signature, Error> {
        Signature::from_bytes(self)
    }
}

impl SignatureArg for Vec<u8> {
    fn to_signature(&self) -> Result<Signature, Error> {
        Signature::from_bytes(self)
    }
}

impl SignatureArg for str {
    fn to_signature(&self) -> Result<Signature, Error> {
        Signature::from_hex(self)
    }
}

impl<T: SignatureArg + ?Sized> SignatureArg for &T {
    fn to_signature(&self) -> Result<Signature, Error> {
        (**self).to_signature()
    }
}

/// Arguments of [`verify_multiple_signatures`] for one signed message.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct SignatureSetArgs<M, P, S> {
    pub message: M,
    pub public_key: P,
    pub signature: S,
}

pub fn sign(secret_key: &[u8], message: impl AsRef<[u8]>) -> Result<SignatureBytes, Error> {
    let signature = SecretKey::from_bytes(secret_key)?.sign(message)?;
    Ok(signature.compress())
}

pub fn secret_key_to_public_key(secret_key: &[u8]) -> Result<PublicKeyBytes, Error> {
    let public_key = SecretKey::from_bytes(secret_key)?.to_public_key()?;
    Ok(public_key.compress())
}

pub fn aggregate_public_keys(public_keys: &[impl PublicKeyArg]) -> Result<PublicKeyBytes, Error> {
    let public_keys = to_public_keys(public_keys)?;
    Ok(PublicKey::aggregate(&public_keys)?.compress())
}

pub fn aggregate_signatures(signatures: &[impl SignatureArg]) -> Result<SignatureBytes, Error> {
    let signatures = signatures
        .iter()
        .map(SignatureArg::to_signature)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Signature::aggregate(&signatures)?.compress())
}

pub fn verify(
    public_key: impl PublicKeyArg,
    message: impl AsRef<[u8]>,
    signature: impl SignatureArg,
) -> Result<bool, NotInitializedError> {
    or_false(try_verify(&public_key, message.as_ref(), &signature))
}

pub fn verify_aggregate(
    public_keys: &[impl PublicKeyArg],
    message: impl AsRef<[u8]>,
    signature: impl SignatureArg,
) -> Result<bool, NotInitializedError> {
    or_false(try_verify_aggregate(public_keys, message.as_ref(), &signature))
}

pub fn verify_multiple(
    public_keys: &[impl PublicKeyArg],
    messages: &[impl AsRef<[u8]>],
    signature: impl SignatureArg,
) -> Result<bool, NotInitializedError> {
    or_false(try_verify_multiple(public_keys, messages, &signature))
}

pub fn verify_multiple_signatures<M, P, S>(
    sets: &[SignatureSetArgs<M, P, S>],
) -> Result<bool, NotInitializedError>
where
    M: AsRef<[u8]>,
    P: PublicKeyArg,
    S: SignatureArg,
{
    or_false(try_verify_multiple_signatures(sets))
}

pub async fn async_verify<P, M, S>(
    public_key: P,
    message: M,
    signature: S,
) -> Result<bool, TaskError>
where
    P: PublicKeyArg + Send + 'static,
    M: AsRef<[u8]> + Send + 'static,
    S: SignatureArg + Send + 'static,
{
    run_blocking(move || verify(public_key, message, signature)).await
}

pub async fn async_verify_aggregate<P, M, S>(
    public_keys: Vec<P>,
    message: M,
    signature: S,
) -> Result<bool, TaskError>
where
    P: PublicKeyArg + Send + 'static,
    M: AsRef<[u8]> + Send + 'static,
    S: SignatureArg + Send + 'static,
{
    run_blocking(move || verify_aggregate(&public_keys, message, signature)).await
}

pub async fn async_verify_multiple<P, M, S>(
    public_keys: Vec<P>,
    messages: Vec<M>,
    signature: S,
) -> Result<bool, TaskError>
where
    P: PublicKeyArg + Send + 'static,
    M: AsRef<[u8]> + Send + 'static,
    S: SignatureArg + Send + 'static,
{
    run_blocking(move || verify_multiple(&public_keys, &messages, signature)).await
}

pub async fn async_verify_multiple_signatures<M, P, S>(
    sets: Vec<SignatureSetArgs<M, P, S>>,
) -> Result<bool, TaskError>
where
    M: AsRef<[u8]> + Send + 'static,
    P: PublicKeyArg + Send + 'static,
    S: SignatureArg + Send + 'static,
{
    run_blocking(move || verify_multiple_signatures(&sets)).await
}

// Fails before spawning so that an uninitialized backend is reported without a thread hop.
async fn run_blocking(
    verification: impl FnOnce() -> Result<bool, NotInitializedError> + Send + 'static,
) -> Result<bool, TaskError> {
    context::active()?;

    let verified = tokio::task::spawn_blocking(verification).await??;

    Ok(verified)
}

fn try_verify(
    public_key: &impl PublicKeyArg,
    message: &[u8],
    signature: &impl SignatureArg,
) -> Result<bool, Error> {
    let public_key = public_key.to_public_key()?;
    let signature = signature.to_signature()?;
    Ok(signature.verify(&public_key, message)?)
}

fn try_verify_aggregate(
    public_keys: &[impl PublicKeyArg],
    message: &[u8],
    signature: &impl SignatureArg,
) -> Result<bool, Error> {
    let public_keys = to_public_keys(public_keys)?;
    let signature = signature.to_signature()?;
    Ok(signature.verify_aggregate(&public_keys, message)?)
}

fn try_verify_multiple(
    public_keys: &[impl PublicKeyArg],
    messages: &[impl AsRef<[u8]>],
    signature: &impl SignatureArg,
) -> Result<bool, Error> {
    let public_keys = to_public_keys(public_keys)?;
    let signature = signature.to_signature()?;
    Ok(signature.verify_multiple(&public_keys, messages)?)
}

fn try_verify_multiple_signatures<M, P, S>(sets: &[SignatureSetArgs<M, P, S>]) -> Result<bool, Error>
where
    M: AsRef<[u8]>,
    P: PublicKeyArg,
    S: SignatureArg,
{
    let sets = sets
        .iter()
        .map(|set| -> Result<_, Error> {
            Ok(SignatureSet::new(
                set.message.as_ref(),
                set.public_key.to_public_key()?,
                set.signature.to_signature()?,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Signature::verify_multiple_signatures(&sets)?)
}

fn to_public_keys(public_keys: &[impl PublicKeyArg]) -> Result<Vec<PublicKey>, Error> {
    public_keys.iter().map(PublicKeyArg::to_public_key).collect()
}
