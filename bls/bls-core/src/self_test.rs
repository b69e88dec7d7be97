use log::debug;

use crate::{
    deserialization::{secret_key_from_secret_key_bytes, signature_from_bytes},
    error::Error,
    format::CoordType,
    keygen::key_gen,
    traits::{Engine, SecretKey as _, Signature as _},
    verification::verify,
};

const KEY_MATERIAL: [u8; 32] = *b"self-test key material for BLS12";
const MESSAGE: &[u8] = b"self-test";
const TAMPERED_MESSAGE: &[u8] = b"self-tesT";

/// Signs and verifies with a fixed key to confirm that the engine is usable.
pub fn self_test<E: Engine>() -> Result<(), Error> {
    let secret_key = secret_key_from_secret_key_bytes::<E>(&key_gen(&KEY_MATERIAL, b"")?)?;
    let public_key = secret_key.to_public_key();
    let signature = secret_key.sign(MESSAGE);

    let decoded =
        signature_from_bytes::<E>(signature.to_compressed().as_bytes(), CoordType::Affine, true)?;

    let passed = decoded == signature
        && verify(&decoded, &public_key, MESSAGE)
        && !verify(&decoded, &public_key, TAMPERED_MESSAGE);

    debug!("{} self-test passed: {passed}", E::NAME);

    if passed {
        Ok(())
    } else {
        Err(Error::SelfTestFailed)
    }
}
