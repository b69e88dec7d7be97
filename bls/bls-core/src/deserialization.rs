//! Decoding of byte strings into engine values.
//!
//! Checks that do not depend on curve arithmetic (lengths, zero bytes, identity policy) happen
//! here so that every engine applies them in the same order.

use log::debug;

use crate::{
    consts::{
        PUBLIC_KEY_COMPRESSED_SIZE, PUBLIC_KEY_UNCOMPRESSED_SIZE, SECRET_KEY_SIZE,
        SIGNATURE_COMPRESSED_SIZE, SIGNATURE_UNCOMPRESSED_SIZE,
    },
    error::{Error, Kind},
    format::{CoordType, PointFormat},
    secret_key_bytes::SecretKeyBytes,
    traits::{
        Engine, InfinityPolicy, PublicKey as PublicKeyTrait, SecretKey as SecretKeyTrait,
        Signature as SignatureTrait,
    },
};

pub fn secret_key_from_bytes<E: Engine>(bytes: &[u8]) -> Result<E::SecretKey, Error> {
    let array = <[u8; SECRET_KEY_SIZE]>::try_from(bytes).map_err(|_| Error::InvalidLength {
        kind: Kind::SecretKey,
        length: bytes.len(),
    })?;

    secret_key_from_secret_key_bytes::<E>(&SecretKeyBytes::from(array))
}

pub fn secret_key_from_secret_key_bytes<E: Engine>(
    bytes: &SecretKeyBytes,
) -> Result<E::SecretKey, Error> {
    if bytes.is_zero() {
        return Err(Error::ZeroSecretKey);
    }

    E::SecretKey::from_bytes(bytes)
}

pub fn public_key_from_bytes<E: Engine>(
    bytes: &[u8],
    coordinates: CoordType,
    validate: bool,
) -> Result<E::PublicKey, Error> {
    let format = match bytes.len() {
        PUBLIC_KEY_COMPRESSED_SIZE => PointFormat::Compressed,
        PUBLIC_KEY_UNCOMPRESSED_SIZE => PointFormat::Uncompressed,
        length => {
            return Err(Error::InvalidLength {
                kind: Kind::PublicKey,
                length,
            })
        }
    };

    if is_all_zero(bytes) {
        return Err(Error::ZeroPublicKey);
    }

    let public_key = E::PublicKey::deserialize(bytes, format, coordinates)?;

    if public_key.is_infinity() {
        match E::INFINITY_PUBLIC_KEY {
            InfinityPolicy::Reject => return Err(Error::ZeroPublicKey),
            InfinityPolicy::RejectWhenValidating if validate => return Err(Error::ZeroPublicKey),
            InfinityPolicy::RejectWhenValidating => {
                debug!("{} accepted public key at infinity without validation", E::NAME);
            }
        }
    }

    if validate && !E::DESERIALIZATION_CHECKS_SUBGROUP && !public_key.subgroup_check() {
        return Err(Error::InvalidPublicKey);
    }

    Ok(public_key)
}

pub fn signature_from_bytes<E: Engine>(
    bytes: &[u8],
    coordinates: CoordType,
    validate: bool,
) -> Result<E::Signature, Error> {
    let format = match bytes.len() {
        SIGNATURE_COMPRESSED_SIZE => PointFormat::Compressed,
        SIGNATURE_UNCOMPRESSED_SIZE => PointFormat::Uncompressed,
        length => {
            return Err(Error::InvalidLength {
                kind: Kind::Signature,
                length,
            })
        }
    };

    // An all-zero string is not even a well-formed encoding of the identity.
    // Signing never produces the identity, so treat it as tampering.
    if is_all_zero(bytes) {
        return Err(Error::ZeroSignature);
    }

    let signature = E::Signature::deserialize(bytes, format, coordinates)?;

    if validate && !E::DESERIALIZATION_CHECKS_SUBGROUP && !signature.subgroup_check() {
        return Err(Error::InvalidOrder);
    }

    Ok(signature)
}

fn is_all_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|byte| *byte == 0)
}
