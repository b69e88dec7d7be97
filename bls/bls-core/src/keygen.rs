//! [`KeyGen`](https://datatracker.ietf.org/doc/html/draft-irtf-cfrg-bls-signature-04#section-2.3)
//! from the BLS signature draft.
//!
//! The derivation runs outside the pairing engines so that every engine produces the same secret
//! key from the same key material.

use hkdf::HkdfExtract;
use num_bigint::BigUint;
use sha2::{Digest as _, Sha256};
use zeroize::Zeroizing;

use crate::{consts::SECRET_KEY_SIZE, error::Error, secret_key_bytes::SecretKeyBytes};

const SALT: &[u8] = b"BLS-SIG-KEYGEN-SALT-";

// ceil((3 * ceil(log2(r))) / 16)
const OKM_LENGTH: usize = 48;
const OKM_LENGTH_OCTETS: [u8; 2] = [0, 48];

const CURVE_ORDER: [u8; SECRET_KEY_SIZE] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

pub const MIN_KEY_MATERIAL_SIZE: usize = 32;

pub fn key_gen(key_material: &[u8], key_info: &[u8]) -> Result<SecretKeyBytes, Error> {
    if key_material.len() < MIN_KEY_MATERIAL_SIZE {
        return Err(Error::KeyMaterialTooShort);
    }

    let order = BigUint::from_bytes_be(&CURVE_ORDER);
    let mut salt = Sha256::digest(SALT);

    loop {
        let mut extract = HkdfExtract::<Sha256>::new(Some(salt.as_slice()));
        extract.input_ikm(key_material);
        extract.input_ikm(&[0]);

        let (_, hkdf) = extract.finalize();
        let mut okm = Zeroizing::new([0; OKM_LENGTH]);

        hkdf.expand_multi_info(&[key_info, &OKM_LENGTH_OCTETS], okm.as_mut_slice())
            .expect("48 bytes is a valid output length for HKDF-SHA256");

        let scalar = BigUint::from_bytes_be(okm.as_slice()) % &order;

        if scalar.bits() != 0 {
            let digits = Zeroizing::new(scalar.to_bytes_be());
            let mut bytes = SecretKeyBytes::default();
            let offset = SECRET_KEY_SIZE - digits.len();
            bytes.bytes[offset..].copy_from_slice(digits.as_slice());
            return Ok(bytes);
        }

        salt = Sha256::digest(salt);
    }
}
