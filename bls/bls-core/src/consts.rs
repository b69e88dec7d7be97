/// Ciphersuite of the proof-of-possession scheme used by Ethereum.
/// Both engines hash messages to G2 with it, so their signatures are interchangeable.
pub const DOMAIN_SEPARATION_TAG: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

// Unlike public keys and signatures, secret keys are not compressed.
pub const SECRET_KEY_SIZE: usize = 32;

pub const PUBLIC_KEY_COMPRESSED_SIZE: usize = 48;
pub const PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 96;

pub const SIGNATURE_COMPRESSED_SIZE: usize = 96;
pub const SIGNATURE_UNCOMPRESSED_SIZE: usize = 192;

// The 3 most significant bits of a serialized point are flags:
// compression, infinity and sign of the y coordinate.
pub(crate) const COMPRESSION_FLAG: u8 = 0b1000_0000;
pub(crate) const INFINITY_FLAG: u8 = 0b0100_0000;

/// Checks whether `bytes` is the canonical encoding of the point at infinity in either format.
#[must_use]
pub fn is_infinity_encoding(bytes: &[u8]) -> bool {
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };

    first & !COMPRESSION_FLAG == INFINITY_FLAG && rest.iter().all(|byte| *byte == 0)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&[0xc0; 1], true; "compressed flags alone")]
    #[test_case(&[0x40, 0, 0], true; "uncompressed infinity")]
    #[test_case(&[0xc0, 0, 1], false; "nonzero coordinate")]
    #[test_case(&[0x80, 0, 0], false; "compression flag without infinity flag")]
    #[test_case(&[0xe0, 0, 0], false; "sign flag set")]
    #[test_case(&[], false; "empty")]
    fn infinity_encoding_is_detected(bytes: &[u8], expected: bool) {
        assert_eq!(is_infinity_encoding(bytes), expected);
    }
}
