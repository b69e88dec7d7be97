use crate::error::Error;

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum PointFormat {
    /// The canonical interchange form.
    #[default]
    Compressed,
    Uncompressed,
}

/// Hint for the representation a point should be kept in after deserialization.
///
/// Affine coordinates are cheaper to feed into pairings.
/// Projective (Jacobian) coordinates are cheaper to add together.
/// The hint never affects serialized output and engines are free to ignore it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CoordType {
    Affine,
    Jacobian,
}

#[must_use]
pub fn to_prefixed_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decodes hexadecimal digits with an optional `0x` prefix. Digits may be in either case.
pub fn from_prefixed_hex(string: &str) -> Result<Vec<u8>, Error> {
    let digits = string
        .strip_prefix("0x")
        .or_else(|| string.strip_prefix("0X"))
        .unwrap_or(string);

    hex::decode(digits).map_err(|_| Error::InvalidHex)
}
