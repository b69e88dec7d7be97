pub mod aggregation;
pub mod consts;
pub mod deserialization;
pub mod error;
pub mod format;
pub mod keygen;
pub mod scalar;
pub mod self_test;
pub mod traits;
pub mod verification;

mod public_key_bytes;
mod secret_key_bytes;
mod signature_bytes;

pub use consts::*;
pub use error::*;
pub use format::*;
pub use public_key_bytes::PublicKeyBytes;
pub use scalar::RandomScalar;
pub use secret_key_bytes::SecretKeyBytes;
pub use signature_bytes::SignatureBytes;
pub use traits::*;
pub use verification::InfinityPairPolicy;
