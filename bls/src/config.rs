use bls_core::InfinityPairPolicy;
use serde::{Deserialize, Serialize};

use crate::backend::{Backend, BackendParseError};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `None` selects the first backend in [`Backend::preferred`] that passes setup.
    pub backend: Option<Backend>,

    /// Makes multi-message aggregate verification accept a single pair of
    /// identity public key and identity signature.
    /// Only needed to pass some consensus conformance tests.
    pub accept_infinity_pair: bool,
}

impl Config {
    pub const BACKEND_VARIABLE: &'static str = "BLS_BACKEND";

    #[must_use]
    pub const fn with_backend(backend: Backend) -> Self {
        Self {
            backend: Some(backend),
            accept_infinity_pair: false,
        }
    }

    /// Reads the backend from `BLS_BACKEND`.
    /// An unset or empty variable or the value `auto` enables auto-detection.
    pub fn from_env() -> Result<Self, BackendParseError> {
        let backend = match std::env::var(Self::BACKEND_VARIABLE) {
            Ok(value) if value.is_empty() || value == "auto" => None,
            Ok(value) => Some(value.parse()?),
            Err(_) => None,
        };

        Ok(Self {
            backend,
            ..Self::default()
        })
    }

    #[must_use]
    pub const fn infinity_pair_policy(&self) -> InfinityPairPolicy {
        if self.accept_infinity_pair {
            InfinityPairPolicy::Accept
        } else {
            InfinityPairPolicy::Reject
        }
    }
}
