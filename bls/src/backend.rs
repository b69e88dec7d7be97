use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use bls_core::traits::Engine as _;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, SerializeDisplay, DeserializeFromStr)]
pub enum Backend {
    #[cfg(feature = "blst")]
    #[default]
    Blst,

    #[cfg(feature = "zkcrypto")]
    #[cfg_attr(not(feature = "blst"), default)]
    Zkcrypto,
}

impl Display for Backend {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum BackendParseError {
    #[error("unknown backend {0} - valid values are blst, zkcrypto")]
    InvalidBackend(String),
    #[error("backend {0} is not compiled - enable the feature of the same name")]
    BackendNotCompiled(&'static str),
}

impl FromStr for Backend {
    type Err = BackendParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            #[cfg(feature = "blst")]
            "blst" => Ok(Self::Blst),
            #[cfg(not(feature = "blst"))]
            "blst" => Err(BackendParseError::BackendNotCompiled("blst")),
            #[cfg(feature = "zkcrypto")]
            "zkcrypto" => Ok(Self::Zkcrypto),
            #[cfg(not(feature = "zkcrypto"))]
            "zkcrypto" => Err(BackendParseError::BackendNotCompiled("zkcrypto")),
            unknown => Err(BackendParseError::InvalidBackend(unknown.to_owned())),
        }
    }
}

impl Backend {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "blst")]
            Self::Blst => bls_blst::Blst::NAME,
            #[cfg(feature = "zkcrypto")]
            Self::Zkcrypto => bls_zkcrypto::Zkcrypto::NAME,
        }
    }

    /// Compiled backends in the order auto-detection tries them.
    ///
    /// `blst` is faster but relies on native code, so it goes last on `wasm32`.
    #[must_use]
    pub fn preferred() -> Vec<Self> {
        let mut candidates = vec![];

        #[cfg(feature = "blst")]
        candidates.push(Self::Blst);

        #[cfg(feature = "zkcrypto")]
        candidates.push(Self::Zkcrypto);

        if cfg!(target_arch = "wasm32") {
            candidates.reverse();
        }

        candidates
    }
}
