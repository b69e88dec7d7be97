//! BLS12-381 signatures over interchangeable pairing engines.
//!
//! A backend must be initialized with [`init`] or one of its variants before any
//! cryptographic operation. Values created by one backend cannot be used with another.

#[cfg(not(any(feature = "blst", feature = "zkcrypto")))]
compile_error!("at least one of the features blst and zkcrypto must be enabled");

pub use bls_core::{
    consts::*,
    error::{Error as ValidationError, Kind},
    format::{CoordType, PointFormat},
    InfinityPairPolicy, PublicKeyBytes, SecretKeyBytes, SignatureBytes,
};

#[cfg(feature = "blst")]
pub use bls_blst::Blst;
#[cfg(feature = "zkcrypto")]
pub use bls_zkcrypto::Zkcrypto;

pub use crate::{
    backend::{Backend, BackendParseError},
    config::Config,
    context::{
        active_backend, completed_setups, destroy, init, init_blocking, init_with_config,
        init_with_config_blocking, state, ContextState,
    },
    error::{Error, InitError, NotInitializedError, TaskError},
    public_key::PublicKey,
    secret_key::SecretKey,
    signature::Signature,
    signature_set::SignatureSet,
};

pub mod functional;

mod backend;
mod config;
mod context;
mod dispatch;
mod error;
mod public_key;
mod secret_key;
mod signature;
mod signature_set;
