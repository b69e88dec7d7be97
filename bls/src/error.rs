use derive_more::Constructor;
use log::debug;
use thiserror::Error;
use tokio::task::JoinError;

use crate::backend::Backend;

/// The pairing engine needed for an operation is not ready.
///
/// This is a configuration bug and is never converted into a failed verification.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error, Constructor)]
#[error(
    "BLS backend is not initialized{}",
    .backend.map(|backend| format!(": {backend}")).unwrap_or_default(),
)]
pub struct NotInitializedError {
    pub backend: Option<Backend>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum Error {
    #[error(transparent)]
    NotInitialized(#[from] NotInitializedError),
    #[error(transparent)]
    Invalid(#[from] bls_core::Error),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum InitError {
    #[error("{active} backend is active; destroy it before initializing {requested}")]
    BackendConflict { active: Backend, requested: Backend },
    #[error("{backend} backend is active with a different configuration; destroy it first")]
    ConfigConflict { backend: Backend },
    #[error("{backend} backend failed setup: {source}")]
    SetupFailed {
        backend: Backend,
        source: bls_core::Error,
    },
    #[error("backend was destroyed while it was being initialized")]
    Destroyed,
    #[error("initialization task did not complete")]
    Interrupted,
    #[error("no backend could be initialized")]
    NoBackendAvailable,
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    NotInitialized(#[from] NotInitializedError),
    #[error("verification task did not complete: {0}")]
    Join(#[from] JoinError),
}

/// Converts invalid arguments to a failed verification while propagating [`NotInitializedError`].
pub(crate) fn or_false(result: Result<bool, Error>) -> Result<bool, NotInitializedError> {
    match result {
        Ok(verified) => Ok(verified),
        Err(Error::NotInitialized(error)) => Err(error),
        Err(Error::Invalid(error)) => {
            debug!("verification rejected invalid input: {error}");
            Ok(false)
        }
    }
}
