//! The process-wide pairing engine context.
//!
//! The context moves through `Uninitialized → Initializing → Ready → Destroyed` and can be
//! initialized again after it is destroyed. Concurrent initializers of the same backend share a
//! single setup. Operations never initialize the context implicitly.

use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bls_core::InfinityPairPolicy;
use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use parking_lot::{const_rwlock, RwLock};

use crate::{
    backend::Backend,
    config::Config,
    dispatch::dispatch,
    error::{InitError, NotInitializedError},
};

static CONTEXT: Context = Context::new();

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContextState {
    Uninitialized,
    Initializing(Backend),
    Ready(Backend),
    Destroyed,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Active {
    pub(crate) backend: Backend,
    pub(crate) infinity_pair_policy: InfinityPairPolicy,
}

type Setup = Arc<OnceCell<Result<(), InitError>>>;

enum State {
    Uninitialized,
    Initializing {
        backend: Backend,
        infinity_pair_policy: InfinityPairPolicy,
        setup: Setup,
    },
    Ready(Active),
    Destroyed,
}

struct Context {
    state: RwLock<State>,
    setups: AtomicU64,
}

type SetupFn = fn(Backend) -> Result<(), bls_core::Error>;

impl Context {
    const fn new() -> Self {
        Self {
            state: const_rwlock(State::Uninitialized),
            setups: AtomicU64::new(0),
        }
    }

    fn initialize(
        &self,
        backend: Backend,
        infinity_pair_policy: InfinityPairPolicy,
        self_test: SetupFn,
    ) -> Result<(), InitError> {
        let setup = {
            let mut state = self.state.write();

            match &*state {
                State::Ready(active) if active.backend != backend => {
                    return Err(InitError::BackendConflict {
                        active: active.backend,
                        requested: backend,
                    })
                }
                State::Ready(active) if active.infinity_pair_policy != infinity_pair_policy => {
                    return Err(InitError::ConfigConflict { backend })
                }
                State::Ready(_) => return Ok(()),
                State::Initializing {
                    backend: pending,
                    infinity_pair_policy: pending_policy,
                    setup,
                } => {
                    if *pending != backend {
                        return Err(InitError::BackendConflict {
                            active: *pending,
                            requested: backend,
                        });
                    }

                    if *pending_policy != infinity_pair_policy {
                        return Err(InitError::ConfigConflict { backend });
                    }

                    Arc::clone(setup)
                }
                State::Uninitialized | State::Destroyed => {
                    let setup = Setup::default();

                    *state = State::Initializing {
                        backend,
                        infinity_pair_policy,
                        setup: Arc::clone(&setup),
                    };

                    setup
                }
            }
        };

        // The lock is not held here. Callers that arrive during setup block on the cell instead.
        *setup.get_or_init(|| self.run_setup(backend, &setup, self_test))
    }

    fn run_setup(
        &self,
        backend: Backend,
        setup: &Setup,
        self_test: SetupFn,
    ) -> Result<(), InitError> {
        info!("initializing {backend} backend");

        let result =
            self_test(backend).map_err(|source| InitError::SetupFailed { backend, source });

        let mut state = self.state.write();

        let infinity_pair_policy = match &*state {
            State::Initializing {
                setup: pending,
                infinity_pair_policy,
                ..
            } if Arc::ptr_eq(pending, setup) => *infinity_pair_policy,
            _ => {
                warn!("{backend} backend was destroyed during initialization");
                return result.and(Err(InitError::Destroyed));
            }
        };

        match result {
            Ok(()) => {
                *state = State::Ready(Active {
                    backend,
                    infinity_pair_policy,
                });

                self.setups.fetch_add(1, Ordering::Relaxed);
                info!("{backend} backend is ready");
            }
            Err(error) => {
                *state = State::Uninitialized;
                warn!("{error}");
            }
        }

        result
    }

    fn initialize_with_config(&self, config: &Config, self_test: SetupFn) -> Result<(), InitError> {
        let infinity_pair_policy = config.infinity_pair_policy();

        if let Some(backend) = config.backend.or_else(|| self.pending_or_active_backend()) {
            return self.initialize(backend, infinity_pair_policy, self_test);
        }

        self.initialize_first_available(Backend::preferred(), infinity_pair_policy, self_test)
    }

    fn initialize_first_available(
        &self,
        candidates: impl IntoIterator<Item = Backend>,
        infinity_pair_policy: InfinityPairPolicy,
        self_test: SetupFn,
    ) -> Result<(), InitError> {
        let mut last_error = InitError::NoBackendAvailable;

        for backend in candidates {
            match self.initialize(backend, infinity_pair_policy, self_test) {
                Ok(()) => return Ok(()),
                Err(error @ (InitError::BackendConflict { .. } | InitError::ConfigConflict { .. })) => {
                    return Err(error)
                }
                Err(error) => {
                    warn!("falling back from {backend} backend: {error}");
                    last_error = error;
                }
            }
        }

        Err(last_error)
    }

    fn destroy(&self) {
        let mut state = self.state.write();

        match &*state {
            State::Ready(active) => info!("destroying {} backend", active.backend),
            State::Initializing { backend, .. } => {
                warn!("destroying {backend} backend before initialization completed");
            }
            State::Uninitialized | State::Destroyed => {
                debug!("no backend to destroy");
                return;
            }
        }

        *state = State::Destroyed;
    }

    fn snapshot(&self) -> ContextState {
        match &*self.state.read() {
            State::Uninitialized => ContextState::Uninitialized,
            State::Initializing { backend, .. } => ContextState::Initializing(*backend),
            State::Ready(active) => ContextState::Ready(active.backend),
            State::Destroyed => ContextState::Destroyed,
        }
    }

    fn pending_or_active_backend(&self) -> Option<Backend> {
        match &*self.state.read() {
            State::Initializing { backend, .. } | State::Ready(Active { backend, .. }) => {
                Some(*backend)
            }
            State::Uninitialized | State::Destroyed => None,
        }
    }
}

fn self_test(backend: Backend) -> Result<(), bls_core::Error> {
    dispatch!(backend, E => bls_core::self_test::self_test::<E>())
}

/// Initializes `backend` on the blocking thread pool.
///
/// Must be called from within a Tokio runtime.
pub async fn init(backend: Backend) -> Result<(), InitError> {
    init_with_config(&Config::with_backend(backend)).await
}

pub fn init_blocking(backend: Backend) -> Result<(), InitError> {
    init_with_config_blocking(&Config::with_backend(backend))
}

pub async fn init_with_config(config: &Config) -> Result<(), InitError> {
    let config = *config;

    tokio::task::spawn_blocking(move || init_with_config_blocking(&config))
        .await
        .map_err(|_| InitError::Interrupted)?
}

/// Initializes the backend named in `config` or the first one in [`Backend::preferred`] that
/// passes setup.
///
/// Initializing the backend that is already ready with the same configuration does nothing.
/// A different backend fails with [`InitError::BackendConflict`].
/// The same backend with a different configuration fails with [`InitError::ConfigConflict`].
pub fn init_with_config_blocking(config: &Config) -> Result<(), InitError> {
    CONTEXT.initialize_with_config(config, self_test)
}

/// Tears down the active backend. Destroying a context that is not ready does nothing.
pub fn destroy() {
    CONTEXT.destroy();
}

#[must_use]
pub fn state() -> ContextState {
    CONTEXT.snapshot()
}

#[must_use]
pub fn active_backend() -> Option<Backend> {
    active().ok().map(|active| active.backend)
}

/// Number of backend setups that have completed since the process started.
#[must_use]
pub fn completed_setups() -> u64 {
    CONTEXT.setups.load(Ordering::Relaxed)
}

pub(crate) fn active() -> Result<Active, NotInitializedError> {
    match &*CONTEXT.state.read() {
        State::Ready(active) => Ok(*active),
        State::Initializing { .. } | State::Uninitialized | State::Destroyed => {
            Err(NotInitializedError::new(None))
        }
    }
}

/// Like [`active`], but fails unless the active backend is `backend`.
pub(crate) fn require(backend: Backend) -> Result<Active, NotInitializedError> {
    match active() {
        Ok(active) if active.backend == backend => Ok(active),
        _ => Err(NotInitializedError::new(Some(backend))),
    }
}
