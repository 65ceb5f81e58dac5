//! Async-loadable resources with request fencing.
//!
//! A [`Resource`] holds the lifecycle of one asynchronously loaded value:
//! idle, loading, ready, or failed. Loads are fenced: [`Resource::begin_load`]
//! hands out a generation token, and a completion carrying a stale token is
//! discarded instead of overwriting the result of a newer load. Rapid
//! re-loads (say, the user switching models twice before the first fetch
//! resolves) therefore cannot finish out of order.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// Error type for resource loading failures
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ResourceError {
    /// Error message
    pub message: String,
}

impl ResourceError {
    /// Create a new resource error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for ResourceError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ResourceError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// The state of an async-loadable resource.
#[derive(Debug, Clone, Default)]
pub enum ResourceState<T> {
    /// Resource has not started loading
    #[default]
    Idle,
    /// Resource is loading
    Loading,
    /// Resource loaded successfully
    Ready(T),
    /// Resource failed to load
    Error(ResourceError),
}

impl<T> ResourceState<T> {
    /// Check if resource is idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if resource is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if resource is ready
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Check if resource errored
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Get reference to ready value
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    /// Get the error if present
    pub fn as_error(&self) -> Option<&ResourceError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Token identifying one load attempt.
///
/// Obtained from [`Resource::begin_load`]; only the token from the most
/// recent call can commit a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Async-loadable resource with interior mutability.
///
/// Cheap to clone; all clones share the same state and generation counter.
///
/// # Example
///
/// ```ignore
/// let configs: Resource<Vec<CacheConfig>> = Resource::new();
/// let token = configs.begin_load();
/// match source.list().await {
///     Ok(data) => configs.complete(token, Ok(data)),
///     Err(e) => configs.complete(token, Err(e.to_string().into())),
/// };
/// ```
#[derive(Debug)]
pub struct Resource<T> {
    inner: Arc<RwLock<ResourceState<T>>>,
    dirty: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl<T> Resource<T> {
    /// Create a new resource in idle state
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ResourceState::Idle)),
            dirty: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the current state
    pub fn get(&self) -> ResourceState<T>
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(ResourceState::Idle)
    }

    /// Start a new load: bumps the generation, moves to loading state, and
    /// returns the token the completion must present.
    pub fn begin_load(&self) -> LoadToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut guard) = self.inner.write() {
            *guard = ResourceState::Loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
        LoadToken(generation)
    }

    /// Check whether a token still belongs to the most recent load.
    pub fn is_current(&self, token: LoadToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Commit the outcome of a load.
    ///
    /// Returns `true` if the result was committed. A stale token (a newer
    /// load has started since) is discarded and logged.
    pub fn complete(&self, token: LoadToken, result: Result<T, ResourceError>) -> bool {
        if !self.is_current(token) {
            log::debug!(
                "discarding stale load completion (generation {} superseded)",
                token.0
            );
            return false;
        }
        if let Ok(mut guard) = self.inner.write() {
            *guard = match result {
                Ok(value) => ResourceState::Ready(value),
                Err(err) => ResourceState::Error(err),
            };
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Set to ready state directly, outside a fenced load.
    pub fn set_ready(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = ResourceState::Ready(value);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set to error state directly, outside a fenced load.
    pub fn set_error(&self, err: impl Into<ResourceError>) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = ResourceState::Error(err.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the resource has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Check if resource is idle
    pub fn is_idle(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_idle())
            .unwrap_or(true)
    }

    /// Check if resource is loading
    pub fn is_loading(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_loading())
            .unwrap_or(false)
    }

    /// Check if resource is ready
    pub fn is_ready(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_ready())
            .unwrap_or(false)
    }

    /// Check if resource has an error
    pub fn is_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_error())
            .unwrap_or(false)
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            generation: Arc::clone(&self.generation),
        }
    }
}
