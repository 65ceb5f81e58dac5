//! Debounced value commitment.
//!
//! A [`Debounced`] delays committing a value until input activity pauses for
//! a fixed interval: every submission restarts the timer, and only the last
//! submission before a quiet period lands in the committed state. The timer
//! is an explicit cancellable resource; a new submission, an explicit
//! [`Debounced::cancel`], or dropping the holder all cancel the pending
//! commit.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::state::State;

/// Delay applied to search inputs before recomputation kicks in.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug)]
struct PendingTimer {
    token: CancellationToken,
    generation: u64,
}

/// A debounced `String` value.
///
/// Must be used from within a tokio runtime: submissions spawn a timer task.
#[derive(Debug)]
pub struct Debounced {
    committed: State<String>,
    delay: Duration,
    pending: Arc<Mutex<Option<PendingTimer>>>,
    generation: AtomicU64,
}

impl Debounced {
    /// Create a debounced value with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            committed: State::default(),
            delay,
            pending: Arc::new(Mutex::new(None)),
            generation: AtomicU64::new(0),
        }
    }

    /// Create a debounced value with the standard search delay.
    pub fn for_search() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }

    /// The last committed value.
    pub fn committed(&self) -> String {
        self.committed.get()
    }

    /// True when a submission is waiting out the delay.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Submit a new value, restarting the timer.
    ///
    /// The value commits after the delay elapses without another submission.
    pub fn submit(&self, value: impl Into<String>) {
        let token = CancellationToken::new();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Ok(mut guard) = self.pending.lock()
            && let Some(previous) = guard.replace(PendingTimer {
                token: token.clone(),
                generation,
            })
        {
            previous.token.cancel();
        }

        let committed = self.committed.clone();
        let pending = Arc::clone(&self.pending);
        let delay = self.delay;
        let value = value.into();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    committed.set(value);
                    if let Ok(mut guard) = pending.lock()
                        && guard.as_ref().is_some_and(|p| p.generation == generation)
                    {
                        guard.take();
                    }
                }
            }
        });
    }

    /// Cancel any pending commit.
    pub fn cancel(&self) {
        if let Ok(mut guard) = self.pending.lock()
            && let Some(timer) = guard.take()
        {
            timer.token.cancel();
        }
    }
}

impl Drop for Debounced {
    fn drop(&mut self) {
        self.cancel();
    }
}
