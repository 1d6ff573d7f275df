//! Cooperative cancellation for live-rate requests.
//!
//! Only one live request is "current". Starting a new one through
//! [`RequestGate::begin`] cancels the token of the previous one. The client
//! races the provider call against [`CancellationToken::cancelled`] and checks
//! the token again before writing the cache, so a superseded request never
//! touches shared state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct TokenState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Cloneable handle that is flipped once and never reset.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    state: Arc<TokenState>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::SeqCst);
        self.state.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        // Register before checking the flag so a concurrent cancel is not lost.
        let notified = self.state.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    fn same_as(&self, other: &CancellationToken) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

/// Tracks the single in-flight live request.
#[derive(Debug, Default)]
pub struct RequestGate {
    current: Mutex<Option<CancellationToken>>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_current(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.current.lock().unwrap_or_else(|poisoned| {
            warn!("Request gate mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Cancel the previous request, if any, and register a new one.
    pub fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.lock_current().replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Deregister `token` if it is still the current request.
    pub fn finish(&self, token: &CancellationToken) {
        let mut current = self.lock_current();
        if current.as_ref().is_some_and(|t| t.same_as(token)) {
            *current = None;
        }
    }

    #[cfg(test)]
    fn has_in_flight(&self) -> bool {
        self.lock_current().is_some()
    }
}
