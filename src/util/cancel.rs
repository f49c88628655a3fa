//! Cancellation token for superseded navigations.
//!
//! A guard evaluation that outlives its routed subtree must not commit any
//! state transition or trigger navigation; the subtree cancels the token on
//! teardown and the evaluation checks it before acting on a late result.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag shared between an async evaluation and the
/// owner that may tear it down. Cancelling is idempotent and sticky.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
