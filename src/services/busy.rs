//! Shared busy indication for views running several requests at once.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reference-counted busy state.
///
/// Clones share one counter. The owner is busy while at least one
/// [`BusyGuard`] is alive, so a spinner only stops once every concurrent
/// operation has finished.
#[derive(Debug, Clone, Default)]
pub struct BusyTracker {
    active: Arc<AtomicUsize>,
}

impl BusyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one operation as started until the guard is dropped.
    pub fn begin(&self) -> BusyGuard {
        self.active.fetch_add(1, Ordering::AcqRel);
        BusyGuard {
            active: Arc::clone(&self.active),
        }
    }

    /// Runs `operation` while holding a guard.
    pub async fn track<F>(&self, operation: F) -> F::Output
    where
        F: Future,
    {
        let _guard = self.begin();
        operation.await
    }

    pub fn is_busy(&self) -> bool {
        self.active() > 0
    }

    /// Number of operations currently in flight.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }
}

/// Keeps its [`BusyTracker`] busy until dropped.
#[must_use = "the operation counts as finished as soon as the guard is dropped"]
#[derive(Debug)]
pub struct BusyGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::AcqRel);
    }
}
