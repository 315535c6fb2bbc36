//! Synchronization primitives for game flow control.

use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

struct Inner {
    committed: Mutex<bool>,
    condvar: Condvar,
}

/// A wake-on-commit signal for the turn loop.
///
/// The submitting side calls [`MoveSignal::notify`] after a move is
/// committed; the orchestrator blocks in [`MoveSignal::wait`] until then.
/// There is no polling: the wait parks on a condition variable and wakes
/// exactly when signaled.
#[derive(Clone)]
pub struct MoveSignal(Arc<Inner>);

impl MoveSignal {
    /// Create a new signal with no pending commit.
    #[must_use]
    pub fn new() -> Self {
        MoveSignal(Arc::new(Inner {
            committed: Mutex::new(false),
            condvar: Condvar::new(),
        }))
    }

    /// Record a committed move and wake the waiting orchestrator.
    pub fn notify(&self) {
        let mut committed = self.0.committed.lock();
        *committed = true;
        self.0.condvar.notify_all();
    }

    /// Block until a move is committed, then consume the commit so the
    /// next wait blocks again.
    pub fn wait(&self) {
        let mut committed = self.0.committed.lock();
        while !*committed {
            self.0.condvar.wait(&mut committed);
        }
        *committed = false;
    }

    /// Consume a pending commit without blocking. Returns whether one was
    /// pending.
    #[must_use]
    pub fn try_consume(&self) -> bool {
        let mut committed = self.0.committed.lock();
        std::mem::take(&mut *committed)
    }
}

impl Default for MoveSignal {
    fn default() -> Self {
        Self::new()
    }
}
