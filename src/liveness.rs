//! Module for vetoing premature shutdown while a login is in progress.
//!
//! Engines typically treat "no pending requests and nothing in flight" as
//! the signal to finish a crawl. While the gate is paused that picture is
//! wrong: parked requests exist that the engine cannot see. The gate holds a
//! [`LivenessGuard`] for exactly as long as it is paused; engines poll
//! [`Liveness::is_idle`] in their shutdown loop alongside their own idle
//! checks and keep the crawl alive while any guard is outstanding.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared keep-alive state polled by the engine.
#[derive(Debug, Default)]
pub struct Liveness {
    active_holds: AtomicUsize,
}

impl Liveness {
    /// Creates a new, atomically reference-counted `Liveness`.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Acquires a keep-alive hold, released when the guard drops.
    pub fn hold(self: &Arc<Self>) -> LivenessGuard {
        self.active_holds.fetch_add(1, Ordering::SeqCst);
        LivenessGuard {
            liveness: Arc::clone(self),
        }
    }

    /// Checks whether any keep-alive hold is outstanding.
    pub fn is_idle(&self) -> bool {
        self.active_holds.load(Ordering::SeqCst) == 0
    }
}

/// Keeps the crawl alive until dropped.
#[derive(Debug)]
pub struct LivenessGuard {
    liveness: Arc<Liveness>,
}

impl Drop for LivenessGuard {
    fn drop(&mut self) {
        self.liveness.active_holds.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_held_and_idle_again_after_drop() {
        let liveness = Liveness::new();
        assert!(liveness.is_idle());

        let guard = liveness.hold();
        assert!(!liveness.is_idle());

        let second = liveness.hold();
        drop(guard);
        assert!(!liveness.is_idle());

        drop(second);
        assert!(liveness.is_idle());
    }
}
