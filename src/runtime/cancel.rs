//! Cooperative cancellation signal, one-shot per run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-shot cancellation flag shared between a running step loop and the
/// cancel action.
///
/// A signal is armed fresh for every run and replaced again after an aborted
/// run; a set signal is never reset in place, so a stale request from a
/// previous run cannot leak into the next one. Clones share the flag.
#[derive(Clone, Debug, Default)]
pub struct CancelSignal {
    cancelled: Arc<AtomicBool>,
}

impl CancelSignal {
    /// An unset signal, ready to arm a new run.
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent: a second request is a no-op.
    pub fn request_cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
