//! Suspension hooks for the step loop.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::runtime::error::TaskResult;

/// Boxed future used at the runtime's trait seams.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Per-step suspension point.
///
/// The controller waits here once per step, after the cancellation check and
/// progress update. This is the only point where a run yields control back to
/// its caller, and it stands in for the step's real work; a failing hook
/// models a failing step.
pub trait StepDelay: Send + Sync {
    fn wait(&self, duration: Duration) -> BoxFuture<'static, TaskResult<()>>;
}

/// Wall-clock delay on the tokio timer.
pub struct TimerDelay;

impl StepDelay for TimerDelay {
    fn wait(&self, duration: Duration) -> BoxFuture<'static, TaskResult<()>> {
        Box::pin(async move {
            tokio::time::sleep(duration).await;
            Ok(())
        })
    }
}

/// Completes immediately. For tests and zero-delay runs.
pub struct NoDelay;

impl StepDelay for NoDelay {
    fn wait(&self, _duration: Duration) -> BoxFuture<'static, TaskResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
