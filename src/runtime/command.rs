//! UI-bindable action adapters over the controller.
//!
//! The presentation layer binds each button to a [`Command`]: `can_execute`
//! is re-polled after every gate recheck, `execute` fires the action.
//! `execute` does not re-check the predicate; the controller's no-op
//! preconditions make a mis-timed invoke harmless.

use crate::runtime::controller::TaskController;
use crate::runtime::delay::BoxFuture;
use crate::runtime::error::TaskResult;

/// Bindable capability pair: a query and an invoke.
pub trait Command: Send + Sync {
    fn can_execute(&self) -> bool;
    fn execute(&self) -> BoxFuture<'static, TaskResult<()>>;
}

/// Starts a run. Executable while the controller is idle.
pub struct StartCommand {
    controller: TaskController,
}

impl StartCommand {
    pub fn new(controller: TaskController) -> Self {
        Self { controller }
    }
}

impl Command for StartCommand {
    fn can_execute(&self) -> bool {
        self.controller.gate().can_start()
    }

    fn execute(&self) -> BoxFuture<'static, TaskResult<()>> {
        let controller = self.controller.clone();
        Box::pin(async move { controller.start().await.map(|_| ()) })
    }
}

/// Requests cancellation of the active run. Executable while processing.
pub struct CancelCommand {
    controller: TaskController,
}

impl CancelCommand {
    pub fn new(controller: TaskController) -> Self {
        Self { controller }
    }
}

impl Command for CancelCommand {
    fn can_execute(&self) -> bool {
        self.controller.gate().can_cancel()
    }

    fn execute(&self) -> BoxFuture<'static, TaskResult<()>> {
        let controller = self.controller.clone();
        Box::pin(async move { controller.request_cancel() })
    }
}
