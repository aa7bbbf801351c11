//! Taskgate runtime
//!
//! The core is the cancellable stepped-task controller: a state machine that
//! runs a fixed-length sequence of cooperative steps, polls a one-shot
//! cancellation signal strictly before each step, and exposes two
//! mutually-exclusive executability predicates to driving UI elements.
//!
//! - [`controller`]: the stepped-task state machine
//! - [`gate`]: `can_start`/`can_cancel` predicates and recheck fan-out
//! - [`command`]: UI-bindable query/invoke pairs over the controller
//! - [`cancel`]: the one-shot-per-run cancellation signal
//! - [`event`] / [`output`]: run lifecycle and progress as a single stream

pub mod cancel;
pub mod command;
pub mod controller;
pub mod delay;
pub mod error;
pub mod event;
pub mod gate;
pub mod output;
pub mod state;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::runtime::cancel::CancelSignal;
    pub use crate::runtime::command::{CancelCommand, Command, StartCommand};
    pub use crate::runtime::controller::{RunConfig, RunOutcome, TaskController};
    pub use crate::runtime::delay::{BoxFuture, NoDelay, StepDelay, TimerDelay};
    pub use crate::runtime::error::{TaskError, TaskResult};
    pub use crate::runtime::event::{
        Event,
        EventRecord,
        EventRecordSink,
        EventSequencer,
        EventSink,
        NoopEventSink,
    };
    pub use crate::runtime::gate::{ExecutabilityGate, RecheckObserver};
    pub use crate::runtime::output::{JsonLineEventRecordSink, JsonLineEventSink};
    pub use crate::runtime::state::Phase;
}
