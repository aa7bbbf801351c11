//! Shared controller state: phase flag, progress text, active signal.

use crate::runtime::cancel::CancelSignal;

/// Controller lifecycle phase.
///
/// Exactly one of the gate's two predicates is true for each phase:
/// `can_start` while `Idle`, `can_cancel` while `Processing`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Processing,
}

/// Mutable state shared between the controller, its gate, and the cancel
/// action. Always accessed behind the controller's mutex.
#[derive(Clone, Debug)]
pub struct TaskState {
    pub phase: Phase,
    /// Id of the current (or most recent) run. Terminal mutations compare
    /// against it so an unwinding aborted loop cannot touch a successor run.
    pub run_id: String,
    pub progress: String,
    pub signal: CancelSignal,
}

impl TaskState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            run_id: String::new(),
            progress: "initialised".to_string(),
            signal: CancelSignal::fresh(),
        }
    }

    /// Arm a new run: fresh signal, new run id, phase `Processing`. Returns
    /// the armed signal for the step loop to poll.
    pub fn arm(&mut self, run_id: impl Into<String>) -> CancelSignal {
        self.signal = CancelSignal::fresh();
        self.run_id = run_id.into();
        self.phase = Phase::Processing;
        self.signal.clone()
    }

    /// Replace a used signal so it can never be observed by a later run.
    pub fn rearm(&mut self) {
        self.signal = CancelSignal::fresh();
    }
}

impl Default for TaskState {
    fn default() -> Self {
        Self::new()
    }
}
