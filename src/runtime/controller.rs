//! The cancellable stepped-task controller.
//!
//! Runs a fixed-length sequence of cooperative steps, polling the armed
//! cancellation signal strictly before each step and suspending once per
//! step afterwards. `request_cancel` flips the externally visible phase
//! synchronously so the bound buttons react at once; the in-flight loop
//! discovers the signal at its next poll and unwinds on its own. Run ids
//! keep an unwinding loop from touching a successor run's state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::runtime::delay::{StepDelay, TimerDelay};
use crate::runtime::error::TaskResult;
use crate::runtime::event::{Event, EventSink, NoopEventSink};
use crate::runtime::gate::ExecutabilityGate;
use crate::runtime::state::{Phase, TaskState};

/// Configuration for one controller.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Number of cooperative steps per run.
    pub steps: usize,
    /// Wall-clock suspension per step (the stand-in for real work).
    pub step_delay: Duration,
}

impl RunConfig {
    pub fn new() -> Self {
        Self {
            steps: 10,
            step_delay: Duration::from_secs(1),
        }
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal outcome of one `start` call.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    /// Every step ran without cancellation.
    Completed,
    /// The loop observed the signal before `before_step` and unwound.
    Cancelled { before_step: usize },
    /// A step's work failed; the run ended at `step`.
    Failed { step: usize, message: String },
    /// `start` was invoked while another run was processing; nothing changed.
    Busy,
}

/// Owns the cancellation signal and the processing-state flag; runs the
/// stepped operation and handles cancellation requests.
#[derive(Clone)]
pub struct TaskController {
    state: Arc<Mutex<TaskState>>,
    gate: ExecutabilityGate,
    config: RunConfig,
    delay: Arc<dyn StepDelay>,
    sink: Arc<dyn EventSink>,
}

impl TaskController {
    pub fn new(config: RunConfig) -> Self {
        let state = Arc::new(Mutex::new(TaskState::new()));
        let gate = ExecutabilityGate::new(Arc::clone(&state));
        Self {
            state,
            gate,
            config,
            delay: Arc::new(TimerDelay),
            sink: Arc::new(NoopEventSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_delay(mut self, delay: Arc<dyn StepDelay>) -> Self {
        self.delay = delay;
        self
    }

    /// The gate driving this controller's bound actions.
    pub fn gate(&self) -> ExecutabilityGate {
        self.gate.clone()
    }

    /// Current display text.
    pub fn progress_message(&self) -> String {
        self.state.lock().expect("poisoned state").progress.clone()
    }

    /// Run the stepped operation to a terminal outcome.
    ///
    /// No-op (`RunOutcome::Busy`) while another run is processing: the UI
    /// gate race is not atomic with respect to this call, so a mis-timed
    /// invoke is tolerated rather than faulted.
    pub async fn start(&self) -> TaskResult<RunOutcome> {
        let (run_id, signal) = {
            let mut state = self.state.lock().expect("poisoned state");
            if state.phase == Phase::Processing {
                return Ok(RunOutcome::Busy);
            }
            let run_id = uuid::Uuid::new_v4().to_string();
            let signal = state.arm(run_id.clone());
            (run_id, signal)
        };
        self.gate.notify();
        self.sink.emit(Event::RunStarted { run_id: run_id.clone() })?;
        self.set_progress(&run_id, "started")?;

        for step in 0..self.config.steps {
            // Poll strictly before the step's work; a request arriving during
            // the final step's delay never rolls back finished steps.
            if signal.is_cancelled() {
                return self.abort(run_id, step);
            }
            self.set_progress(&run_id, format!("step {}", step))?;
            self.sink.emit(Event::StepStarted { run_id: run_id.clone(), step })?;
            if let Err(err) = self.delay.wait(self.config.step_delay).await {
                return self.fail(run_id, step, err.to_string());
            }
        }

        {
            let mut state = self.state.lock().expect("poisoned state");
            if state.run_id == run_id {
                state.phase = Phase::Idle;
            }
        }
        self.gate.notify();
        self.set_progress(&run_id, "done")?;
        self.sink.emit(Event::RunCompleted { run_id })?;
        Ok(RunOutcome::Completed)
    }

    /// Request cooperative cancellation of the active run.
    ///
    /// Sets the armed signal and synchronously flips the phase to `Idle`, so
    /// the cancel button disables and the start button re-enables at once;
    /// the running loop unwinds independently at its next poll. No-op when
    /// nothing is processing, which also makes a repeated request harmless.
    pub fn request_cancel(&self) -> TaskResult<()> {
        let run_id = {
            let mut state = self.state.lock().expect("poisoned state");
            if state.phase != Phase::Processing {
                return Ok(());
            }
            state.signal.request_cancel();
            state.phase = Phase::Idle;
            state.run_id.clone()
        };
        self.gate.notify();
        self.set_progress(&run_id, "cancellation requested")?;
        self.sink.emit(Event::CancelRequested { run_id })?;
        Ok(())
    }

    /// Update the display text, guarded by run id so a stale loop cannot
    /// clobber a successor run's text. The event is emitted either way; the
    /// stream is per-run tagged.
    fn set_progress(&self, run_id: &str, message: impl Into<String>) -> TaskResult<()> {
        let message = message.into();
        {
            let mut state = self.state.lock().expect("poisoned state");
            if state.run_id == run_id {
                state.progress = message.clone();
            }
        }
        self.sink.emit(Event::Progress {
            run_id: run_id.to_string(),
            message,
        })
    }

    /// Abort exit: the loop observed the signal before `before_step`.
    fn abort(&self, run_id: String, before_step: usize) -> TaskResult<RunOutcome> {
        {
            let mut state = self.state.lock().expect("poisoned state");
            if state.run_id == run_id {
                state.phase = Phase::Idle;
                state.rearm();
            }
        }
        self.gate.notify();
        self.set_progress(&run_id, format!("cancelled before step {}", before_step))?;
        self.sink.emit(Event::RunAborted { run_id, before_step })?;
        Ok(RunOutcome::Cancelled { before_step })
    }

    /// Failure exit: mirrors the abort exit structurally.
    fn fail(&self, run_id: String, step: usize, message: String) -> TaskResult<RunOutcome> {
        {
            let mut state = self.state.lock().expect("poisoned state");
            if state.run_id == run_id {
                state.phase = Phase::Idle;
                state.rearm();
            }
        }
        self.gate.notify();
        self.set_progress(&run_id, format!("failed at step {}", step))?;
        self.sink.emit(Event::RunFailed {
            run_id,
            step,
            message: message.clone(),
        })?;
        Ok(RunOutcome::Failed { step, message })
    }
}
