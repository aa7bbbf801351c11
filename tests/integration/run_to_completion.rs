use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::executor::block_on;
use taskgate::runtime::delay::{BoxFuture, NoDelay, StepDelay};
use taskgate::runtime::error::TaskResult;
use taskgate::runtime::event::Event;
use taskgate::runtime::prelude::{RunConfig, RunOutcome, TaskController};

use crate::helpers::events::EventCollector;

/// Counts suspensions without ever suspending.
struct CountingDelay {
    waits: AtomicUsize,
}

impl CountingDelay {
    fn new() -> Self {
        Self {
            waits: AtomicUsize::new(0),
        }
    }
}

impl StepDelay for CountingDelay {
    fn wait(&self, _duration: Duration) -> BoxFuture<'static, TaskResult<()>> {
        self.waits.fetch_add(1, Ordering::SeqCst);
        Box::pin(async { Ok(()) })
    }
}

#[test]
fn three_step_run_emits_the_full_progress_sequence() {
    let collector = EventCollector::new();
    let controller = TaskController::new(RunConfig::new().with_steps(3))
        .with_delay(Arc::new(NoDelay))
        .with_sink(collector.sink());

    let outcome = block_on(controller.start()).expect("start");

    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(
        collector.progress_messages(),
        vec!["started", "step 0", "step 1", "step 2", "done"],
    );
    assert!(controller.gate().can_start());
    assert!(!controller.gate().can_cancel());
}

#[test]
fn zero_step_run_goes_straight_to_done_without_suspending() {
    let collector = EventCollector::new();
    let delay = Arc::new(CountingDelay::new());
    let controller = TaskController::new(RunConfig::new().with_steps(0))
        .with_delay(Arc::clone(&delay) as Arc<dyn StepDelay>)
        .with_sink(collector.sink());

    let outcome = block_on(controller.start()).expect("start");

    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(collector.progress_messages(), vec!["started", "done"]);
    assert_eq!(delay.waits.load(Ordering::SeqCst), 0);
    let step_events = collector
        .events()
        .iter()
        .filter(|event| matches!(event, Event::StepStarted { .. }))
        .count();
    assert_eq!(step_events, 0);
}

#[test]
fn predicates_stay_mutually_exclusive_across_every_notify() {
    let controller =
        TaskController::new(RunConfig::new().with_steps(5)).with_delay(Arc::new(NoDelay));
    let gate = controller.gate();

    let seen = Arc::new(Mutex::new(Vec::new()));
    {
        let observer_gate = gate.clone();
        let seen = Arc::clone(&seen);
        gate.subscribe(Arc::new(move || {
            seen.lock()
                .unwrap()
                .push((observer_gate.can_start(), observer_gate.can_cancel()));
        }));
    }

    block_on(controller.start()).expect("start");

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    for (can_start, can_cancel) in seen.iter() {
        assert_ne!(can_start, can_cancel, "both predicates agreed");
    }
}
