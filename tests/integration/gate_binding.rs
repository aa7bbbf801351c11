use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::executor::block_on;
use taskgate::runtime::delay::{BoxFuture, NoDelay, StepDelay};
use taskgate::runtime::error::TaskResult;
use taskgate::runtime::prelude::{
    CancelCommand,
    Command,
    RunConfig,
    RunOutcome,
    StartCommand,
    TaskController,
};

/// Records both predicates as seen from inside a running step.
struct GateProbe {
    controller: Mutex<Option<TaskController>>,
    seen: Arc<Mutex<Vec<(bool, bool)>>>,
}

impl GateProbe {
    fn new() -> Self {
        Self {
            controller: Mutex::new(None),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn bind(&self, controller: TaskController) {
        *self.controller.lock().unwrap() = Some(controller);
    }
}

impl StepDelay for GateProbe {
    fn wait(&self, _duration: Duration) -> BoxFuture<'static, TaskResult<()>> {
        let controller = self.controller.lock().unwrap();
        if let Some(controller) = controller.as_ref() {
            let gate = controller.gate();
            self.seen.lock().unwrap().push((gate.can_start(), gate.can_cancel()));
        }
        Box::pin(async { Ok(()) })
    }
}

#[test]
fn cancel_is_the_only_permitted_action_mid_run() {
    let probe = Arc::new(GateProbe::new());
    let controller = TaskController::new(RunConfig::new().with_steps(2))
        .with_delay(Arc::clone(&probe) as Arc<dyn StepDelay>);
    probe.bind(controller.clone());

    block_on(controller.start()).expect("start");

    let seen = probe.seen.lock().unwrap();
    assert_eq!(*seen, vec![(false, true), (false, true)]);
}

#[test]
fn rechecks_fire_on_every_state_transition() {
    let controller =
        TaskController::new(RunConfig::new().with_steps(2)).with_delay(Arc::new(NoDelay));
    let gate = controller.gate();

    let rechecks = Arc::new(AtomicUsize::new(0));
    {
        let rechecks = Arc::clone(&rechecks);
        gate.subscribe(Arc::new(move || {
            rechecks.fetch_add(1, Ordering::SeqCst);
        }));
    }

    block_on(controller.start()).expect("start");

    // One notify entering Processing, one returning to Idle.
    assert_eq!(rechecks.load(Ordering::SeqCst), 2);
}

#[test]
fn bound_commands_swap_permissions_over_a_run() {
    let probe = Arc::new(GateProbe::new());
    let controller = TaskController::new(RunConfig::new().with_steps(1))
        .with_delay(Arc::clone(&probe) as Arc<dyn StepDelay>);
    probe.bind(controller.clone());

    let start = StartCommand::new(controller.clone());
    let cancel = CancelCommand::new(controller.clone());

    assert!(start.can_execute());
    assert!(!cancel.can_execute());

    block_on(start.execute()).expect("execute");

    // Mid-run the probe saw the permissions swapped.
    assert_eq!(*probe.seen.lock().unwrap(), vec![(false, true)]);
    assert!(start.can_execute());
    assert!(!cancel.can_execute());
}

#[test]
fn cancel_command_aborts_the_next_poll() {
    // Press the cancel button from inside the running step, through the
    // command adapter rather than the controller directly.
    struct PressCancel {
        command: Mutex<Option<CancelCommand>>,
    }

    impl StepDelay for PressCancel {
        fn wait(&self, _duration: Duration) -> BoxFuture<'static, TaskResult<()>> {
            let command = self.command.lock().unwrap().take();
            match command {
                Some(command) => {
                    assert!(command.can_execute());
                    command.execute()
                }
                None => Box::pin(async { Ok(()) }),
            }
        }
    }

    let delay = Arc::new(PressCancel {
        command: Mutex::new(None),
    });
    let controller = TaskController::new(RunConfig::new().with_steps(5))
        .with_delay(Arc::clone(&delay) as Arc<dyn StepDelay>);
    *delay.command.lock().unwrap() = Some(CancelCommand::new(controller.clone()));

    let outcome = block_on(controller.start()).expect("start");
    assert_eq!(outcome, RunOutcome::Cancelled { before_step: 1 });
    assert_eq!(controller.progress_message(), "cancelled before step 1");
}
