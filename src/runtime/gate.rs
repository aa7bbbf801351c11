//! Executability predicates over controller state, with recheck fan-out.

use std::sync::{Arc, Mutex};

use crate::runtime::state::{Phase, TaskState};

/// Observer notified, without payload, whenever the predicates may have
/// changed. Observers re-read `can_start`/`can_cancel` themselves: the
/// notification is a pull trigger, not a push of the booleans.
pub trait RecheckObserver: Send + Sync {
    fn recheck(&self);
}

impl<F> RecheckObserver for F
where
    F: Fn() + Send + Sync,
{
    fn recheck(&self) {
        self()
    }
}

/// Pure view over controller state: which of the two bound actions is
/// currently permitted. The gate holds no state of its own; exactly one
/// predicate is true at any time.
#[derive(Clone)]
pub struct ExecutabilityGate {
    state: Arc<Mutex<TaskState>>,
    observers: Arc<Mutex<Vec<Arc<dyn RecheckObserver>>>>,
}

impl ExecutabilityGate {
    pub(crate) fn new(state: Arc<Mutex<TaskState>>) -> Self {
        Self {
            state,
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// True iff the controller is idle.
    pub fn can_start(&self) -> bool {
        self.state.lock().expect("poisoned state").phase == Phase::Idle
    }

    /// True iff a run is processing.
    pub fn can_cancel(&self) -> bool {
        self.state.lock().expect("poisoned state").phase == Phase::Processing
    }

    pub fn subscribe(&self, observer: Arc<dyn RecheckObserver>) {
        self.observers.lock().expect("poisoned observers").push(observer);
    }

    /// Fan a payload-free recheck out to every observer. The observer list
    /// is cloned out of the lock first, so observers may re-enter the gate.
    pub fn notify(&self) {
        let observers = self.observers.lock().expect("poisoned observers").clone();
        for observer in &observers {
            observer.recheck();
        }
    }
}
