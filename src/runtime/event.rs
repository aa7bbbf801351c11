//! Event protocol for controller runs.
//!
//! UI, CLI, and SSE consumers subscribe a sink and receive run lifecycle and
//! progress events as a single stream, in the order the controller produced
//! them. `Progress` carries the bindable display string's change stream.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::runtime::error::TaskResult;

/// Events emitted during a controller run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    RunStarted {
        run_id: String,
    },
    StepStarted {
        run_id: String,
        step: usize,
    },
    /// The display text changed.
    Progress {
        run_id: String,
        message: String,
    },
    CancelRequested {
        run_id: String,
    },
    /// The step loop observed the signal and unwound before `before_step`.
    RunAborted {
        run_id: String,
        before_step: usize,
    },
    RunFailed {
        run_id: String,
        step: usize,
        message: String,
    },
    RunCompleted {
        run_id: String,
    },
}

/// Event sink for streaming controller events to UI/CLI/SSE/etc.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event) -> TaskResult<()>;
}

/// A no-op event sink for tests or silent execution.
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: Event) -> TaskResult<()> {
        Ok(())
    }
}

/// An event with protocol metadata attached by the sequencer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub seq: u64,
    pub recorded_at: DateTime<Utc>,
    pub event: Event,
}

/// Stamps events with a monotonic sequence number and a UTC timestamp.
#[derive(Clone, Debug, Default)]
pub struct EventSequencer {
    next: Arc<AtomicU64>,
}

impl EventSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) -> EventRecord {
        EventRecord {
            seq: self.next.fetch_add(1, Ordering::SeqCst),
            recorded_at: Utc::now(),
            event,
        }
    }
}

/// Sink for sequenced, timestamped event records.
pub trait EventRecordSink: Send + Sync {
    fn emit_record(&self, record: EventRecord) -> TaskResult<()>;
}
