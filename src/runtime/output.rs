//! Output adapters for controller event streams.

use std::io::Write;
use std::sync::Mutex;

use crate::runtime::error::{TaskError, TaskResult};
use crate::runtime::event::{Event, EventRecord, EventRecordSink, EventSink};

fn sink_error(sink: &str, message: impl std::fmt::Display) -> TaskError {
    TaskError::SinkError {
        sink: sink.to_string(),
        message: message.to_string(),
    }
}

/// JSON Lines output for the Event stream (CLI-friendly).
pub struct JsonLineEventSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLineEventSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().expect("poisoned writer")
    }
}

impl<W: Write + Send> EventSink for JsonLineEventSink<W> {
    fn emit(&self, event: Event) -> TaskResult<()> {
        let json = serde_json::to_string(&event)
            .map_err(|err| sink_error("jsonl", format!("serialize event failed: {}", err)))?;
        let mut writer = self.writer.lock().expect("poisoned writer");
        writeln!(writer, "{json}")
            .map_err(|err| sink_error("jsonl", format!("write event failed: {}", err)))?;
        Ok(())
    }
}

/// JSON Lines output for sequenced EventRecords (with metadata).
pub struct JsonLineEventRecordSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLineEventRecordSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().expect("poisoned writer")
    }
}

impl<W: Write + Send> EventRecordSink for JsonLineEventRecordSink<W> {
    fn emit_record(&self, record: EventRecord) -> TaskResult<()> {
        let json = serde_json::to_string(&record).map_err(|err| {
            sink_error("jsonl_record", format!("serialize record failed: {}", err))
        })?;
        let mut writer = self.writer.lock().expect("poisoned writer");
        writeln!(writer, "{json}")
            .map_err(|err| sink_error("jsonl_record", format!("write record failed: {}", err)))?;
        Ok(())
    }
}
