//! Destinations for finished log records.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{Level, LogRecord};

/// A sink for finished records.
///
/// Writers are shared across threads and must tolerate concurrent calls.
/// Failures stay inside the writer; callers never see them.
pub trait LogWriter: Send + Sync {
    fn write(&self, record: &LogRecord);
}

impl<T: LogWriter + ?Sized> LogWriter for Arc<T> {
    fn write(&self, record: &LogRecord) {
        (**self).write(record)
    }
}

/// Writes one JSON object per line.
pub struct JsonWriter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> LogWriter for JsonWriter<W> {
    fn write(&self, record: &LogRecord) {
        let mut line = match serde_json::to_vec(&record.to_json()) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode log record");
                return;
            }
        };
        line.push(b'\n');

        let mut out = self.out.lock();
        if let Err(e) = out.write_all(&line).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "failed to write log record");
        }
    }
}

/// Forwards records into `tracing` under the `oclog` target.
///
/// The record's fields travel as a single JSON-encoded `fields` value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWriter;

impl LogWriter for TracingWriter {
    fn write(&self, record: &LogRecord) {
        let fields = serde_json::to_string(&record.fields).unwrap_or_default();
        let message = record.message.as_str();
        match record.level {
            Level::Trace => tracing::trace!(target: "oclog", fields = %fields, "{}", message),
            Level::Debug => tracing::debug!(target: "oclog", fields = %fields, "{}", message),
            Level::Info => tracing::info!(target: "oclog", fields = %fields, "{}", message),
            Level::Warn => tracing::warn!(target: "oclog", fields = %fields, "{}", message),
            Level::Error => tracing::error!(target: "oclog", fields = %fields, "{}", message),
        }
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct RecordBuffer {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all records written so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Remove and return all records written so far.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl LogWriter for RecordBuffer {
    fn write(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }
}
