//! Structured log events.
//!
//! A [`LogEvent`] is a builder bound to one severity and one [`LogWriter`].
//! Fields are appended with typed setters and the event is handed to its
//! writer by the terminal [`LogEvent::msg`] call.

mod level;
mod writer;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

pub use level::{Level, ParseLevelError};
pub use writer::{JsonWriter, LogWriter, RecordBuffer, TracingWriter};

/// Produces a fresh event builder on every call.
pub type EventFactory = Arc<dyn Fn() -> LogEvent + Send + Sync>;

/// A finished log record.
///
/// Field order is insertion order. Setting a field twice keeps its first
/// position and the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub fields: Map<String, Value>,
}

impl LogRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Flat JSON object: `level`, then the fields, then `message`.
    pub fn to_json(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 2);
        object.insert("level".to_string(), Value::from(self.level.as_str()));
        for (key, value) in &self.fields {
            object.insert(key.clone(), value.clone());
        }
        object.insert("message".to_string(), Value::from(self.message.as_str()));
        Value::Object(object)
    }
}

/// Builder for a single structured log record.
pub struct LogEvent {
    level: Level,
    fields: Map<String, Value>,
    writer: Arc<dyn LogWriter>,
}

impl LogEvent {
    pub fn new(level: Level, writer: Arc<dyn LogWriter>) -> Self {
        Self {
            level,
            fields: Map::new(),
            writer,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn str(self, key: impl Into<String>, value: &str) -> Self {
        self.field(key, Value::from(value))
    }

    pub fn strs(self, key: impl Into<String>, values: Vec<String>) -> Self {
        self.field(key, Value::from(values))
    }

    pub fn bool(self, key: impl Into<String>, value: bool) -> Self {
        self.field(key, Value::from(value))
    }

    pub fn i32(self, key: impl Into<String>, value: i32) -> Self {
        self.field(key, Value::from(value))
    }

    pub fn i64(self, key: impl Into<String>, value: i64) -> Self {
        self.field(key, Value::from(value))
    }

    /// Non-finite values are rendered as `null`.
    pub fn f64(self, key: impl Into<String>, value: f64) -> Self {
        self.field(key, Value::from(value))
    }

    /// RFC 3339 timestamp in UTC.
    pub fn time(self, key: impl Into<String>, value: DateTime<Utc>) -> Self {
        let text = value.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        self.field(key, Value::from(text))
    }

    /// Duration in milliseconds, as a float.
    pub fn dur(self, key: impl Into<String>, value: Duration) -> Self {
        let millis = value.as_secs() as f64 * 1000.0 + f64::from(value.subsec_nanos()) / 1e6;
        self.f64(key, millis)
    }

    /// Any serializable value, passed through without coercion.
    pub fn value<T: Serialize + ?Sized>(self, key: impl Into<String>, value: &T) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.field(key, value)
    }

    /// Finish the event and hand it to the writer.
    pub fn msg(self, message: &str) {
        let record = LogRecord {
            level: self.level,
            message: message.to_string(),
            fields: self.fields,
        };
        self.writer.write(&record);
    }
}

impl std::fmt::Debug for LogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogEvent")
            .field("level", &self.level)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// A log sink that hands out event builders at any severity.
#[derive(Clone)]
pub struct Logger {
    writer: Arc<dyn LogWriter>,
}

impl Logger {
    pub fn new(writer: impl LogWriter + 'static) -> Self {
        Self {
            writer: Arc::new(writer),
        }
    }

    pub fn event(&self, level: Level) -> LogEvent {
        LogEvent::new(level, Arc::clone(&self.writer))
    }

    pub fn trace(&self) -> LogEvent {
        self.event(Level::Trace)
    }

    pub fn debug(&self) -> LogEvent {
        self.event(Level::Debug)
    }

    pub fn info(&self) -> LogEvent {
        self.event(Level::Info)
    }

    pub fn warn(&self) -> LogEvent {
        self.event(Level::Warn)
    }

    pub fn error(&self) -> LogEvent {
        self.event(Level::Error)
    }

    /// Factory producing events from this logger at a fixed severity.
    pub fn event_fn(&self, level: Level) -> EventFactory {
        let logger = self.clone();
        Arc::new(move || logger.event(level))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
