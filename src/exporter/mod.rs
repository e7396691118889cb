//! Metric view and trace span exporters that log.
//!
//! The instrumentation runtime calls [`ViewExporter::export_view`] on its
//! reporting schedule and [`SpanExporter::export_span`] whenever a sampled
//! span ends. Each call renders records through the configured
//! [`EventFactory`] and returns; nothing is buffered between calls.

mod span;
mod view;

use std::sync::Arc;

use crate::event::{EventFactory, Level, LogEvent, Logger, TracingWriter};
use crate::model::{SpanData, ViewData};

/// Receives periodic metric view snapshots.
pub trait ViewExporter: Send + Sync {
    fn export_view(&self, data: &ViewData);
}

/// Receives completed spans.
pub trait SpanExporter: Send + Sync {
    fn export_span(&self, data: &SpanData);
}

/// Stats and trace exporter that writes one structured log record per
/// view row and per span.
#[derive(Clone, Default)]
pub struct Exporter {
    event_fn: Option<EventFactory>,
}

impl Exporter {
    /// Without a factory, records go to `tracing` at debug level.
    pub fn new(event_fn: Option<EventFactory>) -> Self {
        Self { event_fn }
    }

    pub fn with_logger(logger: &Logger, level: Level) -> Self {
        Self::new(Some(logger.event_fn(level)))
    }

    /// A fresh event builder for the next record.
    pub fn log(&self) -> LogEvent {
        match &self.event_fn {
            Some(event_fn) => event_fn(),
            None => LogEvent::new(Level::Debug, Arc::new(TracingWriter)),
        }
    }
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("event_fn", &self.event_fn.as_ref().map(|_| "EventFactory"))
            .finish()
    }
}

impl ViewExporter for Exporter {
    fn export_view(&self, data: &ViewData) {
        view::export(self, data);
    }
}

impl SpanExporter for Exporter {
    fn export_span(&self, data: &SpanData) {
        span::export(self, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RecordBuffer;

    #[test]
    fn test_log_without_factory_defaults_to_debug() {
        let exporter = Exporter::default();
        assert_eq!(exporter.log().level(), Level::Debug);
        exporter.log().msg("ignored without a subscriber");
    }

    #[test]
    fn test_log_uses_factory() {
        let buffer = Arc::new(RecordBuffer::new());
        let logger = Logger::new(Arc::clone(&buffer));
        let exporter = Exporter::with_logger(&logger, Level::Info);

        assert_eq!(exporter.log().level(), Level::Info);
        exporter.log().msg("routed");
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_exporter_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Exporter>();
    }
}
