//! oclog: a telemetry sink that writes metric view snapshots and completed
//! trace spans as structured log records.
//!
//! ```text
//! instrumentation runtime
//!     → Exporter::export_view  (one record per row, message "metric")
//!     → Exporter::export_span  (one record per span, message "trace")
//!         → EventFactory → LogEvent → LogWriter
//! ```
//!
//! The exporters are synchronous and stateless. They never collect, buffer,
//! retry or transport telemetry; the runtime decides when to call them.

pub mod config;
pub mod event;
pub mod exporter;
pub mod model;
pub mod telemetry;

pub use config::EnvConfig;
pub use event::{EventFactory, Level, LogEvent, LogRecord, LogWriter, Logger};
pub use exporter::{Exporter, SpanExporter, ViewExporter};
