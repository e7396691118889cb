//! Subscriber setup for processes that route exported records through
//! `tracing`.
//!
//! The exporter's default sink is a [`crate::event::TracingWriter`]; these
//! helpers install the subscriber that turns those events into output.

mod logging;

pub use logging::{init_logging, LogConfig, LogError, LogFormat};
