//! Telemetry records delivered by the instrumentation runtime.
//!
//! Both record kinds are built by the runtime immediately before an export
//! call and dropped immediately after. Nothing here is retained by the sink.

mod trace;
mod view;

use thiserror::Error;

pub use trace::{
    Annotation, AttributeValue, Attributes, SpanContext, SpanData, SpanId, Status, TraceId,
};
pub use view::{
    AggregationData, CountData, DistributionData, LastValueData, Row, SumData, Tag, TagKey, View,
    ViewData,
};

/// Errors raised while constructing telemetry records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid tag key: {0}")]
    InvalidTagKey(String),

    #[error("Invalid {kind} identifier: expected {expected} hex characters, got {actual:?}")]
    InvalidId {
        kind: &'static str,
        expected: usize,
        actual: String,
    },
}
