//! Completed trace span types.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ModelError;

fn decode_id<const N: usize>(kind: &'static str, text: &str) -> Result<[u8; N], ModelError> {
    let invalid = || ModelError::InvalidId {
        kind,
        expected: N * 2,
        actual: text.to_string(),
    };
    let bytes = hex::decode(text).map_err(|_| invalid())?;
    bytes.try_into().map_err(|_| invalid())
}

/// 16-byte trace identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TraceId(pub [u8; 16]);

impl TraceId {
    pub fn from_hex(text: &str) -> Result<Self, ModelError> {
        decode_id("trace", text).map(Self)
    }

    /// Lowercase, zero-padded hex (32 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl From<[u8; 16]> for TraceId {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 8-byte span identifier. The all-zero value means "no span".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpanId(pub [u8; 8]);

impl SpanId {
    pub const ZERO: SpanId = SpanId([0; 8]);

    pub fn from_hex(text: &str) -> Result<Self, ModelError> {
        decode_id("span", text).map(Self)
    }

    /// Lowercase, zero-padded hex (16 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl From<[u8; 8]> for SpanId {
    fn from(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for SpanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanContext {
    pub trace_id: TraceId,
    pub span_id: SpanId,
    pub trace_options: u32,
}

/// Outcome of a span. `code` follows the gRPC status code numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub code: i32,
    pub message: String,
}

impl Status {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

/// Scalar attribute value. Serializes as the bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Attribute map, iterated in key order.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A timestamped sub-event within a span.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub time: DateTime<Utc>,
    pub message: String,
    pub attributes: Attributes,
}

/// A completed span as delivered by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanData {
    pub span_context: SpanContext,
    pub parent_span_id: SpanId,
    pub name: String,
    pub status: Status,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub attributes: Attributes,
    pub annotations: Vec<Annotation>,
}

impl SpanData {
    /// Elapsed time between start and end. Zero if the end precedes the start.
    pub fn duration(&self) -> Duration {
        (self.end_time - self.start_time)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    pub fn has_parent(&self) -> bool {
        !self.parent_span_id.is_zero()
    }
}
