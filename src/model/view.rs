//! Metric view snapshot types.

use chrono::{DateTime, Utc};

use super::ModelError;

/// Longest tag key name accepted by [`TagKey::new`].
const MAX_TAG_KEY_LEN: usize = 255;

/// Name of a tag dimension on a metric view.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagKey(String);

impl TagKey {
    /// Create a tag key, rejecting empty, oversized or non-printable names.
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        let printable = name.bytes().all(|b| (0x20..0x7f).contains(&b));
        if name.is_empty() || name.len() > MAX_TAG_KEY_LEN || !printable {
            return Err(ModelError::InvalidTagKey(name));
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One tag key/value pair of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: TagKey,
    pub value: String,
}

impl Tag {
    pub fn new(key: TagKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Summary of a distribution aggregation.
///
/// Only `min`, `max` and `mean` are rendered into log records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistributionData {
    pub count: i64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub sum_of_squared_dev: f64,
    pub count_per_bucket: Vec<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountData {
    pub value: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SumData {
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LastValueData {
    pub value: f64,
}

/// Aggregated value of a single row.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AggregationData {
    Distribution(DistributionData),
    Count(CountData),
    Sum(SumData),
    LastValue(LastValueData),
}

impl From<DistributionData> for AggregationData {
    fn from(data: DistributionData) -> Self {
        Self::Distribution(data)
    }
}

impl From<CountData> for AggregationData {
    fn from(data: CountData) -> Self {
        Self::Count(data)
    }
}

impl From<SumData> for AggregationData {
    fn from(data: SumData) -> Self {
        Self::Sum(data)
    }
}

impl From<LastValueData> for AggregationData {
    fn from(data: LastValueData) -> Self {
        Self::LastValue(data)
    }
}

/// One tag combination of a view snapshot.
///
/// `data` is `None` when the runtime delivered an aggregation kind this
/// crate does not know about.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub tags: Vec<Tag>,
    pub data: Option<AggregationData>,
}

impl Row {
    pub fn new(tags: Vec<Tag>, data: impl Into<AggregationData>) -> Self {
        Self {
            tags,
            data: Some(data.into()),
        }
    }

    /// A row whose aggregation kind was not recognized.
    pub fn unset(tags: Vec<Tag>) -> Self {
        Self { tags, data: None }
    }
}

/// Static description of a metric view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub name: String,
    pub description: String,
}

/// A periodic snapshot of one view across all observed tag combinations.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewData {
    pub view: View,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub rows: Vec<Row>,
}

impl ViewData {
    pub fn name(&self) -> &str {
        &self.view.name
    }
}
