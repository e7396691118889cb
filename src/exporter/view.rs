use crate::model::{AggregationData, Row, ViewData};

use super::Exporter;

/// Renders one record per row, in row order.
pub(super) fn export(exporter: &Exporter, data: &ViewData) {
    for row in &data.rows {
        let mut event = exporter
            .log()
            .str("name", data.name())
            .time("end", data.end);

        event = match &row.data {
            Some(AggregationData::Distribution(d)) => event
                .f64("distributionMin", d.min)
                .f64("distributionMax", d.max)
                .f64("distributionMean", d.mean),
            Some(AggregationData::Count(c)) => event.i64("count", c.value),
            Some(AggregationData::Sum(s)) => event.f64("sum", s.value),
            Some(AggregationData::LastValue(l)) => event.f64("last", l.value),
            None => {
                tracing::trace!(view = data.name(), "row without aggregation data");
                event
            }
        };

        event.strs("tags", row_tags(row)).msg("metric");
    }
}

/// `key:value` for every tag with a non-empty value.
fn row_tags(row: &Row) -> Vec<String> {
    row.tags
        .iter()
        .filter(|tag| !tag.value.is_empty())
        .map(|tag| format!("{}:{}", tag.key.name(), tag.value))
        .collect()
}
