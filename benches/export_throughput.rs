//! Export throughput benchmarks.

use std::sync::Arc;

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use oclog::event::RecordBuffer;
use oclog::model::{
    Annotation, AttributeValue, Attributes, CountData, Row, SpanContext, SpanData, SpanId, Status, Tag, TagKey,
    TraceId, View, ViewData,
};
use oclog::{Exporter, Level, Logger, SpanExporter, ViewExporter};

fn view_with_rows(rows: usize) -> ViewData {
    let key = TagKey::new("shard").unwrap();
    ViewData {
        view: View {
            name: "bench/requests".to_string(),
            description: String::new(),
        },
        start: Utc::now(),
        end: Utc::now(),
        rows: (0..rows)
            .map(|i| {
                Row::new(
                    vec![Tag::new(key.clone(), i.to_string())],
                    CountData { value: i as i64 },
                )
            })
            .collect(),
    }
}

fn span_with_attributes(count: usize) -> SpanData {
    let attributes: Attributes = (0..count)
        .map(|i| (format!("key{i}"), AttributeValue::from(i as i64)))
        .collect();
    let start = Utc::now();
    SpanData {
        span_context: SpanContext {
            trace_id: TraceId([7; 16]),
            span_id: SpanId([3; 8]),
            trace_options: 1,
        },
        parent_span_id: SpanId([1; 8]),
        name: "/bench".to_string(),
        status: Status::ok(),
        start_time: start,
        end_time: start + Duration::microseconds(250),
        attributes: attributes.clone(),
        annotations: vec![Annotation {
            time: start,
            message: "event".to_string(),
            attributes,
        }],
    }
}

fn bench_export_view(c: &mut Criterion) {
    let buffer = Arc::new(RecordBuffer::new());
    let exporter = Exporter::with_logger(&Logger::new(Arc::clone(&buffer)), Level::Debug);

    let mut group = c.benchmark_group("export_view");
    for rows in [1usize, 16, 256] {
        let data = view_with_rows(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| {
                exporter.export_view(black_box(data));
                buffer.take()
            })
        });
    }
    group.finish();
}

fn bench_export_span(c: &mut Criterion) {
    let buffer = Arc::new(RecordBuffer::new());
    let exporter = Exporter::with_logger(&Logger::new(Arc::clone(&buffer)), Level::Debug);

    let mut group = c.benchmark_group("export_span");
    for attrs in [0usize, 8, 64] {
        let data = span_with_attributes(attrs);
        group.bench_with_input(BenchmarkId::from_parameter(attrs), &data, |b, data| {
            b.iter(|| {
                exporter.export_span(black_box(data));
                buffer.take()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_export_view, bench_export_span);
criterion_main!(benches);
