use crate::model::SpanData;

use super::Exporter;

pub(super) fn export(exporter: &Exporter, data: &SpanData) {
    let mut event = exporter
        .log()
        .str("traceId", &data.span_context.trace_id.to_hex())
        .str("spanId", &data.span_context.span_id.to_hex());

    if data.has_parent() {
        event = event.str("parentSpanId", &data.parent_span_id.to_hex());
    } else {
        tracing::trace!(span = %data.name, "root span, parentSpanId omitted");
    }

    event = event
        .str("span", &data.name)
        .str("statusMessage", &data.status.message)
        .i32("statusCode", data.status.code)
        .dur("elapsed", data.duration());

    // Annotations sharing a message and an attribute key collide; the later one wins.
    for annotation in &data.annotations {
        for (key, value) in &annotation.attributes {
            let field = ["annotations.", annotation.message.as_str(), ".", key.as_str()].concat();
            event = event.value(field, value);
        }
    }

    for (key, value) in &data.attributes {
        event = event.value(["attributes.", key.as_str()].concat(), value);
    }

    event.msg("trace");
}
