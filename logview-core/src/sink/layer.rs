use super::{LogSink, current_thread_id};
use crate::record::{CodePath, Level, LogRecord};
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Function name used when an event is emitted outside any span.
pub(crate) const NO_FUNCTION: &str = "-";

/// Feeds every event of a subscriber into a single sink.
#[derive(Clone)]
pub struct SinkLayer {
    sink: Arc<LogSink>,
}

impl SinkLayer {
    pub fn new(sink: Arc<LogSink>) -> Self {
        Self { sink }
    }
}

impl<S> Layer<S> for SinkLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let level = Level::from(*event.metadata().level());
        if !self.sink.enabled(level) {
            return;
        }
        self.sink.record(record_from_event(event, &ctx));
    }
}

/// Converts a tracing event into a record of the calling thread.
///
/// The innermost span's name stands in for the function name.
pub(crate) fn record_from_event<S>(event: &Event<'_>, ctx: &Context<'_, S>) -> LogRecord
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    let meta = event.metadata();

    let function = ctx
        .event_span(event)
        .map(|span| span.name().to_string())
        .unwrap_or_else(|| NO_FUNCTION.to_string());

    let code_path = CodePath::new(
        meta.module_path().unwrap_or_else(|| meta.target()),
        function,
        meta.line().unwrap_or(0),
    );

    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);

    LogRecord::from_parts(
        Level::from(*meta.level()),
        current_thread_id(),
        &code_path,
        &visitor.finish(),
    )
}

/// Collects the `message` field and appends the remaining fields as
/// `key=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        let mut out = self.message;
        for (name, value) in self.fields {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&name);
            out.push('=');
            out.push_str(&value);
        }
        out
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }
}
