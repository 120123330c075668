use super::LogSink;
use super::layer::record_from_event;
use crate::record::Level;
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Process-wide list of installed sinks.
static DESTINATIONS: Lazy<ArcSwap<Vec<Arc<LogSink>>>> =
    Lazy::new(|| ArcSwap::from_pointee(Vec::new()));

/// Registers a sink as a global logging destination.
///
/// Returns `false` if the sink was already installed.
pub fn install(sink: &Arc<LogSink>) -> bool {
    let mut added = false;
    DESTINATIONS.rcu(|current| {
        added = !current.iter().any(|s| s.id() == sink.id());
        let mut next = Vec::clone(current);
        if added {
            next.push(Arc::clone(sink));
        }
        next
    });
    added
}

/// Removes a sink from the global destinations.
///
/// Returns `false` if the sink was not installed.
pub fn uninstall(sink: &LogSink) -> bool {
    let mut removed = false;
    DESTINATIONS.rcu(|current| {
        let next: Vec<_> = current
            .iter()
            .filter(|s| s.id() != sink.id())
            .cloned()
            .collect();
        removed = next.len() != current.len();
        next
    });
    removed
}

pub fn installed_count() -> usize {
    DESTINATIONS.load().len()
}

/// Global subscriber layer dispatching events to every installed sink.
///
/// Installed once at startup; sinks come and go through [`install`] and
/// [`uninstall`] without touching the subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct FanoutLayer;

impl<S> Layer<S> for FanoutLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let sinks = DESTINATIONS.load();
        if sinks.is_empty() {
            return;
        }

        let level = Level::from(*event.metadata().level());
        let wanted: Vec<&Arc<LogSink>> = sinks.iter().filter(|s| s.enabled(level)).collect();
        if wanted.is_empty() {
            return;
        }

        let record = record_from_event(event, &ctx);
        for sink in wanted {
            sink.record(record.clone());
        }
    }
}
