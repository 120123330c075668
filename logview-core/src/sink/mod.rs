//! Log Sink
//!
//! Captures log records from any thread and pushes them onto the bounded
//! record queue without ever blocking the producer.
//!
//! Records enter the sink in one of three ways:
//! - through the process-wide [`FanoutLayer`], once the sink is [`install`]ed
//! - through a dedicated [`SinkLayer`] in a scoped subscriber
//! - by calling [`LogSink::record`] directly (JSON ingest, tests)
//!
//! A full queue drops the record and bumps [`LogSink::dropped`]. Piped input,
//! which would rather wait than lose lines, uses [`LogSink::record_blocking`]
//! and ends the stream with [`LogSink::finish`].

mod fanout;
mod layer;
mod queue;
mod thread_id;

pub use fanout::{FanoutLayer, install, installed_count, uninstall};
pub use layer::SinkLayer;
pub use queue::{QueueItem, RecordReceiver, RecordSender, record_queue};
pub use thread_id::current_thread_id;

use crate::record::{Level, LogRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

#[derive(Debug)]
pub struct LogSink {
    id: Uuid,
    queue: RecordSender,
    min_level: Level,
    dropped: AtomicU64,
}

impl LogSink {
    pub fn new(queue: RecordSender, min_level: Level) -> Self {
        Self {
            id: Uuid::new_v4(),
            queue,
            min_level,
            dropped: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Enqueues a record. Best effort: never blocks, never fails the caller.
    pub fn record(&self, record: LogRecord) {
        if !self.enabled(record.level) {
            return;
        }

        if self.queue.try_send(QueueItem::Record(record)).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Enqueues a record, waiting for room. Returns `false` once the listener
    /// is gone.
    pub fn record_blocking(&self, record: LogRecord) -> bool {
        if !self.enabled(record.level) {
            return true;
        }
        self.queue.send(QueueItem::Record(record)).is_ok()
    }

    /// Queues the stop sentinel behind everything already recorded, so the
    /// listener hands over every pending record before it stops.
    pub fn finish(&self) {
        let _ = self.queue.send(QueueItem::Stop);
    }

    /// Records lost to a full or closed queue.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn layer(self: &std::sync::Arc<Self>) -> SinkLayer {
        SinkLayer::new(std::sync::Arc::clone(self))
    }
}
