use crate::record::LogRecord;
use std::sync::mpsc::{self, Receiver, SyncSender};

/// Item carried by the record queue.
#[derive(Debug, Clone, PartialEq)]
pub enum QueueItem {
    Record(LogRecord),
    /// Ends the listener loop.
    Stop,
}

pub type RecordSender = SyncSender<QueueItem>;
pub type RecordReceiver = Receiver<QueueItem>;

/// Bounded multi-producer, single-consumer record queue.
pub fn record_queue(capacity: usize) -> (RecordSender, RecordReceiver) {
    mpsc::sync_channel(capacity)
}
