//! Queue Listener
//!
//! A dedicated thread that drains the record queue and hands records to the
//! display thread over an ordered channel.
//!
//! ```text
//! producers ──try_send──▶ record queue ──recv──▶ listener ──send──▶ ViewEvents
//!                                                   │
//!                                  progress mode ───┘ (interval ProgressTick)
//! ```
//!
//! The listener waits on the queue for at most one tick interval at a time,
//! so progress mode switched on by the renderer is picked up without further
//! queue traffic. At most one tick is in flight: the next one is only sent
//! after [`ViewEvents`] handed the previous one over.
//!
//! The listener is `Running` until it receives [`QueueItem::Stop`], the stop
//! flag is observed, the handoff receiver goes away, or the queue breaks.
//! It then stays `Stopped`.


use crate::record::LogRecord;
use crate::sink::{QueueItem, RecordReceiver, RecordSender};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const THREAD_NAME: &str = "logview-listener";

/// Listener → renderer handoff item.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Record(LogRecord),
    ProgressTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
    Running,
    Stopped,
}

/// Shared flags between the listener thread and its owner.
#[derive(Debug, Default)]
struct Flags {
    stop: AtomicBool,
    stopped: AtomicBool,
    tick_pending: AtomicBool,
}

pub struct QueueListener {
    flags: Arc<Flags>,
    queue: RecordSender,
    handle: Option<JoinHandle<()>>,
}

impl QueueListener {
    /// Spawns the listener thread.
    ///
    /// `keep_ticking` is owned by the renderer: while it is set and the queue
    /// is idle, a [`ViewEvent::ProgressTick`] is emitted every `tick_interval`.
    /// `queue` is a producer handle used by [`QueueListener::close`] to wake
    /// the thread.
    pub fn spawn(
        receiver: RecordReceiver,
        queue: RecordSender,
        keep_ticking: Arc<AtomicBool>,
        tick_interval: Duration,
    ) -> std::io::Result<(Self, ViewEvents)> {
        let (events_tx, events_rx) = mpsc::channel();
        let flags = Arc::new(Flags::default());

        let worker = Worker {
            receiver,
            events: events_tx,
            keep_ticking,
            tick_interval,
            flags: Arc::clone(&flags),
        };

        // before the owning view's sink is installed
        tracing::info!("starting log queue listener");
        let handle = thread::Builder::new()
            .name(THREAD_NAME.into())
            .spawn(move || worker.run())?;

        let events = ViewEvents {
            receiver: events_rx,
            flags: Arc::clone(&flags),
        };

        Ok((
            Self {
                flags,
                queue,
                handle: Some(handle),
            },
            events,
        ))
    }

    pub fn state(&self) -> ListenerState {
        if self.flags.stopped.load(Ordering::Acquire) {
            ListenerState::Stopped
        } else {
            ListenerState::Running
        }
    }

    /// Stops the listener and waits for its thread.
    ///
    /// Safe to call any number of times.
    pub fn close(&mut self) -> ListenerState {
        if !self.flags.stop.swap(true, Ordering::AcqRel) {
            tracing::info!("closing log queue listener");
            // Wake a listener blocked on an empty queue. If the queue is full
            // the listener is busy and sees the stop flag on its next pass.
            let _ = self.queue.try_send(QueueItem::Stop);
        }

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("log queue listener thread panicked");
            }
        }

        self.flags.stopped.store(true, Ordering::Release);
        ListenerState::Stopped
    }
}

impl Drop for QueueListener {
    fn drop(&mut self) {
        self.close();
    }
}

struct Worker {
    receiver: RecordReceiver,
    events: Sender<ViewEvent>,
    keep_ticking: Arc<AtomicBool>,
    tick_interval: Duration,
    flags: Arc<Flags>,
}

/// Why the loop ended.
#[derive(Debug, PartialEq, Eq)]
enum Exit {
    StopFlag,
    Sentinel,
    RendererGone,
    QueueDisconnected,
}

impl Worker {
    fn run(self) {
        let flags = Arc::clone(&self.flags);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.drain()));

        match outcome {
            Ok(Exit::QueueDisconnected) => {
                tracing::error!("log queue disconnected, listener stopping");
            }
            Ok(exit) => {
                tracing::debug!(?exit, "log queue listener finished");
            }
            Err(_) => {
                tracing::error!("log queue listener failed, listener stopping");
            }
        }

        flags.stopped.store(true, Ordering::Release);
    }

    fn drain(&self) -> Exit {
        loop {
            if self.flags.stop.load(Ordering::Acquire) {
                return Exit::StopFlag;
            }

            let item = match self.receiver.recv_timeout(self.tick_interval) {
                Ok(item) => item,
                Err(RecvTimeoutError::Timeout) => {
                    if self.tick().is_err() {
                        return Exit::RendererGone;
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => return Exit::QueueDisconnected,
            };

            match item {
                QueueItem::Stop => return Exit::Sentinel,
                QueueItem::Record(record) => {
                    if self.events.send(ViewEvent::Record(record)).is_err() {
                        return Exit::RendererGone;
                    }
                }
            }
        }
    }

    /// Sends a progress tick on an idle interval, unless progress mode is off
    /// or the previous tick has not been picked up yet.
    fn tick(&self) -> Result<(), mpsc::SendError<ViewEvent>> {
        if !self.keep_ticking.load(Ordering::Acquire) {
            return Ok(());
        }
        if self.flags.tick_pending.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.events.send(ViewEvent::ProgressTick)
    }
}

/// Receiving end of the listener handoff.
pub struct ViewEvents {
    receiver: Receiver<ViewEvent>,
    flags: Arc<Flags>,
}

impl ViewEvents {
    pub fn try_recv(&self) -> Result<ViewEvent, TryRecvError> {
        self.receiver.try_recv().map(|event| self.handed_over(event))
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<ViewEvent, RecvTimeoutError> {
        self.receiver
            .recv_timeout(timeout)
            .map(|event| self.handed_over(event))
    }

    fn handed_over(&self, event: ViewEvent) -> ViewEvent {
        if event == ViewEvent::ProgressTick {
            self.flags.tick_pending.store(false, Ordering::Release);
        }
        event
    }
}
