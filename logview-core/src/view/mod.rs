//! The log view: sink, listener and renderer wired to one surface.
//!
//! A `LogView` lives on the display thread. Producers reach it through the
//! global `tracing` destinations (when opened with [`LogView::open`]) or by
//! calling [`LogSink::record`] on [`LogView::sink`].

#[cfg(test)]
mod tests;

use crate::conf::ViewerConfig;
use crate::listener::{ListenerState, QueueListener, ViewEvent, ViewEvents};
use crate::render::Renderer;
use crate::sink::{self, LogSink, record_queue};
use crate::surface::Surface;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::TryRecvError;
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to start the log queue listener: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to write to the log surface: {0}")]
    Surface(#[source] std::io::Error),
}

pub struct LogView<S: Surface> {
    sink: Arc<LogSink>,
    listener: QueueListener,
    events: ViewEvents,
    renderer: Renderer,
    surface: S,
    global: bool,
    closed: bool,
}

impl<S: Surface> LogView<S> {
    /// Opens a view and installs its sink as a global logging destination.
    pub fn open(config: &ViewerConfig, surface: S) -> Result<Self, ViewError> {
        let mut view = Self::open_detached(config, surface)?;
        sink::install(&view.sink);
        view.global = true;
        Ok(view)
    }

    /// Opens a view fed only through [`LogView::sink`].
    pub fn open_detached(config: &ViewerConfig, surface: S) -> Result<Self, ViewError> {
        let (tx, rx) = record_queue(config.queue_capacity);
        let keep_ticking = Arc::new(AtomicBool::new(false));

        let sink = Arc::new(LogSink::new(tx.clone(), config.level()));
        let (listener, events) =
            QueueListener::spawn(rx, tx, Arc::clone(&keep_ticking), config.tick_interval())
                .map_err(ViewError::Spawn)?;
        let renderer = Renderer::new(config.render_options(), keep_ticking);

        Ok(Self {
            sink,
            listener,
            events,
            renderer,
            surface,
            global: false,
            closed: false,
        })
    }

    pub fn sink(&self) -> Arc<LogSink> {
        Arc::clone(&self.sink)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn listener_state(&self) -> ListenerState {
        self.listener.state()
    }

    /// Renders every event already handed over, without blocking.
    pub fn pump(&mut self) -> Result<usize, ViewError> {
        let mut handled = 0;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.handle(event)?;
                    handled += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        Ok(handled)
    }

    /// Display loop: pumps events until `done` returns true, sleeping `idle`
    /// between empty passes.
    pub fn pump_until(
        &mut self,
        mut done: impl FnMut(&Self) -> bool,
        idle: Duration,
    ) -> Result<(), ViewError> {
        loop {
            let handled = self.pump()?;
            if done(&*self) {
                return Ok(());
            }
            if handled == 0 {
                thread::sleep(idle);
            }
        }
    }

    /// Stops the listener, renders what it already handed over and detaches
    /// the sink. Safe to call more than once.
    pub fn close(&mut self) -> Result<(), ViewError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        self.listener.close();
        let drained = self.pump();

        if self.global {
            sink::uninstall(&self.sink);
        }

        drained.map(|_| ())
    }

    /// Closes the view and hands back its surface.
    pub fn into_surface(mut self) -> Result<S, ViewError>
    where
        S: Default,
    {
        self.close()?;
        Ok(std::mem::take(&mut self.surface))
    }

    fn handle(&mut self, event: ViewEvent) -> Result<(), ViewError> {
        self.renderer
            .handle(event, &mut self.surface)
            .map_err(ViewError::Surface)
    }
}

impl<S: Surface> Drop for LogView<S> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "log view closed with an error");
        }
    }
}
