//! Renderer
//!
//! Turns records into colorized lines on the display thread. Owns every piece
//! of mutable display state: the color registry, the two color cycles and the
//! progress animation.
//!
//! A line looks like:
//!
//! ```text
//! [2024-05-01T10:22:03.0042][INFO   ] [ProcessID:  4242, ThreadID:     3] capture::sync:align:88 ::: aligned 4 cameras
//! ```

mod constants;
mod progress;
#[cfg(test)]
mod tests;

pub use constants::{
    DEFAULT_PROGRESS_SENTINEL, ID_WIDTH, LEVEL_WIDTH, PROGRESS_GLYPHS, PROGRESS_LABEL,
    TIMESTAMP_WIDTH, level_color,
};
pub use progress::{ProgressBar, ProgressStep, is_progress_line, progress_line};

use crate::color::{ColorCycle, ColorRegistry, Rgb};
use crate::listener::ViewEvent;
use crate::record::{LogRecord, ParsedMessage};
use crate::surface::{StyledLine, Surface};
use constants::{NEUTRAL, TIMESTAMP_FORMAT};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub show_colors: bool,
    pub show_code_path: bool,
    pub colorize_payload: bool,
    pub progress_sentinel: String,
    pub progress_width: usize,
    pub cycles_per_update: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_colors: true,
            show_code_path: true,
            colorize_payload: false,
            progress_sentinel: DEFAULT_PROGRESS_SENTINEL.to_string(),
            progress_width: 100,
            cycles_per_update: 4,
        }
    }
}

pub struct Renderer {
    options: RenderOptions,
    colors: ColorRegistry,
    timestamp_colors: ColorCycle,
    message_colors: ColorCycle,
    progress: ProgressBar,
    keep_ticking: Arc<AtomicBool>,
    malformed: u64,
}

impl Renderer {
    /// `keep_ticking` is shared with the queue listener, which reads it to
    /// decide whether idle time should produce progress ticks.
    pub fn new(options: RenderOptions, keep_ticking: Arc<AtomicBool>) -> Self {
        Self {
            options,
            colors: ColorRegistry::new(),
            timestamp_colors: ColorCycle::timestamps(),
            message_colors: ColorCycle::messages(),
            progress: ProgressBar::default(),
            keep_ticking,
            malformed: 0,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    pub fn progress_mode(&self) -> bool {
        self.keep_ticking.load(Ordering::Acquire)
    }

    /// Records rendered through the raw fallback.
    pub fn malformed(&self) -> u64 {
        self.malformed
    }

    pub fn progress_counter(&self) -> u64 {
        self.progress.counter()
    }

    pub fn handle(&mut self, event: ViewEvent, surface: &mut impl Surface) -> io::Result<()> {
        match event {
            ViewEvent::Record(record) => self.render_record(&record, surface),
            // ticks queued before progress mode ended are stale
            ViewEvent::ProgressTick if !self.progress_mode() => Ok(()),
            ViewEvent::ProgressTick => {
                let (width, cycles) = (self.options.progress_width, self.options.cycles_per_update);
                self.log_progress(width, cycles, surface)
            }
        }
    }

    pub fn render_record(&mut self, record: &LogRecord, surface: &mut impl Surface) -> io::Result<()> {
        let parsed = record.parse();

        if let Ok(message) = &parsed {
            if message.payload == self.options.progress_sentinel {
                self.keep_ticking.store(true, Ordering::Release);
                return Ok(());
            }
        }
        self.keep_ticking.store(false, Ordering::Release);

        let line = match parsed {
            Ok(message) => self.format_record(record, &message),
            Err(_) => {
                self.malformed += 1;
                self.format_fallback(record)
            }
        };

        surface.append(line)
    }

    /// Draws or advances the progress line.
    pub fn log_progress(
        &mut self,
        width: usize,
        cycles_per_update: u64,
        surface: &mut impl Surface,
    ) -> io::Result<()> {
        let showing = surface
            .last_line()
            .is_some_and(|line| is_progress_line(&line));

        match self.progress.step(showing, width, cycles_per_update) {
            ProgressStep::Start(line) => surface.append(line),
            ProgressStep::Rotate(line) => surface.replace_last(line),
            ProgressStep::Idle => Ok(()),
        }
    }

    //-------------------------------------------------------------------------
    // Formatting
    //-------------------------------------------------------------------------

    fn format_record(&mut self, record: &LogRecord, message: &ParsedMessage) -> StyledLine {
        let mut line = self.format_header(record);

        if self.options.show_code_path {
            let code_path = &message.code_path;
            let color = self
                .colors
                .code_path(&code_path.module, &code_path.function);
            line.push(" ", None);
            line.push(code_path.tag(), self.paint(color));
        }

        let payload_color = if self.options.colorize_payload {
            self.message_colors.next_color()
        } else {
            NEUTRAL
        };
        line.push(" ::: ", None);
        line.push(message.payload.clone(), self.paint(payload_color));
        line
    }

    fn format_fallback(&mut self, record: &LogRecord) -> StyledLine {
        let mut line = self.format_header(record);
        line.push(" ::: ", None);
        line.push(record.message.trim().to_string(), self.paint(NEUTRAL));
        line
    }

    /// Timestamp, level, process and thread segments.
    fn format_header(&mut self, record: &LogRecord) -> StyledLine {
        let timestamp = format!(
            "[{}.{:04}]",
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.timestamp.timestamp_subsec_millis()
        );
        let timestamp = format!("{timestamp:<TIMESTAMP_WIDTH$}");
        let timestamp_color = self.timestamp_colors.next_color();

        let level = format!("{:<LEVEL_WIDTH$}", record.level);

        let pid = record.process_id;
        let tid = record.thread_id;
        let process_color = self.colors.process(pid);
        let thread_color = self.colors.thread(tid, pid);

        let mut line = StyledLine::new();
        line.push(timestamp, self.paint(timestamp_color));
        line.push("[", None);
        line.push(level, self.paint(level_color(record.level)));
        line.push("] ", None);
        line.push(
            format!("[ProcessID:{pid:>ID_WIDTH$},"),
            self.paint(process_color),
        );
        line.push(" ", None);
        line.push(
            format!("ThreadID:{tid:>ID_WIDTH$}]"),
            self.paint(thread_color),
        );
        line
    }

    fn paint(&self, color: Rgb) -> Option<Rgb> {
        self.options.show_colors.then_some(color)
    }
}
