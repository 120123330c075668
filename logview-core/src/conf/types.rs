use crate::record::Level;
use crate::render::{DEFAULT_PROGRESS_SENTINEL, RenderOptions};
use crate::surface::MemorySurface;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Log view settings, usually read from `logview.hcl`.
///
/// ```hcl
/// min_level        = "info"
/// queue_capacity   = 4096
/// tick_interval_ms = 50
///
/// display {
///   show_colors       = true
///   show_code_path    = true
///   colorize_payload  = false
///   progress_width    = 100
///   cycles_per_update = 4
///   scrollback        = 10000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    #[serde(default = "default_min_level")]
    pub min_level: String,

    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default = "default_progress_sentinel")]
    pub progress_sentinel: String,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_colors: bool,

    #[serde(default = "default_true")]
    pub show_code_path: bool,

    #[serde(default)]
    pub colorize_payload: bool,

    #[serde(default = "default_progress_width")]
    pub progress_width: usize,

    #[serde(default = "default_cycles_per_update")]
    pub cycles_per_update: u64,

    #[serde(default = "default_scrollback")]
    pub scrollback: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
            queue_capacity: default_queue_capacity(),
            tick_interval_ms: default_tick_interval_ms(),
            progress_sentinel: default_progress_sentinel(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_colors: true,
            show_code_path: true,
            colorize_payload: false,
            progress_width: default_progress_width(),
            cycles_per_update: default_cycles_per_update(),
            scrollback: default_scrollback(),
        }
    }
}

impl ViewerConfig {
    /// Minimum level, falling back to INFO for an unparsable value.
    /// [`crate::conf::validate`] rejects those before they get here.
    pub fn level(&self) -> Level {
        self.min_level.parse().unwrap_or(Level::Info)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_colors: self.display.show_colors,
            show_code_path: self.display.show_code_path,
            colorize_payload: self.display.colorize_payload,
            progress_sentinel: self.progress_sentinel.clone(),
            progress_width: self.display.progress_width,
            cycles_per_update: self.display.cycles_per_update,
        }
    }

    /// An in-memory surface keeping the configured number of lines.
    pub fn memory_surface(&self) -> MemorySurface {
        MemorySurface::with_scrollback(self.display.scrollback)
    }
}

fn default_min_level() -> String {
    "info".to_string()
}

fn default_queue_capacity() -> usize {
    4096
}

fn default_tick_interval_ms() -> u64 {
    50
}

fn default_progress_sentinel() -> String {
    DEFAULT_PROGRESS_SENTINEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_progress_width() -> usize {
    100
}

fn default_cycles_per_update() -> u64 {
    4
}

fn default_scrollback() -> usize {
    10_000
}
