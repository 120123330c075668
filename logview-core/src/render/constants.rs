use crate::color::Rgb;
use crate::record::Level;

pub const LEVEL_WIDTH: usize = 7;
pub const TIMESTAMP_WIDTH: usize = 24;
pub const ID_WIDTH: usize = 6;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const NEUTRAL: Rgb = Rgb::WHITE;
pub const UNKNOWN_LEVEL_COLOR: Rgb = Rgb::WHITE;

/// Payload that switches the view into progress mode.
pub const DEFAULT_PROGRESS_SENTINEL: &str = "__logview_progress__";

pub const PROGRESS_LABEL: &str = "Processing:";
pub const PROGRESS_GLYPHS: [char; 13] = [
    '▁', '▂', '▃', '▄', '▅', '▆', '▇', '▆', '▅', '▄', '▃', '▂', '▁',
];

pub fn level_color(level: Level) -> Rgb {
    match level {
        Level::Debug => Rgb(169, 169, 169),
        Level::Info => Rgb(255, 255, 255),
        Level::Warning => Rgb(255, 165, 0),
        Level::Error => Rgb(255, 0, 0),
        _ => UNKNOWN_LEVEL_COLOR,
    }
}
