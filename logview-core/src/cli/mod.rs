mod check;
mod demo;
mod tail;
#[cfg(test)]
mod tests;

pub use check::*;
pub use demo::*;
pub use tail::*;

use crate::conf::{ViewerConfig, load_or_default};
use crate::logging::default_log_mode;
use crate::surface::TerminalSurface;
use std::io::Stdout;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Sleep between display passes with nothing to draw.
pub const LOOP_IDLE_SLEEP: Duration = Duration::from_millis(16);

/// Loads the config and decides on colors: `--no-color` wins, otherwise
/// colors follow the config and whether stdout is a terminal.
fn viewer_config(path: Option<&Path>, no_color: bool) -> anyhow::Result<ViewerConfig> {
    let mut config = load_or_default(path)?;
    config.display.show_colors =
        config.display.show_colors && !no_color && default_log_mode().colors();
    Ok(config)
}

fn terminal_surface(config: &ViewerConfig) -> TerminalSurface<Stdout> {
    TerminalSurface::stdout(config.display.show_colors)
}

/// Flag flipped by Ctrl-C.
fn interrupt_flag() -> anyhow::Result<Arc<AtomicBool>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;
    Ok(interrupted)
}
