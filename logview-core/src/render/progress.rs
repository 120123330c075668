use super::constants::{PROGRESS_GLYPHS, PROGRESS_LABEL};
use crate::surface::StyledLine;

/// Animation state of the single-line progress indicator.
#[derive(Debug, Default)]
pub struct ProgressBar {
    counter: u64,
}

/// What a progress tick did to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressStep {
    /// A fresh progress line must be appended.
    Start(StyledLine),
    /// The last line must be replaced with this rotation.
    Rotate(StyledLine),
    /// Nothing to redraw on this tick.
    Idle,
}

impl ProgressBar {
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Advances the animation by one tick.
    ///
    /// `showing` tells whether the surface already ends with a progress line.
    /// The counter only moves while a progress line is showing, so the
    /// rotation repeats every `glyphs * cycles_per_update` ticks.
    pub fn step(&mut self, showing: bool, width: usize, cycles_per_update: u64) -> ProgressStep {
        if !showing {
            return ProgressStep::Start(progress_line(0, width));
        }

        let glyphs = PROGRESS_GLYPHS.len() as u64;
        let cycles = cycles_per_update.max(1);
        let position = self.counter % glyphs.saturating_mul(cycles);
        self.counter += 1;

        if position % cycles == 0 {
            ProgressStep::Rotate(progress_line((position / cycles) as usize, width))
        } else {
            ProgressStep::Idle
        }
    }
}

pub fn is_progress_line(text: &str) -> bool {
    text.trim().split(' ').next() == Some(PROGRESS_LABEL)
}

/// `Processing: ` followed by `width` glyphs, rotated left by `offset`.
pub fn progress_line(offset: usize, width: usize) -> StyledLine {
    let bar: String = PROGRESS_GLYPHS
        .iter()
        .cycle()
        .skip(offset % PROGRESS_GLYPHS.len())
        .take(width)
        .collect();

    StyledLine::plain(format!("{PROGRESS_LABEL} {bar}"))
}
