//! Colors for the log view.
//!
//! Two kinds of coloring are used:
//! - [`ColorCycle`]: a continuous generator that drifts between two endpoint
//!   colors, sampled once per record (timestamps, optionally payloads).
//! - [`ColorRegistry`]: a lazily populated, stable key → color table for
//!   categorical fields (process, thread, code path), fed by a rotating
//!   [`Palette`].

mod cycle;
mod palette;
mod registry;

pub use cycle::ColorCycle;
pub use palette::Palette;
pub use registry::{ColorKey, ColorRegistry};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn r(self) -> u8 {
        self.0
    }

    pub fn g(self) -> u8 {
        self.1
    }

    pub fn b(self) -> u8 {
        self.2
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}
