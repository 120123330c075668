use super::Rgb;

/// Timestamp colors drift between cyan and magenta.
pub const TIMESTAMP_CYCLE: (Rgb, Rgb, f64) = (Rgb(50, 255, 255), Rgb(255, 50, 255), 0.2);

/// Payload colors drift between lime and cyan.
pub const MESSAGE_CYCLE: (Rgb, Rgb, f64) = (Rgb(128, 255, 100), Rgb(100, 255, 255), 0.7);

/// Infinite color generator with a continuous phase.
///
/// Every call to [`ColorCycle::next_color`] samples the current phase and then
/// advances it, so two consecutive samples are never taken at the same phase.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    start: Rgb,
    end: Rgb,
    phase: f64,
    phase_increment: f64,
}

impl ColorCycle {
    pub fn new(start: Rgb, end: Rgb, phase_increment: f64) -> Self {
        Self {
            start,
            end,
            phase: 0.0,
            phase_increment,
        }
    }

    pub fn timestamps() -> Self {
        let (start, end, inc) = TIMESTAMP_CYCLE;
        Self::new(start, end, inc)
    }

    pub fn messages() -> Self {
        let (start, end, inc) = MESSAGE_CYCLE;
        Self::new(start, end, inc)
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn next_color(&mut self) -> Rgb {
        let t = (self.phase.sin() + 1.0) / 2.0;
        self.phase += self.phase_increment;

        Rgb(
            lerp(self.start.0, self.end.0, t),
            lerp(self.start.1, self.end.1, t),
            lerp(self.start.2, self.end.2, t),
        )
    }
}

impl Iterator for ColorCycle {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        Some(self.next_color())
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let v = a as f64 + (b as f64 - a as f64) * t;
    v.round().clamp(0.0, 255.0) as u8
}
