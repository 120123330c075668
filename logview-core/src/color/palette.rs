use super::Rgb;

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;
const SATURATION: f64 = 0.55;
const VALUE: f64 = 0.95;

/// Rotating palette: each call yields a hue far from the previous ones.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    issued: u64,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }

    pub fn next_color(&mut self) -> Rgb {
        let hue = (self.issued as f64 * GOLDEN_RATIO_CONJUGATE).fract();
        self.issued += 1;
        hsv_to_rgb(hue, SATURATION, VALUE)
    }
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}
