//! HSV view of an 8-bit RGB color

use super::rgb::Rgb;

/// Hue, saturation and value, each in `0.0..=1.0`.
///
/// Hue is expressed as a fraction of a full turn and lies in `0.0..1.0`;
/// achromatic colors (all channels equal) have hue and saturation 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        if delta == 0.0 {
            return Self { h: 0.0, s: 0.0, v };
        }
        let s = delta / max;

        // Sector of the hue hexagon, in sixths of a turn
        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let mut h = sector / 6.0;
        if h >= 1.0 {
            h -= 1.0;
        }

        Self { h, s, v }
    }
}
