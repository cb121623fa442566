//! Step sort: hue bands with alternating lightness direction.
//!
//! See the crate-level documentation for the key formula.

use super::ColourSorter;
use crate::color::{perceived_luminance, Hsv, Rgb};

/// Number of hue bands used when none is configured.
pub const DEFAULT_REPETITIONS: u32 = 8;

/// Orders colours by `(hue band, luminance step, value step)`.
///
/// Odd hue bands run light-to-dark instead of dark-to-light, so the end of
/// one band sits next to the start of the following band.
///
/// # Example
///
/// ```
/// use colour_sort::{ColourSorter, Rgb, StepSort};
///
/// let sorted = StepSort::new(8).sort(vec![
///     Rgb::new(255, 255, 255),
///     Rgb::new(0, 0, 0),
/// ]);
/// assert_eq!(sorted, vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSort {
    repetitions: u32,
}

impl StepSort {
    /// Create a step sort with the given number of bands.
    ///
    /// A value of 0 is treated as 1.
    pub fn new(repetitions: u32) -> Self {
        Self {
            repetitions: repetitions.max(1),
        }
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// The sort key for a single colour. Exposed for diagnostics.
    pub fn key(&self, rgb: Rgb) -> (u32, u32, u32, u32) {
        let reps = self.repetitions as f32;
        let hsv = Hsv::from(rgb);
        let lum = perceived_luminance(rgb);

        let h2 = step(hsv.h, reps);
        let mut l2 = step(lum, reps);
        let mut v2 = step(hsv.v, reps);

        if h2 % 2 == 1 {
            l2 = self.repetitions - l2;
            v2 = self.repetitions - v2;
        }

        (h2, l2, v2, rgb.packed())
    }
}

impl Default for StepSort {
    fn default() -> Self {
        Self::new(DEFAULT_REPETITIONS)
    }
}

/// `floor(x * reps)` for `x` in `0.0..=1.0`, never exceeding `reps`.
#[inline]
fn step(x: f32, reps: f32) -> u32 {
    (x * reps).floor().clamp(0.0, reps) as u32
}

impl ColourSorter for StepSort {
    fn sort(&self, mut colours: Vec<Rgb>) -> Vec<Rgb> {
        colours.sort_by_cached_key(|&c| self.key(c));
        colours
    }

    fn name(&self) -> &'static str {
        "step"
    }
}
