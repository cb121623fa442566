//! colour-sort: perceptual ordering for small colour sets
//!
//! This library orders a set of distinct 8-bit RGB colours so that
//! neighbouring entries look alike. It is used to lay out palette strips
//! where the eye should travel smoothly from one swatch to the next.
//!
//! # Quick Start
//!
//! ```
//! use colour_sort::{ColourSorter, Rgb, StepSort};
//!
//! let colours = vec![
//!     Rgb::new(30, 30, 30),
//!     Rgb::new(10, 10, 10),
//!     Rgb::new(20, 20, 20),
//! ];
//! let sorted = StepSort::default().sort(colours);
//!
//! assert_eq!(sorted[0], Rgb::new(10, 10, 10));
//! assert_eq!(sorted[2], Rgb::new(30, 30, 30));
//! ```
//!
//! # Strategies
//!
//! Every strategy implements [`ColourSorter`], so callers can swap the
//! heuristic without touching traversal or rendering code:
//!
//! - [`StepSort`]: hue bands with alternating lightness direction (default)
//! - [`LuminanceSort`]: a single dark-to-light ramp
//! - [`KeyOrder`]: ascending packed `0xRRGGBB` value
//!
//! All strategies are total orders. Two distinct colours never compare
//! equal, so the output depends only on the input *set*, never on the
//! order the colours arrived in.
//!
//! # Step Sort
//!
//! Sorting by hue alone scatters dark and light shades of the same hue
//! across the strip; sorting by luminance alone interleaves unrelated
//! hues. The step sort quantizes hue into `repetitions` bands, then sorts
//! each band by quantized perceived luminance and HSV value:
//!
//! ```text
//! lum = sqrt(0.241 R + 0.691 G + 0.068 B)      (channels in 0..=1)
//! h2  = floor(h   * repetitions)
//! l2  = floor(lum * repetitions)
//! v2  = floor(v   * repetitions)
//! if h2 is odd: l2 = repetitions - l2, v2 = repetitions - v2
//! key = (h2, l2, v2, packed RGB)
//! ```
//!
//! Reflecting the odd bands makes each band end near where the next one
//! starts, so band boundaries do not produce a dark/light jump.

pub mod color;
pub mod sort;

pub use color::{perceived_luminance, Hsv, Rgb};
pub use sort::{ColourSorter, KeyOrder, LuminanceSort, SortKind, StepSort};
