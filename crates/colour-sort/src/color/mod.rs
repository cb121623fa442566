//! Color types and conversion utilities
//!
//! - [`Rgb`]: an 8-bit-per-channel colour, the unit being sorted
//! - [`Hsv`]: hue/saturation/value view of an [`Rgb`], used for banding
//! - [`perceived_luminance`]: weighted brightness estimate

mod hsv;
mod luminance;
mod rgb;

pub use hsv::Hsv;
pub use luminance::perceived_luminance;
pub use rgb::Rgb;
