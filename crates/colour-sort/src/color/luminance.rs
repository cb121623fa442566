use super::rgb::Rgb;

const R_WEIGHT: f32 = 0.241;
const G_WEIGHT: f32 = 0.691;
const B_WEIGHT: f32 = 0.068;

/// Perceived brightness of a color in `0.0..=1.0`.
///
/// Square root of a weighted channel sum; the weights sum to 1, so white
/// maps to exactly 1.0 and black to 0.0.
///
/// # Example
/// ```
/// use colour_sort::{perceived_luminance, Rgb};
/// assert_eq!(perceived_luminance(Rgb::new(0, 0, 0)), 0.0);
/// assert!(perceived_luminance(Rgb::new(0, 255, 0)) > perceived_luminance(Rgb::new(0, 0, 255)));
/// ```
#[inline]
pub fn perceived_luminance(rgb: Rgb) -> f32 {
    let [r, g, b] = rgb.to_unit();
    (R_WEIGHT * r + G_WEIGHT * g + B_WEIGHT * b).sqrt()
}
