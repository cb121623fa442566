use super::ColourSorter;
use crate::color::Rgb;

/// Orders colours by ascending packed `0xRRGGBB` value.
///
/// Not perceptual; useful when debugging the collector or comparing
/// palettes numerically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOrder;

impl ColourSorter for KeyOrder {
    fn sort(&self, mut colours: Vec<Rgb>) -> Vec<Rgb> {
        colours.sort_unstable_by_key(|c| c.packed());
        colours
    }

    fn name(&self) -> &'static str {
        "key"
    }
}
