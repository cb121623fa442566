use super::ColourSorter;
use crate::color::{perceived_luminance, Rgb};

/// Orders colours from dark to light by [`perceived_luminance`].
///
/// Colours with identical luminance fall back to their packed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LuminanceSort;

impl ColourSorter for LuminanceSort {
    fn sort(&self, mut colours: Vec<Rgb>) -> Vec<Rgb> {
        colours.sort_by(|a, b| {
            perceived_luminance(*a)
                .total_cmp(&perceived_luminance(*b))
                .then_with(|| a.packed().cmp(&b.packed()))
        });
        colours
    }

    fn name(&self) -> &'static str {
        "luminance"
    }
}
