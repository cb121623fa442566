//! Perceptual ordering strategies
//!
//! All strategies implement [`ColourSorter`]. [`SortKind`] names them for
//! configuration files and builds the matching boxed strategy.

mod key_order;
mod luminance;
mod step;

pub use key_order::KeyOrder;
pub use luminance::LuminanceSort;
pub use step::StepSort;

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;

/// A deterministic ordering of a colour set.
///
/// Implementations must be total orders over distinct colours: the output
/// for a given set must not depend on the order of the input vector.
pub trait ColourSorter {
    /// Consume the colours and return them in display order.
    fn sort(&self, colours: Vec<Rgb>) -> Vec<Rgb>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

impl<S: ColourSorter + ?Sized> ColourSorter for Box<S> {
    fn sort(&self, colours: Vec<Rgb>) -> Vec<Rgb> {
        (**self).sort(colours)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Named ordering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKind {
    /// [`StepSort`]
    #[default]
    Step,
    /// [`LuminanceSort`]
    Luminance,
    /// [`KeyOrder`]
    Key,
}

impl SortKind {
    /// Build the strategy. `repetitions` only affects [`SortKind::Step`].
    pub fn build(self, repetitions: u32) -> Box<dyn ColourSorter> {
        match self {
            SortKind::Step => Box::new(StepSort::new(repetitions)),
            SortKind::Luminance => Box::new(LuminanceSort),
            SortKind::Key => Box::new(KeyOrder),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKind::Step => "step",
            SortKind::Luminance => "luminance",
            SortKind::Key => "key",
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKind(pub String);

impl fmt::Display for UnknownSortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort '{}' (expected step, luminance or key)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortKind {}

impl FromStr for SortKind {
    type Err = UnknownSortKind;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("step") {
            Ok(SortKind::Step)
        } else if s.eq_ignore_ascii_case("luminance") {
            Ok(SortKind::Luminance)
        } else if s.eq_ignore_ascii_case("key") {
            Ok(SortKind::Key)
        } else {
            Err(UnknownSortKind(s.to_string()))
        }
    }
}
