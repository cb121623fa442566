use std::collections::HashSet;

use colour_sort::Rgb;

use super::ColourKey;

/// The set of distinct colour keys observed so far.
///
/// Membership only; insertion order is not tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteSet {
    keys: HashSet<ColourKey>,
}

impl PaletteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, key: ColourKey) -> bool {
        self.keys.insert(key)
    }

    pub fn contains(&self, key: ColourKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Freeze the set into a list of colours in ascending key order.
    ///
    /// The order is only there to give sorters a reproducible input.
    pub fn into_colours(self) -> Vec<Rgb> {
        let mut keys: Vec<ColourKey> = self.keys.into_iter().collect();
        keys.sort_unstable();
        keys.into_iter().map(ColourKey::to_rgb).collect()
    }
}

impl FromIterator<ColourKey> for PaletteSet {
    fn from_iter<I: IntoIterator<Item = ColourKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
