use colour_sort::Rgb;

/// Number of significant bits in a [`ColourKey`].
pub const KEY_BITS: u32 = 24;

const KEY_MASK: u32 = (1 << KEY_BITS) - 1;

/// A quantized colour packed as `0xRRGGBB`.
///
/// Equal keys always denote equal (R, G, B) triples; the upper 8 bits of
/// the inner value are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColourKey(u32);

impl ColourKey {
    /// Pack three 8-bit samples, most significant channel first.
    #[inline]
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Build a key from a raw value, keeping only the low 24 bits.
    #[inline]
    pub const fn from_raw(value: u32) -> Self {
        Self(value & KEY_MASK)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Materialize the key as a colour triple.
    #[inline]
    pub const fn to_rgb(self) -> Rgb {
        Rgb::from_packed(self.0)
    }
}

impl From<Rgb> for ColourKey {
    fn from(rgb: Rgb) -> Self {
        Self::from_channels(rgb.r, rgb.g, rgb.b)
    }
}

impl From<ColourKey> for Rgb {
    fn from(key: ColourKey) -> Self {
        key.to_rgb()
    }
}
