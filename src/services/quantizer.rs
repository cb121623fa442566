use serde::Deserialize;

use super::pixel_adapter::{ChannelBuffer, PixelView};
use crate::models::{ColourKey, PaletteSet};

/// Every key has exactly this many channels.
pub const TARGET_CHANNELS: usize = 3;

/// How a 16-bit sample is reduced to the 8 bits stored in a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleReduction {
    /// Keep the most significant byte (`v >> 8`).
    #[default]
    HighByte,
    /// Keep the least significant byte (`v & 0xff`).
    ///
    /// Known defect: distinct 16-bit shades collapse or scatter depending
    /// on noise in the low bits. Only for byte-exact parity with palettes
    /// produced by older releases.
    LowByte,
}

impl SampleReduction {
    #[inline]
    pub fn reduce(self, sample: u16) -> u8 {
        match self {
            SampleReduction::HighByte => (sample >> 8) as u8,
            SampleReduction::LowByte => (sample & 0xff) as u8,
        }
    }
}

/// Call `f` with the key of every whole pixel in `view`, in buffer order.
///
/// Target channel `c` reads source channel `min(c, colour_channels - 1)`,
/// so grey pixels repeat their single sample into R, G and B.
pub fn for_each_key(view: &PixelView<'_>, reduction: SampleReduction, f: impl FnMut(ColourKey)) {
    let layout = view.layout();
    let stride = layout.channels();
    let last = layout.colour_channels() - 1;

    match view.buffer() {
        ChannelBuffer::U8(samples) => visit(samples, stride, last, |s| s, f),
        ChannelBuffer::U16(samples) => visit(samples, stride, last, |s| reduction.reduce(s), f),
    }
}

fn visit<T: Copy>(
    samples: &[T],
    stride: usize,
    last: usize,
    to_u8: impl Fn(T) -> u8,
    mut f: impl FnMut(ColourKey),
) {
    for pixel in samples.chunks_exact(stride) {
        let mut channels = [0u8; TARGET_CHANNELS];
        for (c, out) in channels.iter_mut().enumerate() {
            *out = to_u8(pixel[c.min(last)]);
        }
        f(ColourKey::from_channels(channels[0], channels[1], channels[2]));
    }
}

/// Quantize every pixel of `view` into `palette`.
///
/// Returns the number of keys that were not already present.
pub fn quantize_into(
    view: &PixelView<'_>,
    reduction: SampleReduction,
    palette: &mut PaletteSet,
) -> usize {
    let mut added = 0;
    for_each_key(view, reduction, |key| {
        if palette.insert(key) {
            added += 1;
        }
    });
    added
}
