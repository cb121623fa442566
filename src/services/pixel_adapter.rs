use image::DynamicImage;

/// Native channel layout of a decoded image.
///
/// `stride` is the number of samples stored per pixel. Direct layouts carry
/// three colour samples (plus alpha when `stride` is 4); grey layouts carry
/// one (plus alpha when `stride` is 2). Alpha is never read as colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    Direct8 { stride: usize },
    Direct16 { stride: usize },
    Grey8 { stride: usize },
    Grey16 { stride: usize },
    Unsupported,
}

impl PixelLayout {
    /// Samples stored per pixel; 0 means "skip this image".
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Direct8 { stride }
            | PixelLayout::Direct16 { stride }
            | PixelLayout::Grey8 { stride }
            | PixelLayout::Grey16 { stride } => stride,
            PixelLayout::Unsupported => 0,
        }
    }

    /// Leading samples per pixel that hold colour.
    pub fn colour_channels(self) -> usize {
        match self {
            PixelLayout::Direct8 { .. } | PixelLayout::Direct16 { .. } => 3,
            PixelLayout::Grey8 { .. } | PixelLayout::Grey16 { .. } => 1,
            PixelLayout::Unsupported => 0,
        }
    }

    pub fn bits_per_channel(self) -> u32 {
        match self {
            PixelLayout::Direct8 { .. } | PixelLayout::Grey8 { .. } => 8,
            PixelLayout::Direct16 { .. } | PixelLayout::Grey16 { .. } => 16,
            PixelLayout::Unsupported => 0,
        }
    }
}

/// Flat sample buffer, pixel-major and channel-minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelBuffer<'a> {
    U8(&'a [u8]),
    U16(&'a [u16]),
}

impl ChannelBuffer<'_> {
    /// Total number of samples (not bytes).
    pub fn len(&self) -> usize {
        match self {
            ChannelBuffer::U8(s) => s.len(),
            ChannelBuffer::U16(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A supported layout paired with the samples it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelView<'a> {
    layout: PixelLayout,
    buffer: ChannelBuffer<'a>,
}

impl<'a> PixelView<'a> {
    /// Pair a layout with a buffer.
    ///
    /// Returns `None` when the layout is unsupported, has a zero stride, or
    /// its bit depth does not match the buffer's sample width.
    pub fn new(layout: PixelLayout, buffer: ChannelBuffer<'a>) -> Option<Self> {
        let width_matches = matches!(
            (layout, buffer),
            (
                PixelLayout::Direct8 { .. } | PixelLayout::Grey8 { .. },
                ChannelBuffer::U8(_)
            ) | (
                PixelLayout::Direct16 { .. } | PixelLayout::Grey16 { .. },
                ChannelBuffer::U16(_)
            )
        );
        if !width_matches || layout.channels() < layout.colour_channels() {
            return None;
        }
        Some(Self { layout, buffer })
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn buffer(&self) -> ChannelBuffer<'a> {
        self.buffer
    }

    /// Whole pixels in the buffer; a trailing partial pixel is not counted.
    pub fn pixel_count(&self) -> usize {
        self.buffer.len() / self.layout.channels()
    }
}

/// Report the native layout of a decoded image.
pub fn describe(img: &DynamicImage) -> PixelLayout {
    pixel_view(img)
        .map(|view| view.layout())
        .unwrap_or(PixelLayout::Unsupported)
}

/// Borrow the image's samples with their layout, or `None` if the pixel
/// format is not one the quantizer understands (float formats and any
/// future variants).
pub fn pixel_view(img: &DynamicImage) -> Option<PixelView<'_>> {
    let (layout, buffer) = match img {
        DynamicImage::ImageRgba8(buf) => (
            PixelLayout::Direct8 { stride: 4 },
            ChannelBuffer::U8(buf.as_raw()),
        ),
        DynamicImage::ImageRgb8(buf) => (
            PixelLayout::Direct8 { stride: 3 },
            ChannelBuffer::U8(buf.as_raw()),
        ),
        DynamicImage::ImageRgba16(buf) => (
            PixelLayout::Direct16 { stride: 4 },
            ChannelBuffer::U16(buf.as_raw()),
        ),
        DynamicImage::ImageRgb16(buf) => (
            PixelLayout::Direct16 { stride: 3 },
            ChannelBuffer::U16(buf.as_raw()),
        ),
        DynamicImage::ImageLuma8(buf) => (
            PixelLayout::Grey8 { stride: 1 },
            ChannelBuffer::U8(buf.as_raw()),
        ),
        DynamicImage::ImageLumaA8(buf) => (
            PixelLayout::Grey8 { stride: 2 },
            ChannelBuffer::U8(buf.as_raw()),
        ),
        DynamicImage::ImageLuma16(buf) => (
            PixelLayout::Grey16 { stride: 1 },
            ChannelBuffer::U16(buf.as_raw()),
        ),
        DynamicImage::ImageLumaA16(buf) => (
            PixelLayout::Grey16 { stride: 2 },
            ChannelBuffer::U16(buf.as_raw()),
        ),
        _ => return None,
    };
    PixelView::new(layout, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgb32FImage, RgbaImage};

    #[test]
    fn test_rgba8_is_direct8() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let layout = describe(&img);
        assert_eq!(layout, PixelLayout::Direct8 { stride: 4 });
        assert_eq!(layout.channels(), 4);
        assert_eq!(layout.bits_per_channel(), 8);
        assert_eq!(pixel_view(&img).unwrap().pixel_count(), 4);
    }

    #[test]
    fn test_grey_layouts() {
        let grey8 = DynamicImage::ImageLuma8(GrayImage::new(3, 1));
        assert_eq!(describe(&grey8), PixelLayout::Grey8 { stride: 1 });

        let grey16: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(3, 1);
        let grey16 = DynamicImage::ImageLuma16(grey16);
        let layout = describe(&grey16);
        assert_eq!(layout, PixelLayout::Grey16 { stride: 1 });
        assert_eq!(layout.bits_per_channel(), 16);
        assert_eq!(layout.colour_channels(), 1);
    }

    #[test]
    fn test_16bit_buffer_is_word_slice() {
        let img = DynamicImage::new_rgba16(2, 1);
        let view = pixel_view(&img).unwrap();
        assert_eq!(view.layout(), PixelLayout::Direct16 { stride: 4 });
        match view.buffer() {
            ChannelBuffer::U16(samples) => assert_eq!(samples.len(), 8),
            other => panic!("Expected 16-bit samples, got {other:?}"),
        }
    }

    #[test]
    fn test_float_formats_unsupported() {
        let img = DynamicImage::ImageRgb32F(Rgb32FImage::new(1, 1));
        assert_eq!(describe(&img), PixelLayout::Unsupported);
        assert_eq!(describe(&img).channels(), 0);
        assert!(pixel_view(&img).is_none());
    }

    #[test]
    fn test_view_rejects_mismatched_width() {
        let samples = [0u8; 4];
        assert!(PixelView::new(
            PixelLayout::Direct16 { stride: 4 },
            ChannelBuffer::U8(&samples)
        )
        .is_none());
        assert!(PixelView::new(PixelLayout::Unsupported, ChannelBuffer::U8(&samples)).is_none());
    }

    #[test]
    fn test_view_rejects_short_stride() {
        let samples = [0u8; 4];
        assert!(PixelView::new(PixelLayout::Direct8 { stride: 2 }, ChannelBuffer::U8(&samples))
            .is_none());
        assert!(PixelView::new(PixelLayout::Grey8 { stride: 0 }, ChannelBuffer::U8(&samples))
            .is_none());
    }

    #[test]
    fn test_partial_pixel_not_counted() {
        let samples = [0u8; 7];
        let view =
            PixelView::new(PixelLayout::Direct8 { stride: 4 }, ChannelBuffer::U8(&samples)).unwrap();
        assert_eq!(view.pixel_count(), 1);
    }
}
