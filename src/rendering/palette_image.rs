use colour_sort::Rgb;

/// Fill value for every pixel not covered by a palette colour.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

const OPAQUE: u8 = 255;

/// Near-square canvas dimensions for a palette of `len` colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub width: u32,
    pub height: u32,
}

impl PaletteLayout {
    /// `width = floor(sqrt(len))`, `height = ceil(len / width)`.
    ///
    /// An empty palette gets a single transparent pixel rather than a
    /// zero-sized image, which PNG cannot represent.
    pub fn for_len(len: usize) -> Self {
        if len == 0 {
            return Self {
                width: 1,
                height: 1,
            };
        }
        let width = isqrt(len as u64);
        let height = (len as u64).div_ceil(width);
        Self {
            width: width as u32,
            height: height as u32,
        }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Largest `r` with `r * r <= n`.
fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// An RGBA8 raster holding one opaque pixel per palette colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteImage {
    layout: PaletteLayout,
    /// RGBA bytes, row-major
    pixels: Vec<u8>,
    colours: usize,
}

impl PaletteImage {
    /// Lay `colours` out row-major; trailing cells stay transparent.
    pub fn render(colours: &[Rgb]) -> Self {
        let layout = PaletteLayout::for_len(colours.len());
        let mut pixels = TRANSPARENT.repeat(layout.area());

        // Row-major order makes the pixel index equal the colour index
        for (px, colour) in pixels.chunks_exact_mut(4).zip(colours) {
            let [r, g, b] = colour.to_bytes();
            px.copy_from_slice(&[r, g, b, OPAQUE]);
        }

        Self {
            layout,
            pixels,
            colours: colours.len(),
        }
    }

    pub fn width(&self) -> u32 {
        self.layout.width
    }

    pub fn height(&self) -> u32 {
        self.layout.height
    }

    /// Number of opaque (palette) pixels.
    pub fn colour_count(&self) -> usize {
        self.colours
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.layout.width || y >= self.layout.height {
            return None;
        }
        let i = (y as usize * self.layout.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[i..i + 4]);
        Some(px)
    }
}
