//! Test fixtures: image sources written into a temporary directory.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageBuffer, Rgba, RgbaImage};
use tempfile::TempDir;

/// A temporary directory with a `source/` subdirectory to walk.
///
/// Directory runs write their palette next to the walked directory, so
/// output lands in the temp root and never inside `source/`.
pub struct SourceTree {
    pub root: TempDir,
}

impl SourceTree {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir(root.path().join("source")).expect("Failed to create source dir");
        Self { root }
    }

    /// The directory handed to the collector.
    pub fn source(&self) -> PathBuf {
        self.root.path().join("source")
    }

    /// Absolute path of `relative` inside `source/`, creating parents.
    pub fn path(&self, relative: &str) -> PathBuf {
        let path = self.source().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        path
    }

    /// Where a directory run over `source/` writes its output.
    pub fn palette_path(&self) -> PathBuf {
        self.root.path().join("sourcePalette.png")
    }

    pub fn write_rgba(&self, relative: &str, width: u32, pixels: &[[u8; 4]]) -> PathBuf {
        let path = self.path(relative);
        write_rgba_png(&path, width, pixels);
        path
    }

    pub fn write_grey(&self, relative: &str, width: u32, samples: &[u8]) -> PathBuf {
        let path = self.path(relative);
        let height = samples.len() as u32 / width;
        GrayImage::from_raw(width, height, samples.to_vec())
            .expect("sample count must fill the image")
            .save(&path)
            .expect("Failed to write grey fixture");
        path
    }

    pub fn write_rgba16(&self, relative: &str, width: u32, pixels: &[[u16; 4]]) -> PathBuf {
        let path = self.path(relative);
        let height = pixels.len() as u32 / width;
        let raw: Vec<u16> = pixels.iter().flatten().copied().collect();
        ImageBuffer::<Rgba<u16>, Vec<u16>>::from_raw(width, height, raw)
            .expect("pixel count must fill the image")
            .save(&path)
            .expect("Failed to write 16-bit fixture");
        path
    }

    pub fn write_bytes(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }
}

/// Write an 8-bit RGBA PNG, row-major, `width` pixels per row.
pub fn write_rgba_png(path: &Path, width: u32, pixels: &[[u8; 4]]) {
    let height = pixels.len() as u32 / width;
    let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
    RgbaImage::from_raw(width, height, raw)
        .expect("pixel count must fill the image")
        .save(path)
        .expect("Failed to write RGBA fixture");
}

/// The four-pixel image from the reference scenario: three distinct greys.
pub const THREE_GREYS: [[u8; 4]; 4] = [
    [10, 10, 10, 255],
    [10, 10, 10, 255],
    [20, 20, 20, 255],
    [30, 30, 30, 255],
];
