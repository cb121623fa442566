use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat, ImageReader};

use super::pixel_adapter::pixel_view;
use super::quantizer::{quantize_into, SampleReduction};
use crate::error::CollectError;
use crate::models::PaletteSet;

/// Why a file contributed no colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not recognized as any image codec
    UnsupportedFormat,
    /// Decoded, but into a pixel format the quantizer does not read
    UnsupportedPixelLayout,
}

/// Result of feeding one file to the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Merged { pixels: usize, new_colours: usize },
    Skipped(SkipReason),
}

/// Running totals for one collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub files_seen: usize,
    pub files_merged: usize,
    pub files_skipped: usize,
}

impl CollectStats {
    fn record(&mut self, outcome: FileOutcome) {
        self.files_seen += 1;
        match outcome {
            FileOutcome::Merged { .. } => self.files_merged += 1,
            FileOutcome::Skipped(_) => self.files_skipped += 1,
        }
    }
}

/// Walks image sources and accumulates their distinct colours.
///
/// Each collector owns its own [`PaletteSet`]; nothing is shared between
/// collectors.
#[derive(Debug, Default)]
pub struct Collector {
    palette: PaletteSet,
    reduction: SampleReduction,
    stats: CollectStats,
}

impl Collector {
    pub fn new(reduction: SampleReduction) -> Self {
        Self {
            reduction,
            ..Default::default()
        }
    }

    /// Collect from a single image file or a directory tree.
    ///
    /// Directories are walked recursively in file-name order. Unrecognized
    /// files are skipped; any other failure aborts the walk.
    pub fn collect(&mut self, source: &Path) -> Result<CollectStats, CollectError> {
        let metadata = fs::metadata(source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CollectError::NotFound(source.to_path_buf()),
            _ => CollectError::io(source, e),
        })?;

        if metadata.is_dir() {
            self.walk_dir(source)?;
        } else {
            self.collect_file(source)?;
        }

        tracing::info!(
            source = %source.display(),
            files = self.stats.files_seen,
            merged = self.stats.files_merged,
            skipped = self.stats.files_skipped,
            colours = self.palette.len(),
            "Collected colours"
        );
        Ok(self.stats)
    }

    fn walk_dir(&mut self, dir: &Path) -> Result<(), CollectError> {
        let mut entries = fs::read_dir(dir)
            .and_then(|rd| rd.collect::<io::Result<Vec<_>>>())
            .map_err(|e| CollectError::io(dir, e))?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| CollectError::io(&path, e))?;

            if file_type.is_dir() {
                self.walk_dir(&path)?;
                continue;
            }

            // Symlinks are followed to files only, never into directories
            let is_file = if file_type.is_symlink() {
                fs::metadata(&path)
                    .map_err(|e| CollectError::io(&path, e))?
                    .is_file()
            } else {
                file_type.is_file()
            };

            if is_file {
                self.collect_file(&path)?;
            } else {
                tracing::debug!(path = %path.display(), "Not a regular file, skipping");
            }
        }
        Ok(())
    }

    /// Decode one file and merge its colours.
    pub fn collect_file(&mut self, path: &Path) -> Result<FileOutcome, CollectError> {
        let outcome = match decode(path)? {
            Some(img) => self.merge_image(&img),
            None => FileOutcome::Skipped(SkipReason::UnsupportedFormat),
        };

        self.stats.record(outcome);
        match outcome {
            FileOutcome::Merged {
                pixels,
                new_colours,
            } => tracing::debug!(path = %path.display(), pixels, new_colours, "Merged image"),
            FileOutcome::Skipped(reason) => {
                tracing::debug!(path = %path.display(), ?reason, "Skipped file")
            }
        }
        Ok(outcome)
    }

    /// Merge an already decoded image. Does not touch the file counters.
    pub fn merge_image(&mut self, img: &DynamicImage) -> FileOutcome {
        match pixel_view(img) {
            Some(view) => FileOutcome::Merged {
                pixels: view.pixel_count(),
                new_colours: quantize_into(&view, self.reduction, &mut self.palette),
            },
            None => FileOutcome::Skipped(SkipReason::UnsupportedPixelLayout),
        }
    }

    pub fn palette(&self) -> &PaletteSet {
        &self.palette
    }

    pub fn stats(&self) -> CollectStats {
        self.stats
    }

    pub fn into_palette(self) -> PaletteSet {
        self.palette
    }
}

/// Decode the first frame of an image, sniffing the codec from content.
///
/// `Ok(None)` means the content is not a recognized image format. A file
/// that only looks like an image by its leading bytes, and whose extension
/// names some other format, is treated the same way when it fails to decode.
fn decode(path: &Path) -> Result<Option<DynamicImage>, CollectError> {
    let file = File::open(path).map_err(|e| CollectError::io(path, e))?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| CollectError::io(path, e))?;

    let Some(sniffed) = reader.format() else {
        return Ok(None);
    };
    // Some codecs have short text-like signatures (PNM's `P1`..`P7`), so a
    // failed decode only counts as corruption when the extension agrees.
    let extension_agrees = ImageFormat::from_path(path).ok() == Some(sniffed);

    match reader.decode() {
        Ok(img) => Ok(Some(img)),
        Err(ImageError::Unsupported(e)) => {
            tracing::debug!(path = %path.display(), error = %e, "No decoder for format");
            Ok(None)
        }
        Err(ImageError::Decoding(e)) if !extension_agrees => {
            tracing::debug!(
                path = %path.display(),
                format = ?sniffed,
                error = %e,
                "Signature matched but content did not decode, skipping"
            );
            Ok(None)
        }
        Err(ImageError::IoError(e))
            if !extension_agrees && e.kind() == io::ErrorKind::UnexpectedEof =>
        {
            tracing::debug!(path = %path.display(), format = ?sniffed, "Truncated signature match, skipping");
            Ok(None)
        }
        Err(ImageError::IoError(e)) => Err(CollectError::io(path, e)),
        Err(e) => Err(CollectError::Decode {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
