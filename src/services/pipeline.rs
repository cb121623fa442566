use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use colour_sort::{ColourSorter, Rgb};

use super::collector::{CollectStats, Collector};
use super::output_path::output_path;
use crate::error::{CollectError, PullError};
use crate::models::AppConfig;
use crate::rendering::{encode_png, optimize_png, write_atomic, PaletteImage};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRun {
    pub output: PathBuf,
    pub colours: usize,
    pub width: u32,
    pub height: u32,
    pub stats: CollectStats,
}

/// Collect, sort, render and write, strictly in that order.
pub struct PalettePipeline {
    config: AppConfig,
    sorter: Box<dyn ColourSorter>,
}

impl PalettePipeline {
    pub fn new(config: AppConfig) -> Self {
        let sorter = config.sort.build(config.step_repetitions);
        Self { config, sorter }
    }

    /// Use a custom ordering strategy instead of the configured one.
    pub fn with_sorter(config: AppConfig, sorter: Box<dyn ColourSorter>) -> Self {
        Self { config, sorter }
    }

    /// Gather the distinct colours under `source` in display order.
    pub fn sorted_palette(&self, source: &Path) -> Result<(Vec<Rgb>, CollectStats), PullError> {
        let mut collector = Collector::new(self.config.sample_reduction);
        let stats = collector.collect(source)?;
        let colours = collector.into_palette().into_colours();

        let sorted = self.sorter.sort(colours);
        tracing::debug!(sorter = self.sorter.name(), colours = sorted.len(), "Sorted palette");
        Ok((sorted, stats))
    }

    /// Run end to end and write `<base>Palette.png` next to `source`.
    ///
    /// Nothing is written unless every step before the final write
    /// succeeded.
    pub fn run(&self, source: &Path) -> Result<PaletteRun, PullError> {
        let is_dir = fs::metadata(source)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CollectError::NotFound(source.to_path_buf()),
                _ => CollectError::io(source, e),
            })?
            .is_dir();
        let output = output_path(source, is_dir, self.config.legacy_space_suffix)?;

        let (colours, stats) = self.sorted_palette(source)?;
        let image = PaletteImage::render(&colours);

        let mut png_bytes = encode_png(&image)?;
        if self.config.optimize {
            png_bytes = optimize_png(png_bytes);
        }
        write_atomic(&output, &png_bytes)?;

        tracing::info!(
            output = %output.display(),
            colours = colours.len(),
            width = image.width(),
            height = image.height(),
            bytes = png_bytes.len(),
            "Wrote palette image"
        );

        Ok(PaletteRun {
            output,
            colours: colours.len(),
            width: image.width(),
            height: image.height(),
            stats,
        })
    }
}

impl Default for PalettePipeline {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
