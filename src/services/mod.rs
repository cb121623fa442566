pub mod collector;
pub mod output_path;
pub mod pipeline;
pub mod pixel_adapter;
pub mod quantizer;

pub use collector::{CollectStats, Collector, FileOutcome, SkipReason};
pub use output_path::output_path;
pub use pipeline::{PalettePipeline, PaletteRun};
pub use pixel_adapter::{describe, pixel_view, ChannelBuffer, PixelLayout, PixelView};
pub use quantizer::{quantize_into, SampleReduction};
