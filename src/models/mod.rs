pub mod colour_key;
pub mod config;
pub mod palette_set;

pub use colour_key::ColourKey;
pub use config::AppConfig;
pub use palette_set::PaletteSet;
