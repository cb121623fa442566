pub mod palette_image;
pub mod png_writer;

pub use palette_image::{PaletteImage, PaletteLayout};
pub use png_writer::{encode_png, optimize_png, write_atomic};
