use std::io::{Cursor, Write};
use std::path::Path;

use super::palette_image::PaletteImage;
use crate::error::RenderError;

/// Encode the palette canvas as an 8-bit RGBA PNG.
pub fn encode_png(image: &PaletteImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_rgba())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Losslessly re-compress PNG bytes with oxipng.
///
/// Falls back to the input when optimization fails. Alpha optimization is
/// off so transparent pixels keep their stored colour.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    let options = oxipng::Options {
        strip: oxipng::StripChunks::Safe,
        optimize_alpha: false,
        ..Default::default()
    };
    match oxipng::optimize_from_memory(&png_bytes, &options) {
        Ok(optimized) if optimized.len() < png_bytes.len() => optimized,
        Ok(_) => png_bytes,
        Err(e) => {
            tracing::debug!(error = %e, "PNG optimization failed, keeping encoder output");
            png_bytes
        }
    }
}

/// Write `bytes` to `path` so that readers see either the old file or the
/// complete new one, never a partial write.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".palettepull-")
        .suffix(".png.tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|e| RenderError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use colour_sort::Rgb;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_encode_roundtrips_rgba() {
        let image = PaletteImage::render(&[Rgb::new(9, 8, 7), Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let (info, pixels) = decode(&bytes);
        assert_eq!((info.width, info.height), (1, 3));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(pixels, image.as_rgba());
    }

    #[test]
    fn test_optimize_is_lossless() {
        let colours: Vec<Rgb> = (0..50u8).map(|i| Rgb::new(i, 255 - i, i / 2)).collect();
        let palette = PaletteImage::render(&colours);
        let optimized = optimize_png(encode_png(&palette).unwrap());

        let decoded = image::load_from_memory(&optimized).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw().as_slice(), palette.as_rgba());
    }

    #[test]
    fn test_optimize_keeps_garbage_input() {
        let junk = b"not a png".to_vec();
        assert_eq!(optimize_png(junk.clone()), junk);
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("outPalette.png");
        std::fs::write(&path, b"old").unwrap();

        write_atomic(&path, b"new contents").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new contents");
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temporary file left behind");
    }

    #[test]
    fn test_write_atomic_missing_dir_fails_cleanly() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("outPalette.png");
        assert!(matches!(write_atomic(&path, b"x"), Err(RenderError::Io(_))));
        assert!(!path.exists());
    }
}
