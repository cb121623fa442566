use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Appended to the source's base name to form the output file name.
pub const PALETTE_SUFFIX: &str = "Palette.png";

/// Where the palette image for `source` is written.
///
/// The image lands next to the source as `<base>Palette.png`, where `base`
/// is the file stem for files and the directory's own name for
/// directories. Paths with no final component (`.`, `a/..`) are
/// canonicalized first. With `legacy_space_suffix`, a base containing a
/// space gets one extra trailing space, reproducing older output names.
pub fn output_path(
    source: &Path,
    is_dir: bool,
    legacy_space_suffix: bool,
) -> Result<PathBuf, RenderError> {
    let resolved = if source.file_name().is_some() {
        source.to_path_buf()
    } else {
        source.canonicalize()?
    };

    let base = if is_dir {
        resolved.file_name()
    } else {
        resolved.file_stem()
    }
    .ok_or_else(|| RenderError::OutputPath(source.to_path_buf()))?;

    let mut name = OsString::from(base);
    if legacy_space_suffix && base.to_string_lossy().contains(' ') {
        name.push(" ");
    }
    name.push(PALETTE_SUFFIX);

    let parent = resolved.parent().unwrap_or_else(|| Path::new(""));
    Ok(parent.join(name))
}
