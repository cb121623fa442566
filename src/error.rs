use std::path::PathBuf;

use thiserror::Error;

/// Top-level failure of a palette run.
#[derive(Debug, Error)]
pub enum PullError {
    #[error(transparent)]
    Collect(#[from] CollectError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Fatal errors while walking and decoding sources.
///
/// Unrecognized formats and pixel layouts are not errors; the collector
/// reports them as skipped files instead.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Source not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Decode error in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl CollectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CollectError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Cannot derive an output name from {}", .0.display())]
    OutputPath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
