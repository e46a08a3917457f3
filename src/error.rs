use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpriteError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read '{path}': {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported image format '{path}': {source}")]
    UnsupportedFormat {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Corrupt image data in '{path}': {source}")]
    CorruptImage {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("{count} sprites of {cell_width}x{cell_height} do not fit in a single image")]
    SheetTooLarge {
        count: usize,
        cell_width: u32,
        cell_height: u32,
    },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

impl SpriteError {
    /// True for the errors raised while reading and decoding an input image.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            SpriteError::InputNotFound(_)
                | SpriteError::InputRead { .. }
                | SpriteError::UnsupportedFormat { .. }
                | SpriteError::CorruptImage { .. }
                | SpriteError::ImageLoad { .. }
        )
    }
}

/// Process exit status for an error reaching `main`.
///
/// Input images that cannot be read or decoded exit with 2, everything else with 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SpriteError>() {
        Some(e) if e.is_decode_failure() => 2,
        _ => 1,
    }
}
