use std::io::ErrorKind;
use std::path::Path;

use image::{ImageError, ImageReader, RgbaImage};
use log::debug;

use crate::error::SpriteError;

/// Decode an image file into an RGBA pixel grid.
///
/// The format is sniffed from the file contents, falling back to the extension.
/// Failures are classified so callers can tell a missing file from an unknown
/// format or a damaged one.
pub fn load_image(path: &Path) -> Result<RgbaImage, SpriteError> {
    if !path.is_file() {
        return Err(SpriteError::InputNotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)
        .map_err(|e| classify_io(path, e))?
        .with_guessed_format()
        .map_err(|e| classify_io(path, e))?;

    debug!("Decoding {} as {:?}", path.display(), reader.format());

    let img = reader.decode().map_err(|e| classify_decode(path, e))?;

    Ok(img.into_rgba8())
}

fn classify_io(path: &Path, err: std::io::Error) -> SpriteError {
    if err.kind() == ErrorKind::NotFound {
        SpriteError::InputNotFound(path.to_path_buf())
    } else {
        SpriteError::InputRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

fn classify_decode(path: &Path, err: ImageError) -> SpriteError {
    let path = path.to_path_buf();
    // Truncated streams surface as I/O errors from inside the decoder
    let truncated = matches!(
        &err,
        ImageError::IoError(io) if matches!(io.kind(), ErrorKind::UnexpectedEof | ErrorKind::InvalidData)
    );

    match err {
        ImageError::Unsupported(_) => SpriteError::UnsupportedFormat { path, source: err },
        ImageError::Decoding(_) => SpriteError::CorruptImage { path, source: err },
        _ if truncated => SpriteError::CorruptImage { path, source: err },
        ImageError::IoError(io) => SpriteError::InputRead { path, source: io },
        other => SpriteError::ImageLoad {
            path,
            source: other,
        },
    }
}
