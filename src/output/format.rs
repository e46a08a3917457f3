use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{ImageError, ImageFormat};
use log::warn;

use crate::cli::CompressionLevel;
use crate::error::SpriteError;
use crate::sheet::Sheet;

/// Save the sheet image, picking the format from the file extension.
///
/// PNG output can additionally be squeezed with oxipng.
pub fn save_sheet_image(
    sheet: &Sheet,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    let save_err = |e: ImageError| SpriteError::ImageSave {
        path: path.to_path_buf(),
        source: e,
    };

    let format = ImageFormat::from_path(path).map_err(save_err)?;

    // Encode in memory
    let mut encoded = Cursor::new(Vec::new());
    sheet
        .image
        .write_to(&mut encoded, format)
        .map_err(save_err)?;

    let output_data = match compress {
        Some(level) if format == ImageFormat::Png => {
            let opts = match level {
                CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
                CompressionLevel::Max => oxipng::Options::max_compression(),
            };
            oxipng::optimize_from_memory(&encoded.into_inner(), &opts).map_err(|e| {
                SpriteError::PngCompress {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })?
        }
        Some(_) => {
            warn!(
                "Compression only applies to PNG output, writing {} as-is",
                path.display()
            );
            encoded.into_inner()
        }
        None => encoded.into_inner(),
    };

    fs::write(path, output_data).map_err(|e| SpriteError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
