use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::error::SpriteError;
use crate::sheet::{PlacedSprite, Sheet};

#[derive(Serialize)]
struct JsonOutput {
    meta: Meta,
    image: String,
    size: Size,
    cell: Size,
    sprites: Vec<JsonSprite>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
    format: &'static str,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSprite {
    index: usize,
    frame: Frame,
    source_frame: Frame,
    pixel_count: usize,
}

#[derive(Serialize)]
struct Frame {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

/// Write the sprite list next to the sheet: where each sprite was found in the
/// source image and where it sits on the sheet.
pub fn write_metadata(sheet: &Sheet, image_path: &Path, json_path: &Path) -> Result<()> {
    let image = image_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let output = JsonOutput {
        meta: Meta {
            app: "autosprite",
            version: env!("CARGO_PKG_VERSION"),
            format: "rgba8888",
        },
        image,
        size: Size {
            w: sheet.width(),
            h: sheet.height(),
        },
        cell: Size {
            w: sheet.cell_width,
            h: sheet.cell_height,
        },
        sprites: sheet.sprites.iter().map(sprite_to_json).collect(),
    };

    let content = serde_json::to_string_pretty(&output)?;

    fs::write(json_path, content).map_err(|e| SpriteError::OutputWrite {
        path: json_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn sprite_to_json(sprite: &PlacedSprite) -> JsonSprite {
    JsonSprite {
        index: sprite.index,
        frame: Frame {
            x: sprite.x,
            y: sprite.y,
            w: sprite.width,
            h: sprite.height,
        },
        // Source coordinates are (row, col); frames are (x, y)
        source_frame: Frame {
            x: sprite.source_min.col,
            y: sprite.source_min.row,
            w: sprite.width,
            h: sprite.height,
        },
        pixel_count: sprite.pixel_count,
    }
}
