use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::sprite::Point;

/// Where one extracted sprite came from and where it landed on the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSprite {
    /// Position in the stacking order
    pub index: usize,
    /// Inclusive top-left corner of the sprite's bounds in the source image
    pub source_min: Point,
    /// Inclusive bottom-right corner of the sprite's bounds in the source image
    pub source_max: Point,
    /// Number of pixels in the sprite
    pub pixel_count: usize,
    /// Left edge on the sheet (always 0, sprites are left-aligned)
    pub x: u32,
    /// Top edge of the sprite's cell on the sheet
    pub y: u32,
    /// Width of the sprite's bounds
    pub width: u32,
    /// Height of the sprite's bounds
    pub height: u32,
}

/// A vertical spritesheet: equally sized cells stacked top to bottom
#[derive(Debug)]
pub struct Sheet {
    /// Width of every cell (and of the sheet)
    pub cell_width: u32,
    /// Height of every cell
    pub cell_height: u32,
    /// Rendered sheet image
    pub image: RgbaImage,
    /// Sprites in stacking order
    pub sprites: Vec<PlacedSprite>,
}

impl Sheet {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
