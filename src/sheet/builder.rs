use image::RgbaImage;
use log::info;

use super::{PlacedSprite, Sheet};
use crate::error::SpriteError;
use crate::sprite::{BLANK, Region, extract_regions};

/// Uniform cell size `(height, width)` able to hold every region.
///
/// Height and width are maximized independently, so they may come from different
/// regions. An empty list gives a 1x1 cell.
pub fn compute_uniform_cell(regions: &[Region]) -> (u32, u32) {
    let (max_height, max_width) = regions.iter().fold((0, 0), |(h, w), region| {
        let span = region.size();
        (h.max(span.height), w.max(span.width))
    });

    (max_height + 1, max_width + 1)
}

/// Stack `regions` top to bottom in cells of `cell_height` x `cell_width`.
///
/// Each region is translated so its bounding box starts at the top-left corner of
/// its cell, and its colors are copied from `original`. Everything else is
/// [`BLANK`]. With no regions the canvas is a single blank cell.
pub fn pack(
    original: &RgbaImage,
    regions: &[Region],
    cell_height: u32,
    cell_width: u32,
) -> Result<RgbaImage, SpriteError> {
    let too_large = || SpriteError::SheetTooLarge {
        count: regions.len(),
        cell_width,
        cell_height,
    };

    let rows = u32::try_from(regions.len().max(1)).map_err(|_e| too_large())?;
    let height = cell_height.checked_mul(rows).ok_or_else(too_large)?;

    let mut canvas = RgbaImage::from_pixel(cell_width, height, BLANK);

    let mut offset = 0;
    for region in regions {
        let origin = region.bounds_min;
        for p in &region.pixels {
            let color = *original.get_pixel(p.col, p.row);
            canvas.put_pixel(p.col - origin.col, offset + p.row - origin.row, color);
        }
        offset += cell_height;
    }

    Ok(canvas)
}

/// Extract every sprite from `original` and pack them into a vertical sheet
pub fn build_sheet(original: &RgbaImage) -> Result<Sheet, SpriteError> {
    let regions = extract_regions(original);
    let (cell_height, cell_width) = compute_uniform_cell(&regions);

    info!(
        "Found {} {}x{}px sprites",
        regions.len(),
        cell_height,
        cell_width
    );

    let image = pack(original, &regions, cell_height, cell_width)?;

    info!(
        "Generating {}x{}px spritesheet...",
        image.height(),
        image.width()
    );

    let mut y = 0;
    let sprites = regions
        .iter()
        .enumerate()
        .map(|(index, region)| {
            let span = region.size();
            let placed = PlacedSprite {
                index,
                source_min: region.bounds_min,
                source_max: region.bounds_max,
                pixel_count: region.pixel_count(),
                x: 0,
                y,
                width: span.width + 1,
                height: span.height + 1,
            };
            y += cell_height;
            placed
        })
        .collect();

    Ok(Sheet {
        cell_width,
        cell_height,
        image,
        sprites,
    })
}
