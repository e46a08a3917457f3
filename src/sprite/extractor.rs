use std::collections::VecDeque;

use image::{Rgba, RgbaImage};
use log::debug;

use super::{Point, Region};

/// Background color: white with zero alpha.
///
/// Any pixel that differs from it in any channel is foreground.
pub const BLANK: Rgba<u8> = Rgba([255, 255, 255, 0]);

pub fn is_blank(pixel: &Rgba<u8>) -> bool {
    *pixel == BLANK
}

/// Claimed-pixel mask, owned by a single extraction call
struct VisitMask {
    width: u32,
    claimed: Vec<bool>,
}

impl VisitMask {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            claimed: vec![false; width as usize * height as usize],
        }
    }

    fn index(&self, point: Point) -> usize {
        point.row as usize * self.width as usize + point.col as usize
    }

    fn is_claimed(&self, point: Point) -> bool {
        self.claimed[self.index(point)]
    }

    fn claim(&mut self, point: Point) {
        let idx = self.index(point);
        self.claimed[idx] = true;
    }
}

/// Find every 4-connected region of non-blank pixels.
///
/// Regions come back in the order their first pixel is met by a row-major scan.
/// The input is left untouched: extraction blanks a private working copy so the
/// original colors stay available for packing.
pub fn extract_regions(image: &RgbaImage) -> Vec<Region> {
    let (width, height) = image.dimensions();
    let mut working = image.clone();
    let mut mask = VisitMask::new(width, height);
    let mut regions = Vec::new();

    for row in 0..height {
        for col in 0..width {
            let seed = Point::new(row, col);
            if mask.is_claimed(seed) || is_blank(working.get_pixel(col, row)) {
                continue;
            }

            let pixels = flood_fill(&mut working, &mut mask, seed);
            if let Some(region) = Region::from_pixels(pixels) {
                debug!(
                    "Region {} at ({}, {}): {} pixels, bounds ({}, {})..=({}, {})",
                    regions.len(),
                    seed.row,
                    seed.col,
                    region.pixel_count(),
                    region.bounds_min.row,
                    region.bounds_min.col,
                    region.bounds_max.row,
                    region.bounds_max.col,
                );
                regions.push(region);
            }
        }
    }

    regions
}

/// Breadth-first fill from `seed`, claiming pixels as they are enqueued.
fn flood_fill(working: &mut RgbaImage, mask: &mut VisitMask, seed: Point) -> Vec<Point> {
    let (width, height) = working.dimensions();
    let mut pixels = Vec::new();
    let mut queue = VecDeque::new();

    claim(working, mask, seed);
    queue.push_back(seed);

    while let Some(point) = queue.pop_front() {
        pixels.push(point);

        for next in neighbors(point, width, height) {
            if !mask.is_claimed(next) && !is_blank(working.get_pixel(next.col, next.row)) {
                claim(working, mask, next);
                queue.push_back(next);
            }
        }
    }

    pixels
}

fn claim(working: &mut RgbaImage, mask: &mut VisitMask, point: Point) {
    mask.claim(point);
    working.put_pixel(point.col, point.row, BLANK);
}

/// In-bounds edge neighbors: down, right, up, left.
fn neighbors(point: Point, width: u32, height: u32) -> impl Iterator<Item = Point> {
    let Point { row, col } = point;
    [
        (row + 1 < height).then(|| Point::new(row + 1, col)),
        (col + 1 < width).then(|| Point::new(row, col + 1)),
        row.checked_sub(1).map(|r| Point::new(r, col)),
        col.checked_sub(1).map(|c| Point::new(row, c)),
    ]
    .into_iter()
    .flatten()
}
