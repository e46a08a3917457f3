use serde::{Deserialize, Serialize};

/// A pixel coordinate. `row` is the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: u32,
    pub col: u32,
}

impl Point {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Bounding-box span of a region: max corner minus min corner.
///
/// A single pixel has a span of (0, 0); add one to get a pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub height: u32,
    pub width: u32,
}

/// A maximal 4-connected set of non-blank pixels carved out of a source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Member pixels in discovery order
    pub pixels: Vec<Point>,
    /// Inclusive top-left corner of the bounding box
    pub bounds_min: Point,
    /// Inclusive bottom-right corner of the bounding box
    pub bounds_max: Point,
}

impl Region {
    /// Build a region and its bounding box from its member pixels.
    ///
    /// Returns `None` for an empty pixel list.
    pub fn from_pixels(pixels: Vec<Point>) -> Option<Self> {
        let first = *pixels.first()?;
        let (bounds_min, bounds_max) = pixels.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.row.min(p.row), min.col.min(p.col)),
                Point::new(max.row.max(p.row), max.col.max(p.col)),
            )
        });

        Some(Self {
            pixels,
            bounds_min,
            bounds_max,
        })
    }

    pub fn size(&self) -> Span {
        Span {
            height: self.bounds_max.row - self.bounds_min.row,
            width: self.bounds_max.col - self.bounds_min.col,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}
