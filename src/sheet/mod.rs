mod builder;
mod types;

pub use builder::{build_sheet, compute_uniform_cell, pack};
pub use types::{PlacedSprite, Sheet};
