mod extractor;
mod loader;
mod region;

pub use extractor::{BLANK, extract_regions, is_blank};
pub use loader::load_image;
pub use region::{Point, Region, Span};
