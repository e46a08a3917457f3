mod format;
mod json;

pub use format::save_sheet_image;
pub use json::write_metadata;
