pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod rename;
pub mod sheet;
pub mod split;
pub mod sprite;

pub use cli::{CliArgs, Command, CompressionLevel};
pub use error::SpriteError;
pub use sheet::{PlacedSprite, Sheet, build_sheet, compute_uniform_cell, pack};
pub use split::{SplitJob, SplitSummary};
pub use sprite::{BLANK, Point, Region, Span, extract_regions};
