mod load;
mod merge;
mod types;

pub use load::LoadedConfig;
pub use merge::{RenameJob, merge_rename_args, merge_split_args};
pub use types::{AutospriteConfig, CompressConfig, RenameConfig, ReplaceRule};
