mod args;

pub use args::{CliArgs, Command, CompressionLevel, RenameArgs, Replacement, SplitArgs};
