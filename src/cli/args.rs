use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autosprite")]
#[command(version, about = "Spritesheet extractor", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract sprites from an image and stack them into a vertical spritesheet
    Split(SplitArgs),
    /// Batch-rename files using text substitution rules
    Rename(RenameArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Input image file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output image file [default: input with the suffix before the extension]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suffix inserted before the extension of the default output path [default: .out]
    #[arg(long)]
    pub suffix: Option<String>,

    /// Also write a JSON file listing every sprite and its position
    #[arg(long)]
    pub metadata: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    /// Glob pattern of files to rename (e.g. "music/**/*.ogg")
    #[arg(required_unless_present = "config")]
    pub pattern: Option<String>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Substring replacement applied to file names, in order (repeatable)
    #[arg(long = "replace", value_name = "FROM=TO")]
    pub replacements: Vec<Replacement>,

    /// Regex whose matches are collapsed into a single '_' [default: "[ -]+"]
    #[arg(long, value_name = "REGEX")]
    pub separators: Option<String>,

    /// Keep the original letter case
    #[arg(long)]
    pub keep_case: bool,

    /// Show what would be renamed without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// A `FROM=TO` substring replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl std::str::FromStr for Replacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((from, _)) if from.is_empty() => {
                Err(format!("replacement needs a non-empty FROM: {}", s))
            }
            Some((from, to)) => Ok(Replacement {
                from: from.to_string(),
                to: to.to_string(),
            }),
            None => Err(format!("expected FROM=TO, got {}", s)),
        }
    }
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_args() {
        let cli = CliArgs::try_parse_from(["autosprite", "split", "-i", "sprite.png"]).unwrap();

        let Command::Split(args) = cli.command else {
            panic!("expected split");
        };
        assert_eq!(args.input, PathBuf::from("sprite.png"));
        assert!(args.output.is_none());
        assert!(args.compress.is_none());
        assert!(!args.metadata);
    }

    #[test]
    fn test_split_requires_input() {
        assert!(CliArgs::try_parse_from(["autosprite", "split"]).is_err());
    }

    #[test]
    fn test_compress_without_value_defaults_to_two() {
        let cli = CliArgs::try_parse_from([
            "autosprite",
            "split",
            "--input",
            "a.png",
            "--output",
            "b.png",
            "--compress",
        ])
        .unwrap();

        let Command::Split(args) = cli.command else {
            panic!("expected split");
        };
        assert_eq!(args.output, Some(PathBuf::from("b.png")));
        assert_eq!(args.compress, Some(CompressionLevel::Level(2)));
    }

    #[test]
    fn test_compression_level_parse() {
        assert_eq!("max".parse(), Ok(CompressionLevel::Max));
        assert_eq!("MAX".parse(), Ok(CompressionLevel::Max));
        assert_eq!("0".parse(), Ok(CompressionLevel::Level(0)));
        assert_eq!("6".parse(), Ok(CompressionLevel::Level(6)));
        assert!("7".parse::<CompressionLevel>().is_err());
        assert!("fast".parse::<CompressionLevel>().is_err());
    }

    #[test]
    fn test_rename_args() {
        let cli = CliArgs::try_parse_from([
            "autosprite",
            "rename",
            "music/**/*.ogg",
            "--replace",
            "piglette=pig",
            "--replace",
            "_a=_",
            "--dry-run",
        ])
        .unwrap();

        let Command::Rename(args) = cli.command else {
            panic!("expected rename");
        };
        assert_eq!(args.pattern.as_deref(), Some("music/**/*.ogg"));
        assert_eq!(
            args.replacements,
            vec![
                Replacement {
                    from: "piglette".to_string(),
                    to: "pig".to_string()
                },
                Replacement {
                    from: "_a".to_string(),
                    to: "_".to_string()
                },
            ]
        );
        assert!(args.dry_run);
        assert!(!args.keep_case);
    }

    #[test]
    fn test_rename_needs_pattern_or_config() {
        assert!(CliArgs::try_parse_from(["autosprite", "rename"]).is_err());
        assert!(CliArgs::try_parse_from(["autosprite", "rename", "-c", "cfg.json"]).is_ok());
    }

    #[test]
    fn test_replacement_parse() {
        assert_eq!(
            "a=".parse(),
            Ok(Replacement {
                from: "a".to_string(),
                to: String::new()
            })
        );
        assert!("=b".parse::<Replacement>().is_err());
        assert!("nothing".parse::<Replacement>().is_err());
    }
}
