use anyhow::{Context, Result};

use super::{CompressConfig, LoadedConfig, RenameConfig, ReplaceRule};
use crate::cli::{CompressionLevel, RenameArgs, SplitArgs};
use crate::split::{DEFAULT_SUFFIX, SplitJob};

/// Rename settings after merging CLI arguments with the config file
#[derive(Debug, Clone)]
pub struct RenameJob {
    /// Glob pattern of files to rename
    pub pattern: String,
    pub rules: RenameConfig,
    pub dry_run: bool,
}

impl CompressConfig {
    /// Validate the configured value as a compression level.
    pub fn to_level(&self) -> Result<CompressionLevel> {
        let level = match self {
            CompressConfig::Level(n) => n.to_string(),
            CompressConfig::Max(s) => s.clone(),
        };

        level
            .parse::<CompressionLevel>()
            .map_err(|e| anyhow::anyhow!("invalid compress value in config file: {}", e))
    }
}

/// Build the split job from CLI arguments and an optional config file.
/// CLI arguments always take precedence over config values.
pub fn merge_split_args(args: &SplitArgs, loaded: Option<&LoadedConfig>) -> Result<SplitJob> {
    let config = loaded.map(|lc| &lc.config);

    // Suffix: CLI > config > default
    let suffix = args.suffix.clone().unwrap_or_else(|| {
        config
            .map(|c| c.output_suffix.clone())
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string())
    });

    // Flag presence turns it on, otherwise use config
    let metadata = args.metadata || config.is_some_and(|c| c.metadata);

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else {
        config
            .and_then(|c| c.compress.as_ref())
            .map(CompressConfig::to_level)
            .transpose()?
    };

    Ok(SplitJob {
        input: args.input.clone(),
        output: args.output.clone(),
        suffix,
        metadata,
        compress,
    })
}

/// Build the rename job from CLI arguments and an optional config file.
///
/// CLI replacements run after the ones from the config file.
pub fn merge_rename_args(args: &RenameArgs, loaded: Option<&LoadedConfig>) -> Result<RenameJob> {
    let mut rules = loaded
        .map(|lc| lc.config.rename.clone())
        .unwrap_or_default();

    // Pattern: CLI > config
    let pattern = args
        .pattern
        .clone()
        .or_else(|| loaded.and_then(LoadedConfig::resolve_rename_pattern))
        .context("no rename pattern given on the command line or in the config file")?;

    if let Some(separators) = &args.separators {
        rules.separators = separators.clone();
    }
    rules
        .replacements
        .extend(args.replacements.iter().map(|r| ReplaceRule {
            from: r.from.clone(),
            to: r.to.clone(),
        }));
    if args.keep_case {
        rules.lowercase = false;
    }

    Ok(RenameJob {
        pattern,
        rules,
        dry_run: args.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CliArgs, Command};
    use clap::Parser;
    use std::path::PathBuf;

    fn split_args(argv: &[&str]) -> SplitArgs {
        let mut full = vec!["autosprite", "split"];
        full.extend_from_slice(argv);
        match CliArgs::try_parse_from(full).unwrap().command {
            Command::Split(args) => args,
            Command::Rename(_) => unreachable!(),
        }
    }

    fn rename_args(argv: &[&str]) -> RenameArgs {
        let mut full = vec!["autosprite", "rename"];
        full.extend_from_slice(argv);
        match CliArgs::try_parse_from(full).unwrap().command {
            Command::Rename(args) => args,
            Command::Split(_) => unreachable!(),
        }
    }

    fn loaded(json: &str) -> LoadedConfig {
        LoadedConfig {
            config: serde_json::from_str(json).unwrap(),
            config_dir: PathBuf::from("project"),
        }
    }

    #[test]
    fn test_split_defaults_without_config() {
        let job = merge_split_args(&split_args(&["-i", "a.png"]), None).unwrap();

        assert_eq!(job.input, PathBuf::from("a.png"));
        assert!(job.output.is_none());
        assert_eq!(job.suffix, ".out");
        assert!(!job.metadata);
        assert!(job.compress.is_none());
    }

    #[test]
    fn test_split_config_fills_gaps() {
        let config = loaded(r#"{ "output_suffix": ".sheet", "metadata": true, "compress": "max" }"#);

        let job = merge_split_args(&split_args(&["-i", "a.png"]), Some(&config)).unwrap();

        assert_eq!(job.suffix, ".sheet");
        assert!(job.metadata);
        assert_eq!(job.compress, Some(CompressionLevel::Max));
        assert_eq!(job.output_path(), PathBuf::from("a.sheet.png"));
    }

    #[test]
    fn test_split_cli_overrides_config() {
        let config = loaded(r#"{ "output_suffix": ".sheet", "compress": 5 }"#);
        let args = split_args(&["-i", "a.png", "--suffix", "_s", "--compress", "1", "--metadata"]);

        let job = merge_split_args(&args, Some(&config)).unwrap();

        assert_eq!(job.suffix, "_s");
        assert!(job.metadata);
        assert_eq!(job.compress, Some(CompressionLevel::Level(1)));
    }

    #[test]
    fn test_split_config_compress_level() {
        let config = loaded(r#"{ "compress": 4 }"#);

        let job = merge_split_args(&split_args(&["-i", "a.png"]), Some(&config)).unwrap();

        assert_eq!(job.compress, Some(CompressionLevel::Level(4)));
    }

    #[test]
    fn test_split_config_compress_out_of_range() {
        let config = loaded(r#"{ "compress": 9 }"#);

        assert!(merge_split_args(&split_args(&["-i", "a.png"]), Some(&config)).is_err());
    }

    #[test]
    fn test_split_config_compress_bad_word() {
        let config = loaded(r#"{ "compress": "fast" }"#);

        assert!(merge_split_args(&split_args(&["-i", "a.png"]), Some(&config)).is_err());
    }

    #[test]
    fn test_split_cli_compress_skips_bad_config() {
        let config = loaded(r#"{ "compress": 9 }"#);
        let args = split_args(&["-i", "a.png", "--compress", "max"]);

        let job = merge_split_args(&args, Some(&config)).unwrap();

        assert_eq!(job.compress, Some(CompressionLevel::Max));
    }

    #[test]
    fn test_rename_defaults_without_config() {
        let job = merge_rename_args(&rename_args(&["*.ogg"]), None).unwrap();

        assert_eq!(job.pattern, "*.ogg");
        assert_eq!(job.rules.separators, "[ -]+");
        assert!(job.rules.replacements.is_empty());
        assert!(job.rules.lowercase);
        assert!(!job.dry_run);
    }

    #[test]
    fn test_rename_pattern_falls_back_to_config() {
        let config = loaded(r#"{ "rename": { "pattern": "music/*.ogg" } }"#);

        let job = merge_rename_args(&rename_args(&["-c", "cfg.json"]), Some(&config)).unwrap();

        assert_eq!(
            job.pattern,
            PathBuf::from("project")
                .join("music/*.ogg")
                .to_string_lossy()
        );
    }

    #[test]
    fn test_rename_cli_pattern_wins() {
        let config = loaded(r#"{ "rename": { "pattern": "music/*.ogg" } }"#);

        let job = merge_rename_args(&rename_args(&["sfx/*.wav"]), Some(&config)).unwrap();

        assert_eq!(job.pattern, "sfx/*.wav");
    }

    #[test]
    fn test_rename_without_any_pattern_fails() {
        let config = loaded("{}");

        assert!(merge_rename_args(&rename_args(&["-c", "cfg.json"]), Some(&config)).is_err());
    }

    #[test]
    fn test_rename_cli_extends_and_overrides_config() {
        let config = loaded(
            r#"{ "rename": {
                "separators": "_+",
                "replacements": [{ "from": "piglette", "to": "pig" }]
            } }"#,
        );
        let args = rename_args(&[
            "*.ogg",
            "--separators",
            "[ .]+",
            "--replace",
            "_a=_",
            "--keep-case",
            "--dry-run",
        ]);

        let job = merge_rename_args(&args, Some(&config)).unwrap();

        assert_eq!(job.rules.separators, "[ .]+");
        assert_eq!(
            job.rules.replacements,
            vec![
                ReplaceRule {
                    from: "piglette".to_string(),
                    to: "pig".to_string()
                },
                ReplaceRule {
                    from: "_a".to_string(),
                    to: "_".to_string()
                },
            ]
        );
        assert!(!job.rules.lowercase);
        assert!(job.dry_run);
    }

    #[test]
    fn test_rename_config_settings_kept_without_flags() {
        let config = loaded(r#"{ "rename": { "separators": "_+", "lowercase": false } }"#);

        let job = merge_rename_args(&rename_args(&["*.ogg"]), Some(&config)).unwrap();

        assert_eq!(job.rules.separators, "_+");
        assert!(!job.rules.lowercase);
    }
}
