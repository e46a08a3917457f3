use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::AutospriteConfig;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: AutospriteConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: AutospriteConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// The rename glob pattern, resolved relative to the config file directory.
    pub fn resolve_rename_pattern(&self) -> Option<String> {
        self.config.rename.pattern.as_ref().map(|pattern| {
            if Path::new(pattern).is_absolute() {
                pattern.clone()
            } else {
                self.config_dir.join(pattern).to_string_lossy().to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompressConfig;

    #[test]
    fn test_empty_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autosprite.json");
        std::fs::write(&path, "{}").unwrap();

        let loaded = LoadedConfig::load(&path).unwrap();

        assert_eq!(loaded.config.version, 1);
        assert_eq!(loaded.config.output_suffix, ".out");
        assert!(!loaded.config.metadata);
        assert!(loaded.config.compress.is_none());
        assert_eq!(loaded.config.rename.separators, "[ -]+");
        assert!(loaded.config.rename.lowercase);
        assert_eq!(loaded.config_dir, dir.path());
    }

    #[test]
    fn test_parse_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autosprite.json");
        std::fs::write(
            &path,
            r#"{
                "output_suffix": ".sheet",
                "metadata": true,
                "compress": "max",
                "rename": {
                    "pattern": "music/**/*.ogg",
                    "replacements": [{ "from": "piglette", "to": "pig" }],
                    "lowercase": false
                }
            }"#,
        )
        .unwrap();

        let loaded = LoadedConfig::load(&path).unwrap();

        assert_eq!(loaded.config.output_suffix, ".sheet");
        assert!(loaded.config.metadata);
        assert!(matches!(loaded.config.compress, Some(CompressConfig::Max(ref s)) if s == "max"));
        assert!(!loaded.config.rename.lowercase);
        assert_eq!(loaded.config.rename.separator, "_");
        assert_eq!(loaded.config.rename.replacements.len(), 1);
        assert_eq!(
            loaded.resolve_rename_pattern(),
            Some(
                dir.path()
                    .join("music/**/*.ogg")
                    .to_string_lossy()
                    .to_string()
            )
        );
    }

    #[test]
    fn test_numeric_compress_level() {
        let config: AutospriteConfig = serde_json::from_str(r#"{ "compress": 4 }"#).unwrap();

        assert!(matches!(config.compress, Some(CompressConfig::Level(4))));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(LoadedConfig::load(&path).is_err());
    }
}
