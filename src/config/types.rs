use serde::{Deserialize, Serialize};

/// PNG compression level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// A substring replacement applied to file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceRule {
    pub from: String,
    pub to: String,
}

/// Settings for the `rename` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Glob pattern of files to rename, relative to the config file
    pub pattern: Option<String>,
    /// Regex whose matches are collapsed into `separator`
    pub separators: String,
    /// Replacement for separator runs
    pub separator: String,
    /// Substring replacements, applied in order
    pub replacements: Vec<ReplaceRule>,
    /// Lowercase the resulting name
    pub lowercase: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            separators: "[ -]+".to_string(),
            separator: "_".to_string(),
            replacements: Vec::new(),
            lowercase: true,
        }
    }
}

/// Autosprite configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutospriteConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Suffix inserted before the extension of the default output path
    pub output_suffix: String,
    /// Write JSON sprite metadata next to the sheet
    pub metadata: bool,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
    /// Batch rename settings
    pub rename: RenameConfig,
}

impl Default for AutospriteConfig {
    fn default() -> Self {
        Self {
            version: 1,
            output_suffix: ".out".to_string(),
            metadata: false,
            compress: None,
            rename: RenameConfig::default(),
        }
    }
}
