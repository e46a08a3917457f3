//! Batch file renaming with simple text substitution rules.
//!
//! Only the file name is rewritten; files never move between directories.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use regex::{NoExpand, Regex};

use crate::config::{RenameConfig, ReplaceRule};
use crate::error::SpriteError;

/// Compiled rename rules
#[derive(Debug, Clone)]
pub struct RenameRules {
    separators: Regex,
    separator: String,
    replacements: Vec<ReplaceRule>,
    lowercase: bool,
}

impl RenameRules {
    pub fn new(
        separators: &str,
        separator: &str,
        replacements: Vec<ReplaceRule>,
        lowercase: bool,
    ) -> Result<Self, SpriteError> {
        let separators = Regex::new(separators).map_err(|e| SpriteError::InvalidPattern {
            pattern: separators.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            separators,
            separator: separator.to_string(),
            replacements,
            lowercase,
        })
    }

    pub fn from_config(config: &RenameConfig) -> Result<Self, SpriteError> {
        Self::new(
            &config.separators,
            &config.separator,
            config.replacements.clone(),
            config.lowercase,
        )
    }

    /// Rewrite a file name: collapse separator runs, apply replacements in order,
    /// trim, then lowercase.
    pub fn apply(&self, name: &str) -> String {
        let mut name = self
            .separators
            .replace_all(name, NoExpand(&self.separator))
            .into_owned();

        for rule in &self.replacements {
            name = name.replace(&rule.from, &rule.to);
        }

        let name = name.trim();
        if self.lowercase {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }
}

/// A single pending rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Expand `pattern` and compute the new path for every file whose name changes.
///
/// Matches are returned in glob order.
pub fn plan_renames(pattern: &str, rules: &RenameRules) -> Result<Vec<RenamePlan>, SpriteError> {
    let invalid = |message: String| SpriteError::InvalidPattern {
        pattern: pattern.to_string(),
        message,
    };

    let mut plans = Vec::new();
    for entry in glob::glob(pattern).map_err(|e| invalid(e.to_string()))? {
        let path = entry.map_err(|e| invalid(e.to_string()))?;
        if !path.is_file() {
            continue;
        }
        if let Some(plan) = plan_one(&path, rules) {
            plans.push(plan);
        }
    }

    Ok(plans)
}

fn plan_one(path: &Path, rules: &RenameRules) -> Option<RenamePlan> {
    let file_name = path.file_name()?;
    let Some(name) = file_name.to_str() else {
        warn!("Skipping {}: file name is not valid UTF-8", path.display());
        return None;
    };
    let renamed = rules.apply(name);

    if renamed.is_empty() || renamed == name {
        debug!("Unchanged: {}", path.display());
        return None;
    }

    // A separator in the new name would move the file to another directory
    if renamed.contains(['/', '\\']) {
        warn!(
            "Skipping {}: new name '{}' contains a path separator",
            path.display(),
            renamed
        );
        return None;
    }

    Some(RenamePlan {
        from: path.to_path_buf(),
        to: path.with_file_name(renamed),
    })
}

/// Carry out `plans`, returning how many files were renamed.
///
/// Existing targets are never overwritten, including targets claimed by an
/// earlier plan in the same batch. With `dry_run` nothing is touched, but the
/// count and log lines match what a real run would do.
pub fn apply_renames(plans: &[RenamePlan], dry_run: bool) -> Result<usize, SpriteError> {
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    let mut vacated: HashSet<PathBuf> = HashSet::new();
    let mut renamed = 0;

    for plan in plans {
        let taken = claimed.contains(&plan.to)
            || (plan.to.exists() && !vacated.contains(&plan.to));
        if taken {
            warn!(
                "Skipping {}: {} already exists",
                plan.from.display(),
                plan.to.display()
            );
            continue;
        }

        if !dry_run {
            fs::rename(&plan.from, &plan.to).map_err(|e| SpriteError::Rename {
                from: plan.from.clone(),
                to: plan.to.clone(),
                source: e,
            })?;
        }
        info!("{} -> {}", plan.from.display(), plan.to.display());

        vacated.remove(&plan.to);
        claimed.remove(&plan.from);
        vacated.insert(plan.from.clone());
        claimed.insert(plan.to.clone());
        renamed += 1;
    }

    Ok(renamed)
}
