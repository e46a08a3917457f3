use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::cli::CompressionLevel;
use crate::output::{save_sheet_image, write_metadata};
use crate::sheet::build_sheet;
use crate::sprite::load_image;

pub const DEFAULT_SUFFIX: &str = ".out";

/// Everything needed to turn one sprite image into a spritesheet
#[derive(Debug, Clone)]
pub struct SplitJob {
    pub input: PathBuf,
    /// Output image path; derived from `input` and `suffix` when absent
    pub output: Option<PathBuf>,
    pub suffix: String,
    /// Write `<output stem>.json` next to the sheet
    pub metadata: bool,
    pub compress: Option<CompressionLevel>,
}

impl SplitJob {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            metadata: false,
            compress: None,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input, &self.suffix))
    }
}

/// What a finished split produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub sprite_count: usize,
    pub cell_width: u32,
    pub cell_height: u32,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub output: PathBuf,
    pub metadata: Option<PathBuf>,
}

/// Insert `suffix` between the file stem and the extension
/// (`sprite.png` -> `sprite.out.png`).
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Load the input image, extract its sprites, and write the spritesheet.
pub fn run(job: &SplitJob) -> Result<SplitSummary> {
    let image = load_image(&job.input)?;
    info!(
        "Loaded {} ({}x{})",
        job.input.display(),
        image.width(),
        image.height()
    );

    let sheet = build_sheet(&image)?;

    let output = job.output_path();
    save_sheet_image(&sheet, &output, job.compress)
        .with_context(|| format!("failed to write spritesheet for {}", job.input.display()))?;
    info!("Saved {}", output.display());

    let metadata = if job.metadata {
        let json_path = output.with_extension("json");
        write_metadata(&sheet, &output, &json_path)?;
        info!("Generated {}", json_path.display());
        Some(json_path)
    } else {
        None
    };

    Ok(SplitSummary {
        sprite_count: sheet.sprites.len(),
        cell_width: sheet.cell_width,
        cell_height: sheet.cell_height,
        sheet_width: sheet.width(),
        sheet_height: sheet.height(),
        output,
        metadata,
    })
}
