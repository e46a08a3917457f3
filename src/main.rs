use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use autosprite::cli::{CliArgs, Command, RenameArgs, SplitArgs};
use autosprite::config::{LoadedConfig, merge_rename_args, merge_split_args};
use autosprite::error::exit_code;
use autosprite::rename::{RenameRules, apply_renames, plan_renames};
use autosprite::split;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    match cli.command {
        Command::Split(args) => run_split(&args),
        Command::Rename(args) => run_rename(&args),
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<Option<LoadedConfig>> {
    path.map(|p| {
        LoadedConfig::load(p).with_context(|| format!("failed to load config: {}", p.display()))
    })
    .transpose()
}

fn run_split(args: &SplitArgs) -> Result<()> {
    let loaded = load_config(args.config.as_deref())?;
    let job = merge_split_args(args, loaded.as_ref())?;

    init_logging(args.verbose);
    info!("Autosprite v{}", env!("CARGO_PKG_VERSION"));

    let summary = split::run(&job)?;

    info!(
        "Packed {} sprites into {}x{}px",
        summary.sprite_count, summary.sheet_height, summary.sheet_width
    );
    info!("Done!");

    Ok(())
}

fn run_rename(args: &RenameArgs) -> Result<()> {
    let loaded = load_config(args.config.as_deref())?;

    init_logging(args.verbose);

    let job = merge_rename_args(args, loaded.as_ref())?;

    let rules = RenameRules::from_config(&job.rules)?;
    let plans = plan_renames(&job.pattern, &rules)?;
    info!("{} files to rename", plans.len());

    let renamed = apply_renames(&plans, job.dry_run)?;
    if job.dry_run {
        info!("Dry run: {} files would be renamed", renamed);
    } else {
        info!("Renamed {} files", renamed);
    }

    Ok(())
}
