//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::TomlConfigAdapter;
use crate::app::AppContainer;
use crate::cli::args::{ParseArgs, SplitArgs};
use crate::config::{Overrides, SplitConfig};
use crate::error::SplitError;
use crate::output::{display_failures, display_parse_result, display_warnings};
use crate::parser;

/// Execute the split command
pub fn split(args: SplitArgs, config_file: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_file, args.overrides())?;

    info!("Starting split operation");
    info!("Intervals: {}", config.interval_file.display());
    info!("Output: {}", config.output_folder.display());
    info!("Workers: {}", config.worker_count());

    let container = AppContainer::new(config);
    let interactor = container.split_interactor();

    let parsed = interactor.parse().context("Failed to parse interval file")?;
    if !args.json {
        display_parse_result(&parsed.result);
        display_warnings(&parsed);
    }

    let report = interactor
        .extract(&parsed, !args.json)
        .context("Failed to extract clips")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize batch report to JSON")?;
        println!("{}", json);
    } else if report.dry_run {
        for clip in &report.clips {
            println!("Would save: {}", clip.output_path.display());
        }
    } else {
        display_failures(&report);
    }

    if !report.is_success() {
        warn!("{} clip(s) failed", report.failed_count());
        return Err(SplitError::ClipsFailed {
            failed: report.failed_count(),
            total: report.clips.len(),
        }
        .into());
    }

    info!(
        "Split operation completed: {} clip(s) in {}",
        report.saved_count(),
        report.output_folder.display()
    );
    Ok(())
}

/// Execute the parse command
pub fn parse(args: ParseArgs, config_file: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_file, args.overrides())?;

    info!("Starting parse operation");
    let parsed = parser::parse_with_mode(&config.interval_file, config.parse_mode)
        .context("Failed to parse interval file")?;

    if args.json {
        let json = serde_json::to_string_pretty(&parsed)
            .context("Failed to serialize parse result to JSON")?;
        println!("{}", json);
    } else {
        display_parse_result(&parsed.result);
        display_warnings(&parsed);
    }

    info!("Parse operation completed: {} interval(s)", parsed.result.len());
    Ok(())
}

fn resolve_config(config_file: Option<&Path>, overrides: Overrides) -> Result<SplitConfig> {
    let file = TomlConfigAdapter::discover(config_file).context("Failed to load configuration")?;
    let config = SplitConfig::merge(file, overrides).context("Invalid configuration")?;
    Ok(config)
}
