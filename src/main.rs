//! clipsplit
//!
//! Splits a source video into numbered clips, one per interval listed in an
//! interval file, using ffmpeg stream copy.
//!
//! # Usage
//!
//! ```bash
//! clipsplit
//! clipsplit split --intervals continuous_intervals.txt --output output_clips
//! clipsplit parse --intervals continuous_intervals.txt --strict
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use clipsplit::cli::args::SplitArgs;
use clipsplit::cli::{commands, Cli, Commands};
use clipsplit::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Main entry point for the clipsplit application
fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let logging = LoggingConfig {
        level: LogLevel::parse(&cli.log_level)?,
        format: LogFormat::parse(&cli.log_format)?,
    };
    logging.initialize()?;

    info!("Starting clipsplit");

    let config_file = cli.config.as_deref();

    // Execute the requested command
    match cli.command {
        Some(Commands::Split(args)) => commands::split(args, config_file)?,
        Some(Commands::Parse(args)) => commands::parse(args, config_file)?,
        None => commands::split(SplitArgs::from_env(), config_file)?,
    }

    info!("clipsplit completed successfully");
    Ok(())
}
