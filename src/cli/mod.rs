//! CLI module for clipsplit
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// clipsplit
///
/// Splits a video into numbered clips from an interval file, using ffmpeg
/// stream copy for each interval.
#[derive(Parser, Debug)]
#[command(name = "clipsplit")]
#[command(about = "Split a video into clips listed in an interval file")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Log output format: pretty, compact or json
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: String,

    /// TOML config file (defaults to ./clipsplit.toml when present)
    #[arg(long, global = true, env = "CLIPSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to execute; `split` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract one clip per interval
    Split(args::SplitArgs),
    /// Parse the interval file and print what was found
    Parse(args::ParseArgs),
}
