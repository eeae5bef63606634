//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::Overrides;

/// Arguments for the split command
#[derive(Args, Debug, Clone, Default)]
pub struct SplitArgs {
    /// Interval file path
    #[arg(short, long, env = "CLIPSPLIT_INTERVALS")]
    pub intervals: Option<PathBuf>,

    /// Folder clips are written into
    #[arg(short, long, env = "CLIPSPLIT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// ffmpeg binary
    #[arg(long, env = "CLIPSPLIT_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// Concurrent ffmpeg runs (0 = one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Keep extracting after a clip fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Report lines that carry no interval
    #[arg(long)]
    pub strict: bool,

    /// Print the ffmpeg commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

/// Split arguments resolved from the environment alone
#[derive(Parser, Debug)]
struct DefaultSplit {
    #[command(flatten)]
    args: SplitArgs,
}

impl SplitArgs {
    /// Arguments used when no subcommand is given; only env variables apply
    pub fn from_env() -> Self {
        DefaultSplit::parse_from([env!("CARGO_PKG_NAME")]).args
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            interval_file: self.intervals.clone(),
            output_folder: self.output.clone(),
            ffmpeg_path: self.ffmpeg.clone(),
            jobs: self.jobs,
            continue_on_error: self.continue_on_error,
            strict: self.strict,
            dry_run: self.dry_run,
        }
    }
}

/// Arguments for the parse command
#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Interval file path
    #[arg(short, long, env = "CLIPSPLIT_INTERVALS")]
    pub intervals: Option<PathBuf>,

    /// Report lines that carry no interval
    #[arg(long)]
    pub strict: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ParseArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            interval_file: self.intervals.clone(),
            strict: self.strict,
            ..Overrides::default()
        }
    }
}
