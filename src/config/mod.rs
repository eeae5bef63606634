//! Run configuration
//!
//! Precedence is CLI flag > environment variable > TOML file > defaults. Clap
//! resolves the first two; [`SplitConfig::merge`] layers the result over the
//! file values.

use std::path::PathBuf;

use serde::Serialize;

use crate::adapters::exec_ffmpeg::DEFAULT_FFMPEG;
use crate::adapters::toml_config::FileSettings;
use crate::domain::errors::DomainError;
use crate::domain::model::{FailurePolicy, ParseMode};

/// Interval file read when nothing else is configured
pub const DEFAULT_INTERVAL_FILE: &str = "continuous_intervals.txt";
/// Folder clips are written into when nothing else is configured
pub const DEFAULT_OUTPUT_FOLDER: &str = "output_clips";

/// Everything a split run needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitConfig {
    pub interval_file: PathBuf,
    pub output_folder: PathBuf,
    pub ffmpeg_path: String,
    /// Worker count; 1 is sequential, 0 means one per CPU
    pub jobs: usize,
    pub failure_policy: FailurePolicy,
    pub parse_mode: ParseMode,
    pub dry_run: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            interval_file: PathBuf::from(DEFAULT_INTERVAL_FILE),
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            ffmpeg_path: DEFAULT_FFMPEG.to_string(),
            jobs: 1,
            failure_policy: FailurePolicy::Abort,
            parse_mode: ParseMode::Lenient,
            dry_run: false,
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub interval_file: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub ffmpeg_path: Option<String>,
    pub jobs: Option<usize>,
    pub continue_on_error: bool,
    pub strict: bool,
    pub dry_run: bool,
}

impl SplitConfig {
    /// Create a config for the given interval file and output folder
    pub fn new(interval_file: impl Into<PathBuf>, output_folder: impl Into<PathBuf>) -> Self {
        Self {
            interval_file: interval_file.into(),
            output_folder: output_folder.into(),
            ..Self::default()
        }
    }

    /// Layer file settings and then overrides on top of the defaults
    pub fn merge(file: Option<FileSettings>, overrides: Overrides) -> Result<Self, DomainError> {
        let mut config = Self::default();

        if let Some(file) = file {
            if let Some(path) = file.interval_file {
                config.interval_file = path;
            }
            if let Some(path) = file.output_folder {
                config.output_folder = path;
            }
            if let Some(ffmpeg) = file.ffmpeg_path {
                config.ffmpeg_path = ffmpeg;
            }
            if let Some(jobs) = file.jobs {
                config.jobs = jobs;
            }
            if let Some(policy) = file.failure_policy {
                config.failure_policy = policy;
            }
            if let Some(mode) = file.parse_mode {
                config.parse_mode = mode;
            }
        }

        if let Some(path) = overrides.interval_file {
            config.interval_file = path;
        }
        if let Some(path) = overrides.output_folder {
            config.output_folder = path;
        }
        if let Some(ffmpeg) = overrides.ffmpeg_path {
            config.ffmpeg_path = ffmpeg;
        }
        if let Some(jobs) = overrides.jobs {
            config.jobs = jobs;
        }
        if overrides.continue_on_error {
            config.failure_policy = FailurePolicy::Continue;
        }
        if overrides.strict {
            config.parse_mode = ParseMode::Strict;
        }
        config.dry_run = overrides.dry_run;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot produce a run
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.interval_file.as_os_str().is_empty() {
            return Err(DomainError::Config("interval_file cannot be empty".to_string()));
        }
        if self.output_folder.as_os_str().is_empty() {
            return Err(DomainError::Config("output_folder cannot be empty".to_string()));
        }
        if self.ffmpeg_path.trim().is_empty() {
            return Err(DomainError::Config("ffmpeg_path cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Resolved worker count
    pub fn worker_count(&self) -> usize {
        if self.jobs == 0 {
            num_cpus::get()
        } else {
            self.jobs
        }
    }
}
