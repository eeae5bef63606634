// Split interactor - Orchestrates the parse-then-extract use case

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use tracing::info;

use crate::config::SplitConfig;
use crate::domain::model::{ClipOutcome, ParsedIntervals};
use crate::engine::{ClipExtractor, ExtractOptions};
use crate::error::SplitResult;
use crate::output::BatchReport;
use crate::parser;
use crate::ports::{FsPort, TrimPort};
use crate::utils::time::format_duration;

/// Interactor for the split use case
pub struct SplitInteractor {
    trim_port: Arc<dyn TrimPort>,
    fs_port: Arc<dyn FsPort>,
    config: SplitConfig,
}

impl SplitInteractor {
    /// Create new split interactor with injected ports
    pub fn new(trim_port: Arc<dyn TrimPort>, fs_port: Arc<dyn FsPort>, config: SplitConfig) -> Self {
        Self {
            trim_port,
            fs_port,
            config,
        }
    }

    /// Read the configured interval file
    pub fn parse(&self) -> SplitResult<ParsedIntervals> {
        info!(
            "Reading interval file: {}",
            self.config.interval_file.display()
        );
        Ok(parser::parse_with_mode(
            &self.config.interval_file,
            self.config.parse_mode,
        )?)
    }

    /// Extract every parsed range, or only plan them on a dry run
    pub fn extract(&self, parsed: &ParsedIntervals, announce: bool) -> SplitResult<BatchReport> {
        let started_at = Local::now();
        let timer = Instant::now();
        let result = &parsed.result;

        let extractor = ClipExtractor::new(
            Arc::clone(&self.trim_port),
            Arc::clone(&self.fs_port),
            ExtractOptions {
                failure_policy: self.config.failure_policy,
                workers: self.config.worker_count(),
                announce,
            },
        );

        let clips = if self.config.dry_run {
            for command in
                extractor.describe(&result.video_path, &self.config.output_folder, &result.ranges)
            {
                info!("Dry run: {}", command);
            }
            ClipExtractor::plan(&self.config.output_folder, &result.ranges)
                .iter()
                .map(ClipOutcome::saved)
                .collect()
        } else {
            extractor.extract(&result.video_path, &self.config.output_folder, &result.ranges)?
        };

        let elapsed = timer.elapsed();
        info!(
            "Processed {} interval(s) in {}",
            clips.len(),
            format_duration(elapsed)
        );

        Ok(BatchReport {
            video_path: result.video_path.clone(),
            output_folder: self.config.output_folder.clone(),
            started_at,
            elapsed_ms: elapsed.as_millis(),
            dry_run: self.config.dry_run,
            clips,
            warnings: parsed.warnings.clone(),
        })
    }

    /// Parse and extract in one go
    pub fn run(&self, announce: bool) -> SplitResult<BatchReport> {
        let parsed = self.parse()?;
        self.extract(&parsed, announce)
    }
}
