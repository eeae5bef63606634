//! Clip extractor implementation

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{error, info, info_span, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{ClipJob, ClipOutcome, FailurePolicy, TimeRange};
use crate::engine::ExtractOptions;
use crate::error::{SplitError, SplitResult};
use crate::ports::{FsPort, TrimPort, TrimRequest};
use crate::utils::path::clip_path;

/// Turns a list of ranges into numbered clip files
pub struct ClipExtractor {
    trim_port: Arc<dyn TrimPort>,
    fs_port: Arc<dyn FsPort>,
    options: ExtractOptions,
}

impl ClipExtractor {
    /// Create a new extractor with injected ports
    pub fn new(
        trim_port: Arc<dyn TrimPort>,
        fs_port: Arc<dyn FsPort>,
        options: ExtractOptions,
    ) -> Self {
        Self {
            trim_port,
            fs_port,
            options,
        }
    }

    /// Number each range and assign its output path
    pub fn plan(output_folder: &Path, ranges: &[TimeRange]) -> Vec<ClipJob> {
        ranges
            .iter()
            .enumerate()
            .map(|(i, range)| ClipJob {
                index: i + 1,
                range: range.clone(),
                output_path: clip_path(output_folder, i + 1),
            })
            .collect()
    }

    /// Command lines that a real run would issue, one per range
    pub fn describe(&self, video_path: &str, output_folder: &Path, ranges: &[TimeRange]) -> Vec<String> {
        Self::plan(output_folder, ranges)
            .iter()
            .map(|job| self.trim_port.describe(&request_for(video_path, job)))
            .collect()
    }

    /// Create the output folder and extract every range into it.
    ///
    /// Outcomes come back in range order. Under [`FailurePolicy::Abort`] the first
    /// failing clip is returned as an error; clips written before it stay on disk.
    pub fn extract(
        &self,
        video_path: &str,
        output_folder: &Path,
        ranges: &[TimeRange],
    ) -> SplitResult<Vec<ClipOutcome>> {
        self.fs_port.create_directory(output_folder)?;

        let jobs = Self::plan(output_folder, ranges);
        if jobs.is_empty() {
            info!("No intervals to extract");
            return Ok(Vec::new());
        }

        let workers = self.options.workers.max(1);
        if workers == 1 || jobs.len() == 1 {
            self.extract_sequential(video_path, &jobs)
        } else {
            self.extract_pooled(video_path, &jobs, workers)
        }
    }

    fn extract_sequential(&self, video_path: &str, jobs: &[ClipJob]) -> SplitResult<Vec<ClipOutcome>> {
        let mut outcomes = Vec::with_capacity(jobs.len());

        for job in jobs {
            match self.run_job(video_path, job) {
                Ok(()) => outcomes.push(ClipOutcome::saved(job)),
                Err(e) => match self.options.failure_policy {
                    FailurePolicy::Abort => return Err(e.into()),
                    FailurePolicy::Continue => outcomes.push(ClipOutcome::failed(job, &e)),
                },
            }
        }

        Ok(outcomes)
    }

    fn extract_pooled(
        &self,
        video_path: &str,
        jobs: &[ClipJob],
        workers: usize,
    ) -> SplitResult<Vec<ClipOutcome>> {
        info!("Extracting {} clips with {} workers", jobs.len(), workers);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| SplitError::WorkerPool {
                message: e.to_string(),
            })?;

        let abort = self.options.failure_policy == FailurePolicy::Abort;
        let stop = AtomicBool::new(false);

        // `None` marks clips never started because an earlier one failed
        let results: Vec<Option<Result<(), DomainError>>> = pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    if stop.load(Ordering::SeqCst) {
                        return None;
                    }
                    let result = self.run_job(video_path, job);
                    if result.is_err() && abort {
                        stop.store(true, Ordering::SeqCst);
                    }
                    Some(result)
                })
                .collect()
        });

        let mut outcomes = Vec::with_capacity(jobs.len());
        for (job, result) in jobs.iter().zip(results) {
            match result {
                Some(Ok(())) => outcomes.push(ClipOutcome::saved(job)),
                Some(Err(e)) => {
                    if abort {
                        return Err(e.into());
                    }
                    outcomes.push(ClipOutcome::failed(job, &e));
                }
                None => warn!("Clip {} skipped after an earlier failure", job.index),
            }
        }

        Ok(outcomes)
    }

    fn run_job(&self, video_path: &str, job: &ClipJob) -> Result<(), DomainError> {
        let span = info_span!(
            "clip",
            clip = job.index,
            start = %job.range.start,
            end = %job.range.end
        );
        let _guard = span.enter();

        match self.trim_port.trim(&request_for(video_path, job)) {
            Ok(()) => {
                if self.options.announce {
                    println!("Saved: {}", job.output_path.display());
                }
                info!(output = %job.output_path.display(), "Clip saved");
                Ok(())
            }
            Err(e) => {
                error!("{}", e);
                Err(e)
            }
        }
    }
}

fn request_for<'a>(video_path: &'a str, job: &'a ClipJob) -> TrimRequest<'a> {
    TrimRequest {
        clip: job.index,
        input: video_path,
        output: &job.output_path,
        start: &job.range.start,
        end: &job.range.end,
    }
}
