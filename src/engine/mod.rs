//! Clip extraction engine

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::adapters::exec_ffmpeg::FfmpegTrimAdapter;
use crate::adapters::fs_local::LocalFsAdapter;
use crate::domain::model::{FailurePolicy, TimeRange};
use crate::error::SplitResult;

pub mod extractor;

pub use extractor::ClipExtractor;

/// Extraction engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Stop at the first failure or keep going
    pub failure_policy: FailurePolicy,
    /// Concurrent trim invocations; 1 keeps the strict sequential order
    pub workers: usize,
    /// Print a `Saved: <path>` line per written clip
    pub announce: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Abort,
            workers: 1,
            announce: true,
        }
    }
}

/// Extract every range of `video_path` into `output_folder/clip_<n>.mp4`
/// with the `ffmpeg` found on PATH, one clip at a time, stopping at the first failure.
pub fn extract_clips(video_path: &str, ranges: &[TimeRange], output_folder: &Path) -> SplitResult<()> {
    let extractor = ClipExtractor::new(
        Arc::new(FfmpegTrimAdapter::default()),
        Arc::new(LocalFsAdapter::new()),
        ExtractOptions::default(),
    );
    extractor.extract(video_path, output_folder, ranges)?;
    Ok(())
}
