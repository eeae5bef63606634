//! Batch reporting

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::model::{
    format_ranges, ClipOutcome, ParseResult, ParseWarning, ParsedIntervals,
};

/// Summary of one split run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub video_path: String,
    pub output_folder: PathBuf,
    pub started_at: DateTime<Local>,
    pub elapsed_ms: u128,
    pub dry_run: bool,
    pub clips: Vec<ClipOutcome>,
    /// Lines a strict parse flagged
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
}

impl BatchReport {
    /// Clips written successfully
    pub fn saved(&self) -> impl Iterator<Item = &ClipOutcome> {
        self.clips.iter().filter(|c| c.succeeded())
    }

    /// Clips whose trim failed
    pub fn failed(&self) -> impl Iterator<Item = &ClipOutcome> {
        self.clips.iter().filter(|c| !c.succeeded())
    }

    pub fn saved_count(&self) -> usize {
        self.saved().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Startup echo of what was parsed
pub fn display_parse_result(result: &ParseResult) {
    println!("Video path: {}", result.video_path);
    println!("Time ranges: {}", format_ranges(&result.ranges));
}

/// Strict-mode warnings, one per line
pub fn display_warnings(parsed: &ParsedIntervals) {
    for warning in &parsed.warnings {
        println!("Warning: {}", warning);
    }
}

/// Failed clips, printed after a batch that continued past errors
pub fn display_failures(report: &BatchReport) {
    if report.is_success() {
        return;
    }
    println!(
        "Failed: {} of {} clips",
        report.failed_count(),
        report.clips.len()
    );
    for clip in report.failed() {
        if let Some(error) = &clip.error {
            println!("  {}", error);
        }
    }
}
