// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::utils::time::timestamp_to_seconds;

/// A clip boundary pair exactly as it appeared in the interval file.
///
/// Both values are kept as raw `H:MM:SS` / `HH:MM:SS` strings and handed to the
/// trim tool untouched. No ordering between `start` and `end` is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    /// Create a new time range from raw timestamps
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Start timestamp in whole seconds, if it is a well-formed timestamp
    pub fn start_seconds(&self) -> Option<u64> {
        timestamp_to_seconds(&self.start)
    }

    /// End timestamp in whole seconds, if it is a well-formed timestamp
    pub fn end_seconds(&self) -> Option<u64> {
        timestamp_to_seconds(&self.end)
    }

    /// True when both ends parse and the end does not come after the start
    pub fn is_non_increasing(&self) -> bool {
        match (self.start_seconds(), self.end_seconds()) {
            (Some(start), Some(end)) => end <= start,
            _ => false,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', '{}')", self.start, self.end)
    }
}

/// Render a range list the way the interval file writes it
pub fn format_ranges(ranges: &[TimeRange]) -> String {
    let items: Vec<String> = ranges.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Source video path plus its ranges, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub video_path: String,
    pub ranges: Vec<TimeRange>,
}

impl ParseResult {
    pub fn new(video_path: impl Into<String>, ranges: Vec<TimeRange>) -> Self {
        Self {
            video_path: video_path.into(),
            ranges,
        }
    }

    /// Number of parsed ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True when no line carried a range
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// How much the parser reports about lines it skips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Skip unmatched lines silently
    #[default]
    Lenient,
    /// Skip unmatched lines but collect a warning for each
    Strict,
}

/// Reason a strict parse flagged a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The line carries no `('start', 'end')` pair
    NoIntervalFound,
    /// The pair was extracted but its end is not after its start
    NonIncreasingRange,
}

/// Diagnostic for a single line of the interval file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number in the interval file
    pub line: usize,
    pub text: String,
    pub kind: WarningKind,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            WarningKind::NoIntervalFound => "no interval found",
            WarningKind::NonIncreasingRange => "end is not after start",
        };
        write!(f, "line {}: {}: {}", self.line, reason, self.text)
    }
}

/// Parse result together with any strict-mode diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedIntervals {
    #[serde(flatten)]
    pub result: ParseResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
}

/// What the extractor does when one clip fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the batch at the first failing clip
    #[default]
    Abort,
    /// Attempt every clip and report failures at the end
    Continue,
}

/// One planned trim invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipJob {
    /// 1-based clip number, also used in the file name
    pub index: usize,
    pub range: TimeRange,
    pub output_path: PathBuf,
}

/// Result of a single clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipOutcome {
    pub index: usize,
    pub range: TimeRange,
    pub output_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClipOutcome {
    pub fn saved(job: &ClipJob) -> Self {
        Self {
            index: job.index,
            range: job.range.clone(),
            output_path: job.output_path.clone(),
            error: None,
        }
    }

    pub fn failed(job: &ClipJob, error: &DomainError) -> Self {
        Self {
            index: job.index,
            range: job.range.clone(),
            output_path: job.output_path.clone(),
            error: Some(error.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}
