//! Interval file parser
//!
//! The first line of an interval file names the source video. Every later line
//! is searched for a `('H:MM:SS', 'H:MM:SS')` pair; lines without one are skipped.
//! Only the first pair on a line is used and pairs keep their file order, which
//! later becomes the clip numbering.

use std::io::ErrorKind;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::domain::errors::DomainError;
use crate::domain::model::{
    ParseMode, ParseResult, ParseWarning, ParsedIntervals, TimeRange, WarningKind,
};

static INTERVAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\('(\d{1,2}:\d{2}:\d{2})',\s*'(\d{1,2}:\d{2}:\d{2})'\)")
        .expect("interval pattern is valid")
});

// `\r\n`, lone `\r` and `\n` all end a line
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// Find the first interval pair on a line
pub fn scan_line(line: &str) -> Option<TimeRange> {
    INTERVAL_PATTERN
        .captures(line)
        .map(|caps| TimeRange::new(&caps[1], &caps[2]))
}

/// Parse an interval file leniently
pub fn parse(file_path: &Path) -> Result<ParseResult, DomainError> {
    parse_with_mode(file_path, ParseMode::Lenient).map(|parsed| parsed.result)
}

/// Parse an interval file, collecting warnings when `mode` is strict
pub fn parse_with_mode(file_path: &Path, mode: ParseMode) -> Result<ParsedIntervals, DomainError> {
    let contents = std::fs::read_to_string(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::IntervalFileNotFound(file_path.display().to_string()),
        _ => DomainError::IntervalFileUnreadable {
            path: file_path.display().to_string(),
            reason: e.to_string(),
        },
    })?;

    let parsed = parse_str(&contents, mode);
    debug!(
        "Parsed {} interval(s) from {}",
        parsed.result.len(),
        file_path.display()
    );
    Ok(parsed)
}

/// Parse interval file contents already in memory
pub fn parse_str(contents: &str, mode: ParseMode) -> ParsedIntervals {
    let mut lines = LINE_BREAK.split(contents);
    let video_path = lines.next().map(str::trim).unwrap_or_default().to_string();

    let mut ranges = Vec::new();
    let mut warnings = Vec::new();

    // Data lines start at line 2
    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        match scan_line(line) {
            Some(range) => {
                if mode == ParseMode::Strict && range.is_non_increasing() {
                    warnings.push(ParseWarning {
                        line: line_number,
                        text: line.trim().to_string(),
                        kind: WarningKind::NonIncreasingRange,
                    });
                }
                ranges.push(range);
            }
            None => {
                if mode == ParseMode::Strict && !line.trim().is_empty() {
                    warnings.push(ParseWarning {
                        line: line_number,
                        text: line.trim().to_string(),
                        kind: WarningKind::NoIntervalFound,
                    });
                }
            }
        }
    }

    if !warnings.is_empty() {
        debug!("Strict parse flagged {} line(s)", warnings.len());
    }

    ParsedIntervals {
        result: ParseResult::new(video_path, ranges),
        warnings,
    }
}
