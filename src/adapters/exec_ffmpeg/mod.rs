//! FFmpeg execution adapter
//!
//! Runs the `ffmpeg` binary once per clip in stream-copy mode.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::domain::errors::DomainError;
use crate::ports::{TrimPort, TrimRequest};

/// Default binary looked up on PATH
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Longest stderr excerpt attached to an error
const STDERR_EXCERPT: usize = 2000;

/// FFmpeg-based trim adapter
#[derive(Debug, Clone)]
pub struct FfmpegTrimAdapter {
    binary: String,
}

impl FfmpegTrimAdapter {
    /// Create new FFmpeg adapter using the given binary
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Arguments for one stream-copy trim, in invocation order
    pub fn build_args(request: &TrimRequest<'_>) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-nostdin", "-i"]
            .iter()
            .map(OsString::from)
            .collect();
        args.push(request.input.into());
        args.push("-ss".into());
        args.push(request.start.into());
        args.push("-to".into());
        args.push(request.end.into());
        args.push("-c".into());
        args.push("copy".into());
        args.push(request.output.as_os_str().to_os_string());
        args.push("-y".into());
        args
    }

    fn tool_error(request: &TrimRequest<'_>, message: String) -> DomainError {
        DomainError::ExternalTool {
            clip: request.clip,
            output: request.output.display().to_string(),
            message,
        }
    }
}

impl Default for FfmpegTrimAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG)
    }
}

impl TrimPort for FfmpegTrimAdapter {
    fn trim(&self, request: &TrimRequest<'_>) -> Result<(), DomainError> {
        debug!(command = %self.describe(request), "Running ffmpeg");

        let output = Command::new(&self.binary)
            .args(Self::build_args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                Self::tool_error(request, format!("failed to run {}: {}", self.binary, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let excerpt: String = stderr.chars().take(STDERR_EXCERPT).collect();
            let message = if excerpt.is_empty() {
                format!("ffmpeg exited with {}", output.status)
            } else {
                format!("ffmpeg exited with {}: {}", output.status, excerpt)
            };
            return Err(Self::tool_error(request, message));
        }

        trace!(clip = request.clip, "ffmpeg finished");
        Ok(())
    }

    fn describe(&self, request: &TrimRequest<'_>) -> String {
        let mut parts = vec![self.binary.clone()];
        parts.extend(
            Self::build_args(request)
                .iter()
                .map(|a| a.to_string_lossy().into_owned()),
        );
        parts.join(" ")
    }
}
