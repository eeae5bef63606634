// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Interval file does not exist
    IntervalFileNotFound(String),
    /// Interval file exists but could not be read
    IntervalFileUnreadable { path: String, reason: String },
    /// Output folder could not be created
    OutputDirectory { path: String, reason: String },
    /// External trim tool failed for one clip
    ExternalTool {
        clip: usize,
        output: String,
        message: String,
    },
    /// Invalid configuration value or file
    Config(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::IntervalFileNotFound(path) => {
                write!(f, "Interval file not found: {}", path)
            }
            DomainError::IntervalFileUnreadable { path, reason } => {
                write!(f, "Failed to read interval file {}: {}", path, reason)
            }
            DomainError::OutputDirectory { path, reason } => {
                write!(f, "Failed to create output folder {}: {}", path, reason)
            }
            DomainError::ExternalTool {
                clip,
                output,
                message,
            } => write!(f, "Clip {} ({}) failed: {}", clip, output, message),
            DomainError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
