// Ports - Interface definitions (contracts)

use std::path::Path;

use crate::domain::errors::DomainError;

/// A single stream-copy trim request handed to the external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimRequest<'a> {
    /// 1-based clip number, carried for error reporting
    pub clip: usize,
    pub input: &'a str,
    pub output: &'a Path,
    pub start: &'a str,
    pub end: &'a str,
}

/// Port for the external media-trim tool
///
/// Implementations copy streams without re-encoding, overwrite any existing
/// output without prompting and keep the tool's own output off the console.
pub trait TrimPort: Send + Sync {
    /// Run one trim to completion
    fn trim(&self, request: &TrimRequest<'_>) -> Result<(), DomainError>;

    /// Human-readable command line for a request, used by dry runs
    fn describe(&self, request: &TrimRequest<'_>) -> String;
}

/// Port for file system operations
pub trait FsPort: Send + Sync {
    /// Create directory (including parent directories); succeeds if it already exists
    fn create_directory(&self, dir_path: &Path) -> Result<(), DomainError>;
}
