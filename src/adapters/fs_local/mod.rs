// Local file system adapter

use std::path::Path;

use tracing::debug;

use crate::domain::errors::DomainError;
use crate::ports::FsPort;

/// File system adapter backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FsPort for LocalFsAdapter {
    fn create_directory(&self, dir_path: &Path) -> Result<(), DomainError> {
        std::fs::create_dir_all(dir_path).map_err(|e| DomainError::OutputDirectory {
            path: dir_path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!("Output folder ready: {}", dir_path.display());
        Ok(())
    }
}
