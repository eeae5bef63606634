// TOML config adapter - Configuration loaded from TOML files

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::model::{FailurePolicy, ParseMode};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "clipsplit.toml";

/// Settings from the `[split]` table; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub interval_file: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub ffmpeg_path: Option<String>,
    pub jobs: Option<usize>,
    pub failure_policy: Option<FailurePolicy>,
    pub parse_mode: Option<ParseMode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDocument {
    #[serde(default)]
    split: FileSettings,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse settings from TOML text
    pub fn parse_str(content: &str) -> Result<FileSettings, DomainError> {
        let document: ConfigDocument = toml::from_str(content)
            .map_err(|e| DomainError::Config(format!("Failed to parse TOML config: {}", e)))?;
        Ok(document.split)
    }

    /// Load settings from a file that must exist
    pub fn load(file_path: &Path) -> Result<FileSettings, DomainError> {
        if !file_path.exists() {
            return Err(DomainError::Config(format!(
                "Config file does not exist: {}",
                file_path.display()
            )));
        }

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            DomainError::Config(format!(
                "Failed to read config file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let settings = Self::parse_str(&content)?;
        info!("Loaded configuration from {}", file_path.display());
        Ok(settings)
    }

    /// Load the explicit config file, or the default one when it is present
    pub fn discover(explicit: Option<&Path>) -> Result<Option<FileSettings>, DomainError> {
        match explicit {
            Some(path) => Self::load(path).map(Some),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}
