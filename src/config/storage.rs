//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

const APP_DIR_NAME: &str = "conflict-worksheet";

/// Where the session history is persisted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Data directory; defaults to the platform data dir
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the directory the file store should use
    ///
    /// Falls back to the current directory when the platform reports no
    /// data directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR_NAME),
        }
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.data_dir {
            Some(dir) if dir.as_os_str().is_empty() => Err(ValidationError::InvalidDataDir),
            _ => Ok(()),
        }
    }
}
