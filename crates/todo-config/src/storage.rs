//! Storage file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// File name used when nothing else is configured.
pub const DEFAULT_TODO_FILE: &str = "todos.json";

fn default_file() -> String {
    DEFAULT_TODO_FILE.to_string()
}

const fn default_create_missing() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding the list, relative to the working directory.
    #[serde(default = "default_file")]
    pub file: String,

    /// Treat a missing file as an empty list. When `false`, a missing file
    /// is an error at startup.
    #[serde(default = "default_create_missing")]
    pub create_missing: bool,
}

impl StorageConfig {
    #[must_use]
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.file)
    }

    /// Reject values the core would refuse later.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `file` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.file".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            create_missing: default_create_missing(),
        }
    }
}
