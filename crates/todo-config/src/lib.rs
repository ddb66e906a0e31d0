//! # todo-config
//!
//! Layered configuration loading for `todo` using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TODO_*` prefix, `__` as separator)
//! 2. Project-level `.todo.toml` in the working directory
//! 3. User-level `~/.config/todo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TODO_STORAGE__FILE` -> `storage.file`, `TODO_SHELL__PROMPT` -> `shell.prompt`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use todo_config::TodoConfig;
//!
//! let config = TodoConfig::load_with_dotenv().expect("config");
//! println!("todo file: {}", config.storage.file);
//! ```

mod error;
mod general;
mod shell;
mod storage;

pub use error::ConfigError;
pub use general::{FormatPreference, GeneralConfig};
pub use shell::ShellConfig;
pub use storage::{DEFAULT_TODO_FILE, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = ".todo.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TodoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed and
    /// `ConfigError::InvalidValue` if the merged values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the working directory (if present) before building
    /// the figment. This is the entry point used by the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TODO_").split("__"))
    }

    /// Check cross-field constraints after extraction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("todo").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TodoConfig::default();
        assert_eq!(config.storage.file, DEFAULT_TODO_FILE);
        assert!(config.storage.create_missing);
        assert_eq!(config.shell.prompt, "> ");
        assert!(config.shell.show_list);
        assert_eq!(config.general.default_format, FormatPreference::Text);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: TodoConfig = TodoConfig::figment().extract()?;
            assert_eq!(config.storage.file, DEFAULT_TODO_FILE);
            assert!(config.validate().is_ok());
            Ok(())
        });
    }
}
