use std::path::PathBuf;

use todo_config::TodoConfig;

use crate::cli::{GlobalFlags, OutputFormat};

/// Everything the driver needs to know about its environment, resolved once
/// at startup from config and flags and passed down explicitly.
#[derive(Clone, Debug)]
pub struct Settings {
    pub file: PathBuf,
    pub create_missing: bool,
    pub format: OutputFormat,
    pub prompt: String,
    pub show_list: bool,
    pub version: &'static str,
}

impl Settings {
    /// Flags win over config values.
    #[must_use]
    pub fn resolve(config: &TodoConfig, flags: &GlobalFlags, version: &'static str) -> Self {
        Self {
            file: flags
                .file
                .clone()
                .unwrap_or_else(|| config.storage.path()),
            create_missing: config.storage.create_missing,
            format: flags
                .format
                .unwrap_or_else(|| config.general.default_format.into()),
            prompt: config.shell.prompt.clone(),
            show_list: config.shell.show_list,
            version,
        }
    }
}
