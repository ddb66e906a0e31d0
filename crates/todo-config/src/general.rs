//! General application configuration.

use serde::{Deserialize, Serialize};

/// Output format used when `--format` is not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatPreference {
    /// Human-readable messages.
    #[default]
    Text,
    /// Pretty-printed JSON responses.
    Json,
    /// Single-line JSON responses.
    Raw,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default output format for command responses.
    #[serde(default)]
    pub default_format: FormatPreference,
}
