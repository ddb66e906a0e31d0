use std::path::PathBuf;

use clap::ValueEnum;
use todo_config::FormatPreference;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Raw,
}

impl From<FormatPreference> for OutputFormat {
    fn from(value: FormatPreference) -> Self {
        match value {
            FormatPreference::Text => Self::Text,
            FormatPreference::Json => Self::Json,
            FormatPreference::Raw => Self::Raw,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub file: Option<PathBuf>,
    pub interactive: bool,
    pub quiet: bool,
    pub verbose: bool,
}
