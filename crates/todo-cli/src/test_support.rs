//! Shared fixtures for unit tests.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::settings::Settings;

pub fn settings_for(file: PathBuf) -> Settings {
    Settings {
        file,
        create_missing: true,
        format: OutputFormat::Text,
        prompt: "> ".to_string(),
        show_list: false,
        version: "0.0.0",
    }
}

/// An empty context backed by `todos.json` inside a fresh temp dir.
pub fn temp_context() -> (TempDir, AppContext) {
    let dir = tempfile::tempdir().expect("temp dir");
    let ctx = AppContext::open(&settings_for(dir.path().join("todos.json"))).expect("open");
    (dir, ctx)
}
