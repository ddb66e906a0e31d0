use std::path::{Path, PathBuf};

use anyhow::Context;
use todo_core::TodoList;

use crate::settings::Settings;

/// The loaded list together with the file it is persisted to.
pub struct AppContext {
    pub list: TodoList,
    path: PathBuf,
}

impl AppContext {
    /// Load the list named by `settings.file`.
    ///
    /// A missing file yields an empty list unless `create_missing` is off.
    pub fn open(settings: &Settings) -> anyhow::Result<Self> {
        let path = settings.file.clone();
        let list = if settings.create_missing {
            TodoList::load_or_default(&path)
        } else {
            let mut list = TodoList::new();
            list.load(&path).map(|()| list)
        }
        .with_context(|| format!("failed to load todos from {}", path.display()))?;

        tracing::debug!(path = %path.display(), items = list.count(), "todo list ready");
        Ok(Self { list, path })
    }

    /// Write the current list back to its file.
    pub fn persist(&self) -> anyhow::Result<()> {
        self.list.save(&self.path).context("failed to save todos")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
