//! JSON persistence for a whole [`TodoList`].
//!
//! The document is a single object holding an `items` array of records with
//! `text`, `done`, `created_at` and an optional `completed_at`. Timestamps are
//! RFC 3339 strings. Saving rewrites the whole file in place; it is not
//! atomic, so a crash mid-write can leave a truncated file behind. Unknown
//! fields in a stored document are ignored on load.

use std::path::Path;

use crate::errors::TodoError;
use crate::list::TodoList;

impl TodoList {
    /// Write the full list to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidArgument`] for an empty path,
    /// [`TodoError::Serialization`] if encoding fails, and [`TodoError::Io`]
    /// if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TodoError> {
        let path = require_path(path.as_ref())?;

        let data = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        std::fs::write(path, data).map_err(|source| TodoError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), items = self.count(), "saved todo list");
        Ok(())
    }

    /// Replace the whole list with the contents of `path`.
    ///
    /// On error the current items are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidArgument`] for an empty path,
    /// [`TodoError::Io`] if the file cannot be read (including when it does
    /// not exist), and [`TodoError::Deserialization`] if it is not a valid
    /// todo list document.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), TodoError> {
        let path = require_path(path.as_ref())?;

        let data = std::fs::read(path).map_err(|source| TodoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded: Self =
            serde_json::from_slice(&data).map_err(|source| TodoError::Deserialization {
                path: path.to_path_buf(),
                source,
            })?;

        for (position, item) in loaded.items().iter().enumerate() {
            if !item.is_consistent() {
                tracing::warn!(
                    path = %path.display(),
                    item = position + 1,
                    done = item.is_done(),
                    "stored item has mismatched done flag and completed_at; loading as stored"
                );
            }
        }

        tracing::debug!(path = %path.display(), items = loaded.count(), "loaded todo list");
        *self = loaded;
        Ok(())
    }

    /// Open the list stored at `path`, or an empty list if there is no file.
    ///
    /// # Errors
    ///
    /// Propagates every [`TodoList::load`] failure except a missing file.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, TodoError> {
        let mut list = Self::new();
        match list.load(path.as_ref()) {
            Ok(()) => Ok(list),
            Err(error) if error.is_not_found() => {
                tracing::debug!(
                    path = %path.as_ref().display(),
                    "no todo file yet; starting with an empty list"
                );
                Ok(list)
            }
            Err(error) => Err(error),
        }
    }
}

fn require_path(path: &Path) -> Result<&Path, TodoError> {
    if path.as_os_str().is_empty() {
        return Err(TodoError::InvalidArgument(
            "filename cannot be empty".to_string(),
        ));
    }
    Ok(path)
}
