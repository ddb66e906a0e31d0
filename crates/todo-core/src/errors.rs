//! Error types for task list operations.
//!
//! Every fallible operation in this crate returns [`TodoError`]. Failures are
//! detected before any state is touched, so an `Err` always leaves the list
//! exactly as it was.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`crate::TodoList`] operations and its storage layer.
#[derive(Debug, Error)]
pub enum TodoError {
    /// A position outside `0..len` was passed to an index-taking operation.
    #[error("item index {index} out of range ({})", valid_range(.len))]
    IndexOutOfRange { index: usize, len: usize },

    /// `edit` was called with text that is empty after trimming.
    #[error("task text cannot be empty")]
    EmptyText,

    /// An argument was rejected before any work was done (e.g. empty path).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing the storage file failed.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The list could not be encoded as JSON.
    #[error("failed to serialize todo list: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The storage file does not contain a valid todo list document.
    #[error("failed to parse todo list from {}: {source}", .path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TodoError {
    /// Whether this error is an I/O failure caused by a missing file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn valid_range(len: &usize) -> String {
    match *len {
        0 => String::from("list is empty"),
        len => format!("0-{}", len - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_reports_valid_range() {
        let err = TodoError::IndexOutOfRange { index: 5, len: 1 };
        assert_eq!(err.to_string(), "item index 5 out of range (0-0)");
    }

    #[test]
    fn index_error_on_empty_list() {
        let err = TodoError::IndexOutOfRange { index: 0, len: 0 };
        assert_eq!(err.to_string(), "item index 0 out of range (list is empty)");
    }

    #[test]
    fn not_found_detection() {
        let err = TodoError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_not_found());
        assert!(!TodoError::EmptyText.is_not_found());
    }
}
