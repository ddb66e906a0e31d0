//! A single task and its completion lifecycle.
//!
//! ```text
//! pending ──complete()──▶ completed
//!    ▲                        │
//!    └──────uncomplete()──────┘
//! ```
//!
//! Both transitions are total. Repeating the current-state transition is a
//! no-op, and `complete()` never overwrites an already recorded completion
//! time.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text used when an item is created from blank input.
pub const PLACEHOLDER_TEXT: &str = "Untitled task";

/// Glyph shown between the brackets of a completed item.
pub const DONE_MARK: char = '✓';

/// One task with its text, completion flag, and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Item {
    text: String,
    done: bool,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Create a pending item stamped with the current time.
    ///
    /// Surrounding whitespace is trimmed. Blank input becomes
    /// [`PLACEHOLDER_TEXT`] instead of failing.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text = match text.trim() {
            "" => PLACEHOLDER_TEXT,
            trimmed => trimmed,
        };

        Self {
            text: text.to_string(),
            done: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the item was last completed; `None` while pending.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Mark the item done, recording the completion time once.
    pub fn complete(&mut self) {
        if !self.done {
            self.done = true;
            self.completed_at = Some(Utc::now());
        }
    }

    /// Mark the item pending and forget the completion time.
    pub fn uncomplete(&mut self) {
        self.done = false;
        self.completed_at = None;
    }

    /// Replace the text with an already-trimmed, non-empty value.
    pub(crate) fn set_text(&mut self, text: String) {
        debug_assert!(!text.is_empty());
        self.text = text;
    }

    /// Whether `done` and `completed_at` agree.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.done == self.completed_at.is_some()
    }

    /// Render as `[<mark>] <text>`.
    #[must_use]
    pub fn render(&self) -> String {
        let mark = if self.done { DONE_MARK } else { ' ' };
        format!("[{mark}] {}", self.text)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
