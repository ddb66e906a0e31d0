//! The ordered task collection.
//!
//! Position is the only identity an item has. Every index-taking operation
//! validates its position against the current length and returns
//! [`TodoError::IndexOutOfRange`] otherwise. `delete` shifts all later items
//! left by one, so positions must not be cached across mutating calls.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::TodoError;
use crate::item::Item;

/// Message rendered for a list without items.
pub const EMPTY_LIST_MESSAGE: &str = "No items in the todo list\n";

/// An ordered sequence of [`Item`]s, persisted as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All items in position order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Borrow the item at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if `position >= count()`.
    pub fn get(&self, position: usize) -> Result<&Item, TodoError> {
        self.validate(position)?;
        Ok(&self.items[position])
    }

    /// Append a new item and return its position.
    pub fn add(&mut self, text: &str) -> usize {
        self.items.push(Item::new(text));
        self.items.len() - 1
    }

    /// Mark the item at `position` as done.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if `position >= count()`.
    pub fn complete(&mut self, position: usize) -> Result<(), TodoError> {
        self.item_mut(position)?.complete();
        Ok(())
    }

    /// Mark the item at `position` as pending.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if `position >= count()`.
    pub fn uncomplete(&mut self, position: usize) -> Result<(), TodoError> {
        self.item_mut(position)?.uncomplete();
        Ok(())
    }

    /// Remove the item at `position` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if `position >= count()`.
    pub fn delete(&mut self, position: usize) -> Result<Item, TodoError> {
        self.validate(position)?;
        Ok(self.items.remove(position))
    }

    /// Replace the text of the item at `position`.
    ///
    /// The completion flag and timestamps are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] for a bad position and
    /// [`TodoError::EmptyText`] if `text` is blank. The item is unchanged in
    /// both cases.
    pub fn edit(&mut self, position: usize, text: &str) -> Result<(), TodoError> {
        self.validate(position)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }

        self.items[position].set_text(text.to_string());
        Ok(())
    }

    /// Remove every item, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn count_completed(&self) -> usize {
        self.items.iter().filter(|item| item.is_done()).count()
    }

    #[must_use]
    pub fn count_pending(&self) -> usize {
        self.count() - self.count_completed()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the list with a completion header and 1-based numbering.
    #[must_use]
    pub fn render(&self) -> String {
        render_items(&self.items)
    }

    fn item_mut(&mut self, position: usize) -> Result<&mut Item, TodoError> {
        self.validate(position)?;
        Ok(&mut self.items[position])
    }

    fn validate(&self, position: usize) -> Result<(), TodoError> {
        if position >= self.items.len() {
            return Err(TodoError::IndexOutOfRange {
                index: position,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

/// Render a sequence of items the way [`TodoList::render`] does.
#[must_use]
pub fn render_items(items: &[Item]) -> String {
    if items.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    let completed = items.iter().filter(|item| item.is_done()).count();
    let header = format!("Todo List ({completed}/{} completed):\n", items.len());
    let lines = items
        .iter()
        .enumerate()
        .map(|(position, item)| format!("{}. {item}\n", position + 1))
        .collect::<String>();
    header + &lines
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
