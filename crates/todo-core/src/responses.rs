//! Response values produced by `todo` commands.
//!
//! Each struct serializes to the JSON shape printed with `--format json` and
//! implements `Display` for the human-readable text output. Item numbers in
//! responses are 1-based, matching what users type.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::list::{TodoList, render_items};

/// Response from `todo add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AddResponse {
    pub number: usize,
    pub item: Item,
}

impl fmt::Display for AddResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added: {} (item #{})", self.item.text(), self.number)
    }
}

/// Whether a status command marked an item done or pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusChange {
    Completed,
    Uncompleted,
}

/// Response from `todo complete` and `todo uncomplete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub number: usize,
    pub change: StatusChange,
    pub item: Item,
}

impl fmt::Display for StatusResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.change {
            StatusChange::Completed => write!(f, "Marked item #{} as completed", self.number),
            StatusChange::Uncompleted => {
                write!(f, "Marked item #{} as not completed", self.number)
            }
        }
    }
}

/// Response from `todo delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub number: usize,
    pub deleted: Item,
}

impl fmt::Display for DeleteResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deleted: {}", self.deleted.text())
    }
}

/// Response from `todo edit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EditResponse {
    pub number: usize,
    pub item: Item,
}

impl fmt::Display for EditResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Updated item #{}: {}", self.number, self.item.text())
    }
}

/// Response from `todo clear`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClearResponse {
    pub removed: usize,
}

impl fmt::Display for ClearResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.removed == 0 {
            f.write_str("Todo list is already empty")
        } else {
            write!(f, "Cleared {} item(s) from the todo list", self.removed)
        }
    }
}

/// Response from `todo count`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CountResponse {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl From<&TodoList> for CountResponse {
    fn from(list: &TodoList) -> Self {
        Self {
            total: list.count(),
            completed: list.count_completed(),
            pending: list.count_pending(),
        }
    }
}

impl fmt::Display for CountResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total, {} completed, {} pending",
            self.total, self.completed, self.pending
        )
    }
}

/// Response from `todo list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListResponse {
    pub total: usize,
    pub completed: usize,
    pub items: Vec<Item>,
}

impl From<&TodoList> for ListResponse {
    fn from(list: &TodoList) -> Self {
        Self {
            total: list.count(),
            completed: list.count_completed(),
            items: list.items().to_vec(),
        }
    }
}

impl fmt::Display for ListResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(render_items(&self.items).trim_end())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clear_message_depends_on_count() {
        assert_eq!(
            ClearResponse { removed: 0 }.to_string(),
            "Todo list is already empty"
        );
        assert_eq!(
            ClearResponse { removed: 3 }.to_string(),
            "Cleared 3 item(s) from the todo list"
        );
    }

    #[test]
    fn status_messages() {
        let item = Item::new("task");
        let done = StatusResponse {
            number: 2,
            change: StatusChange::Completed,
            item: item.clone(),
        };
        let undone = StatusResponse {
            number: 2,
            change: StatusChange::Uncompleted,
            item,
        };
        assert_eq!(done.to_string(), "Marked item #2 as completed");
        assert_eq!(undone.to_string(), "Marked item #2 as not completed");
    }

    #[test]
    fn list_response_matches_list_render() {
        let mut list = TodoList::new();
        list.add("Buy milk");
        list.add("Write report");
        list.complete(1).unwrap();

        let response = ListResponse::from(&list);
        assert_eq!(response.total, 2);
        assert_eq!(response.completed, 1);
        assert_eq!(format!("{response}\n"), list.render());
    }

    #[test]
    fn count_response_serializes_all_fields() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.complete(0).unwrap();

        let json = serde_json::to_value(CountResponse::from(&list)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total": 2, "completed": 1, "pending": 1})
        );
    }
}
