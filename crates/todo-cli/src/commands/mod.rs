use std::fmt;

use serde::Serialize;
use todo_core::responses::{
    AddResponse, ClearResponse, CountResponse, DeleteResponse, EditResponse, ListResponse,
    StatusResponse,
};

pub mod add;
pub mod clear;
pub mod complete;
pub mod count;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod list;
pub mod schema;
pub mod shared;
pub mod uncomplete;

/// What a command produced, ready to be printed in any output format.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Add(AddResponse),
    Status(StatusResponse),
    Delete(DeleteResponse),
    Edit(EditResponse),
    Clear(ClearResponse),
    Count(CountResponse),
    List(ListResponse),
    Schema(serde_json::Value),
}

impl Response {
    /// Whether the list changed and must be written back.
    #[must_use]
    pub const fn changed(&self) -> bool {
        match self {
            Self::Add(_) | Self::Status(_) | Self::Delete(_) | Self::Edit(_) => true,
            Self::Clear(clear) => clear.removed > 0,
            Self::Count(_) | Self::List(_) | Self::Schema(_) => false,
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(response) => fmt::Display::fmt(response, f),
            Self::Status(response) => fmt::Display::fmt(response, f),
            Self::Delete(response) => fmt::Display::fmt(response, f),
            Self::Edit(response) => fmt::Display::fmt(response, f),
            Self::Clear(response) => fmt::Display::fmt(response, f),
            Self::Count(response) => fmt::Display::fmt(response, f),
            Self::List(response) => fmt::Display::fmt(response, f),
            Self::Schema(schema) => {
                let pretty = serde_json::to_string_pretty(schema).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
        }
    }
}
