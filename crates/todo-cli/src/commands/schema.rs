use schemars::schema_for;
use todo_core::TodoList;

/// JSON Schema of the todo file document.
pub fn run() -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(schema_for!(TodoList))?)
}
