use clap::{Args, Subcommand};

/// Top-level command tree.
///
/// Item numbers are 1-based as shown by `todo list`.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add a new todo item.
    #[command(visible_alias = "a")]
    Add(AddArgs),
    /// List all todo items (default when no command is given).
    #[command(visible_aliases = ["ls", "l"])]
    List,
    /// Mark item n as completed.
    #[command(visible_aliases = ["done", "c"])]
    Complete(ItemArgs),
    /// Mark item n as not completed.
    #[command(visible_aliases = ["undo", "u"])]
    Uncomplete(ItemArgs),
    /// Delete item n.
    #[command(visible_aliases = ["remove", "rm", "d"])]
    Delete(ItemArgs),
    /// Replace the text of item n.
    #[command(visible_alias = "e")]
    Edit(EditArgs),
    /// Remove all items.
    Clear,
    /// Show total, completed and pending counts.
    Count,
    /// Print the JSON Schema of the todo file.
    Schema,
}

impl Commands {
    /// Whether the command can change the list and may need a save.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        match self {
            Self::Add(_)
            | Self::Complete(_)
            | Self::Uncomplete(_)
            | Self::Delete(_)
            | Self::Edit(_)
            | Self::Clear => true,
            Self::List | Self::Count | Self::Schema => false,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Task text; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ItemArgs {
    /// Item number as shown by `list`.
    #[arg(allow_negative_numbers = true)]
    pub number: i64,
}

#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    /// Item number as shown by `list`.
    #[arg(allow_negative_numbers = true)]
    pub number: i64,
    /// New task text; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}
