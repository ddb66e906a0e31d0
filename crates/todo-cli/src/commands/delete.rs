use todo_core::responses::DeleteResponse;

use crate::cli::root_commands::ItemArgs;
use crate::commands::shared::number::{explain, to_position};
use crate::context::AppContext;

pub fn run(args: &ItemArgs, ctx: &mut AppContext) -> anyhow::Result<DeleteResponse> {
    let position = to_position(args.number)?;
    let deleted = ctx
        .list
        .delete(position)
        .map_err(|error| explain(error, args.number))?;

    Ok(DeleteResponse {
        number: position + 1,
        deleted,
    })
}
