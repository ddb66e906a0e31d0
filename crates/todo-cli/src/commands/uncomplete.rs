use todo_core::responses::{StatusChange, StatusResponse};

use crate::cli::root_commands::ItemArgs;
use crate::commands::shared::number::{explain, to_position};
use crate::context::AppContext;

pub fn run(args: &ItemArgs, ctx: &mut AppContext) -> anyhow::Result<StatusResponse> {
    let position = to_position(args.number)?;
    ctx.list
        .uncomplete(position)
        .map_err(|error| explain(error, args.number))?;

    Ok(StatusResponse {
        number: position + 1,
        change: StatusChange::Uncompleted,
        item: ctx.list.get(position)?.clone(),
    })
}
