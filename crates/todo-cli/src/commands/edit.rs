use todo_core::responses::EditResponse;

use crate::cli::root_commands::EditArgs;
use crate::commands::shared::number::{explain, to_position};
use crate::context::AppContext;

pub fn run(args: &EditArgs, ctx: &mut AppContext) -> anyhow::Result<EditResponse> {
    let position = to_position(args.number)?;
    ctx.list
        .edit(position, &args.text.join(" "))
        .map_err(|error| explain(error, args.number))?;

    Ok(EditResponse {
        number: position + 1,
        item: ctx.list.get(position)?.clone(),
    })
}
