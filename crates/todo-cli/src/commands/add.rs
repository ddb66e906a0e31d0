use todo_core::responses::AddResponse;

use crate::cli::root_commands::AddArgs;
use crate::context::AppContext;

pub fn run(args: &AddArgs, ctx: &mut AppContext) -> anyhow::Result<AddResponse> {
    let position = ctx.list.add(&args.text.join(" "));
    let item = ctx.list.get(position)?.clone();
    Ok(AddResponse {
        number: position + 1,
        item,
    })
}
