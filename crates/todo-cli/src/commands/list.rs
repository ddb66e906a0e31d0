use todo_core::responses::ListResponse;

use crate::context::AppContext;

pub fn run(ctx: &AppContext) -> ListResponse {
    ListResponse::from(&ctx.list)
}
