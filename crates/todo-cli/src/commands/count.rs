use todo_core::responses::CountResponse;

use crate::context::AppContext;

pub fn run(ctx: &AppContext) -> CountResponse {
    CountResponse::from(&ctx.list)
}
