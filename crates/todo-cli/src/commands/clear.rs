use todo_core::responses::ClearResponse;

use crate::context::AppContext;

pub fn run(ctx: &mut AppContext) -> ClearResponse {
    ClearResponse {
        removed: ctx.list.clear(),
    }
}
