use crate::cli::root_commands::Commands;
use crate::commands::{self, Response};
use crate::context::AppContext;

/// Run a parsed command against the list and persist the result if it changed.
///
/// A failed command never reaches the save step, so the file only ever sees
/// fully applied mutations.
pub fn dispatch(command: &Commands, ctx: &mut AppContext) -> anyhow::Result<Response> {
    let response = match command {
        Commands::Add(args) => Response::Add(commands::add::run(args, ctx)?),
        Commands::List => Response::List(commands::list::run(ctx)),
        Commands::Complete(args) => Response::Status(commands::complete::run(args, ctx)?),
        Commands::Uncomplete(args) => Response::Status(commands::uncomplete::run(args, ctx)?),
        Commands::Delete(args) => Response::Delete(commands::delete::run(args, ctx)?),
        Commands::Edit(args) => Response::Edit(commands::edit::run(args, ctx)?),
        Commands::Clear => Response::Clear(commands::clear::run(ctx)),
        Commands::Count => Response::Count(commands::count::run(ctx)),
        Commands::Schema => Response::Schema(commands::schema::run()?),
    };

    if command.is_mutating() && response.changed() {
        ctx.persist()?;
        tracing::debug!(path = %ctx.path().display(), items = ctx.list.count(), "saved after command");
    }

    Ok(response)
}
