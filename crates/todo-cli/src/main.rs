use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod settings;
mod shell;
#[cfg(test)]
mod test_support;

fn main() {
    if let Err(error) = run() {
        eprintln!("todo error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse_from(cli::normalize_command_word(std::env::args_os()));
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let config =
        todo_config::TodoConfig::load_with_dotenv().context("failed to load configuration")?;
    let settings = settings::Settings::resolve(&config, &flags, env!("CARGO_PKG_VERSION"));

    let mut ctx = context::AppContext::open(&settings)?;

    if flags.interactive {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        return shell::run(stdin.lock(), &mut stdout, &mut ctx, &settings);
    }

    let command = cli.command.unwrap_or(cli::Commands::List);
    let response = commands::dispatch::dispatch(&command, &mut ctx)?;
    output::output(&response, settings.format)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TODO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
