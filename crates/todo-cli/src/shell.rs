//! Interactive read-eval loop (`todo -i`).
//!
//! Each line is parsed with the same command tree as the batch CLI, plus
//! `quit`. Commands run strictly one after another and a mutating command is
//! saved before the next line is read.

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::cli::Commands;
use crate::commands::dispatch::dispatch;
use crate::context::AppContext;
use crate::output;
use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "todo", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Todo(Commands),
    /// Exit interactive mode.
    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Run the shell until `quit` or end of input.
pub fn run<R, W>(
    mut input: R,
    out: &mut W,
    ctx: &mut AppContext,
    settings: &Settings,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Todo Interactive Mode (v{})", settings.version)?;
    writeln!(out, "Type 'help' for available commands or 'quit' to exit.")?;

    let mut line = String::new();
    loop {
        if settings.show_list {
            write!(out, "\n{}", ctx.list.render())?;
        }
        write!(out, "{}", settings.prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        if let Flow::Quit = step(line.trim(), out, ctx, settings)? {
            writeln!(out, "Goodbye!")?;
            return Ok(());
        }
    }
}

fn step<W: Write>(
    line: &str,
    out: &mut W,
    ctx: &mut AppContext,
    settings: &Settings,
) -> anyhow::Result<Flow> {
    if line.is_empty() {
        return Ok(Flow::Continue);
    }

    // Command words are case-insensitive; arguments keep their case.
    let words = line.split_whitespace().enumerate().map(|(i, word)| {
        if i > 0 {
            return word.to_string();
        }
        match word.to_lowercase().as_str() {
            "h" => "help".to_string(),
            command => command.to_string(),
        }
    });

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(error) => {
            writeln!(out, "{}", error.render().to_string().trim_end())?;
            return Ok(Flow::Continue);
        }
    };

    match parsed.command {
        ShellCommand::Quit => Ok(Flow::Quit),
        // The list is already printed before every prompt.
        ShellCommand::Todo(Commands::List) if settings.show_list => Ok(Flow::Continue),
        ShellCommand::Todo(command) => {
            match dispatch(&command, ctx) {
                Ok(response) => output::write(out, &response, settings.format)?,
                Err(error) => {
                    tracing::debug!(%error, "shell command failed");
                    writeln!(out, "Error: {error:#}")?;
                }
            }
            Ok(Flow::Continue)
        }
    }
}
