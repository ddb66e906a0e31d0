use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `todo` binary.
#[derive(Debug, Parser)]
#[command(
    name = "todo",
    version,
    about = "Todo - a simple and efficient command line task manager"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Todo file path (defaults to storage.file from config, then todos.json)
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    /// Run in interactive mode
    #[arg(short, long, global = true)]
    pub interactive: bool,

    /// Output format: text, json, raw
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            file: self.file.clone(),
            interactive: self.interactive,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Global options that consume the following argument as their value.
const VALUE_OPTIONS: &[&str] = &["-f", "--file", "--format"];

/// Lowercase the command word so `todo ADD milk` runs `add`.
///
/// The first argument after the binary name that is neither an option nor an
/// option value is taken as the command. Everything else is left as given.
pub fn normalize_command_word<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    let mut index = 1;
    while index < args.len() {
        let Some(arg) = args[index].to_str() else {
            break;
        };
        if arg == "--" {
            break;
        }
        if arg.len() > 1 && arg.starts_with('-') {
            index += if VALUE_OPTIONS.contains(&arg) { 2 } else { 1 };
            continue;
        }
        let lowered = arg.to_lowercase();
        args[index] = lowered.into();
        break;
    }
    args
}
