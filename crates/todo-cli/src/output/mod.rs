use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Display>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Write a rendered response followed by a newline.
pub fn write<W, T>(out: &mut W, value: &T, format: OutputFormat) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize + Display,
{
    let rendered = render(value, format)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

/// Print a response to stdout in the requested format.
pub fn output<T: Serialize + Display>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    write(&mut std::io::stdout().lock(), value, format)
}
