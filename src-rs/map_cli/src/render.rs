use std::io::{self, Write};

use pokemap_rs::{CommandSummary, MapError};

pub fn prompt<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

pub fn names<W: Write + ?Sized>(out: &mut W, names: &[String]) -> io::Result<()> {
    for name in names {
        writeln!(out, "{}", name)?;
    }
    out.flush()
}

pub fn not_found<W: Write + ?Sized>(out: &mut W, err: &MapError) -> io::Result<()> {
    writeln!(out, "{}", err)
}

pub fn command_error<W: Write + ?Sized>(out: &mut W, token: &str, err: &MapError) -> io::Result<()> {
    writeln!(out, "encountered errors while executing {}: {}", token, err)
}

pub fn read_error<W: Write + ?Sized>(out: &mut W, err: &MapError) -> io::Result<()> {
    writeln!(out, "error: {}", err)
}

pub fn usage<W: Write + ?Sized>(out: &mut W, commands: &[CommandSummary]) -> io::Result<()> {
    writeln!(out, "Usage: pokemap [--base <url>] [--timeout <secs>] [--prompt <text>]")?;
    writeln!(out)?;
    writeln!(out, "Reads one command per line from stdin:")?;
    let width = commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for cmd in commands {
        writeln!(out, "  {:<width$}  {}", cmd.name, cmd.description, width = width)?;
    }
    writeln!(out)?;
    writeln!(out, "Environment: POKEMAP_BASE_URL, POKEMAP_TIMEOUT_SECS, POKEMAP_PROMPT, POKEMAP_LOG")
}
