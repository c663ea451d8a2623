use std::io::{self, BufRead, Write};

use pokemap_rs::{CommandRegistry, MapError, MapSession};
use tracing::{debug, info};

use crate::render;

pub struct REPL {
    pub registry: CommandRegistry,
    pub session: MapSession,
    pub prompt: Option<String>,
}

impl REPL {
    pub fn new(registry: CommandRegistry, session: MapSession, prompt: Option<String>) -> Self {
        Self {
            registry,
            session,
            prompt,
        }
    }

    /// Runs until `input` is exhausted. Command failures are printed and the
    /// loop goes on; only a failure to write `out` ends it early.
    pub fn run<R: BufRead, W: Write + ?Sized>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        loop {
            if let Some(text) = &self.prompt {
                render::prompt(out, text)?;
            }
            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => {
                    info!("end of input");
                    return Ok(());
                }
                Ok(_) => {}
                Err(err) => {
                    render::read_error(out, &MapError::InputRead(err))?;
                    continue;
                }
            }
            self.handle(strip_line_terminator(&line), out)?;
        }
    }

    fn handle<W: Write + ?Sized>(&mut self, token: &str, out: &mut W) -> io::Result<()> {
        debug!(token, "command received");
        match self.registry.execute(token, &mut self.session) {
            Ok(names) => render::names(out, &names),
            Err(err @ MapError::CommandNotFound(_)) => render::not_found(out, &err),
            Err(err) => render::command_error(out, token, &err),
        }
    }
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
