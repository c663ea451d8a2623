mod cli;
mod render;
mod repl;

use std::io;
use std::process;

use pokemap_rs::{CommandRegistry, MapSession};
use tracing::error;
use tracing_subscriber::EnvFilter;

use repl::REPL;

const LOG_ENV: &str = "POKEMAP_LOG";

fn main() {
    init_tracing();

    let options = cli::parse_config();
    let registry = CommandRegistry::with_defaults();
    if options.show_help {
        if let Err(err) = render::usage(&mut io::stdout(), &registry.summaries()) {
            eprintln!("error: {}", err);
            process::exit(1);
        }
        return;
    }

    let session = match MapSession::from_config(&options.config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let mut repl = REPL::new(registry, session, options.config.prompt.clone());
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = repl.run(stdin.lock(), &mut stdout.lock()) {
        error!(error = %err, "output failed");
        process::exit(1);
    }
}

fn init_tracing() {
    let mut filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    for directive in ["reqwest=warn", "hyper=warn"] {
        if let Ok(parsed) = directive.parse() {
            filter = filter.add_directive(parsed);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
