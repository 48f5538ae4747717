//! cmdtrie-demo - resolve and run commands from a sample command tree.
//!
//! ```text
//! cmdtrie-demo auth user create     # created user
//! cmdtrie-demo run anything here    # task started (wildcard)
//! cmdtrie-demo --tree --output yaml # print the tree
//! ```
//!
//! Logging goes to stderr. `CMDTRIE_LOG` takes a tracing filter directive
//! (e.g. `CMDTRIE_LOG=cmdtrie=trace`) and overrides `-v`.

mod app;
mod cli;

use std::cell::RefCell;
use std::io;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "CMDTRIE_LOG";

/// Initialize the logging system.
fn init_logging(default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global tracing subscriber: {e}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level()) {
        eprintln!("warning: {e}");
    }

    let out = Rc::new(RefCell::new(io::stdout()));
    match app::run(&cli, &out) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
