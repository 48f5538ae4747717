//! The sample command tree and the dispatch loop around it.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::Context;
use cmdtrie::{path_to_string, CommandTrie, DispatchError, TrieError, WildcardPrecedence};
use tracing::{info, warn};

use crate::cli::Cli;

/// Exit code for a command path that does not resolve.
pub const EXIT_ROUTE_ERROR: u8 = 2;

const USAGE: &str = "\
usage: cmdtrie-demo [--tree] [COMMAND]...

commands:
  auth user create    create a user
  auth token          issue a token
  run <anything>      run a task
  version             print the version";

/// Shared sink the sample handlers write to.
pub type Sink<W> = Rc<RefCell<W>>;

fn say<W: Write + 'static>(
    out: &Sink<W>,
    message: &'static str,
) -> impl Fn() -> io::Result<()> + 'static {
    let out = out.clone();
    move || writeln!(out.borrow_mut(), "{message}")
}

/// Builds the sample command tree.
///
/// Handlers write to `out`, except `version`, which is a plain message
/// node printing to stdout.
pub fn build_tree<W: Write + 'static>(
    out: &Sink<W>,
    precedence: WildcardPrecedence,
) -> Result<CommandTrie, TrieError> {
    let mut trie = CommandTrie::builder(say(out, USAGE))
        .wildcard_precedence(precedence)
        .build();

    trie.add_command(say(out, "auth: manage users and tokens"), &["auth"])?;
    trie.add_command(say(out, "auth user: manage users"), &["auth", "user"])?;
    trie.add_command(say(out, "created user"), &["auth", "user", "create"])?;
    trie.add_command(say(out, "issued token"), &["auth", "token"])?;
    trie.add_command(say(out, "run: which task?"), &["run"])?;
    trie.add_command(say(out, "no tasks running"), &["run", "status"])?;
    trie.add_command(say(out, "task started"), &["run", "*"])?;
    trie.simple_message(concat!("cmdtrie-demo ", env!("CARGO_PKG_VERSION")), &["version"])?;

    Ok(trie)
}

/// Runs the demo and returns the process exit code.
///
/// Unknown command paths print a diagnostic to stderr and exit with
/// [`EXIT_ROUTE_ERROR`]; handler failures propagate as errors.
pub fn run<W: Write + 'static>(cli: &Cli, out: &Sink<W>) -> anyhow::Result<u8> {
    let trie = build_tree(out, cli.precedence()).context("failed to build command tree")?;

    if cli.tree {
        let rendered = trie.render_as(cli.output)?;
        write!(out.borrow_mut(), "{rendered}")?;
        return Ok(0);
    }

    info!(path = %path_to_string(&cli.path), "dispatching");
    match trie.dispatch(&cli.path) {
        Ok(()) => Ok(0),
        Err(DispatchError::Route(e)) => {
            warn!(error = %e, "command path did not resolve");
            eprintln!("error: {e}");
            Ok(EXIT_ROUTE_ERROR)
        }
        Err(DispatchError::Handler(e)) => {
            Err(e.context(format!("command '{}' failed", path_to_string(&cli.path))))
        }
    }
}
