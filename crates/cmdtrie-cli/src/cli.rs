//! Command-line arguments for the demo.

use clap::{ArgAction, Parser};
use cmdtrie::{OutputMode, WildcardPrecedence};

/// Resolve a command path against a sample command tree and run it.
#[derive(Parser, Debug)]
#[command(name = "cmdtrie-demo", version, about)]
pub struct Cli {
    /// Print the command tree instead of running a command
    #[arg(long)]
    pub tree: bool,

    /// Output format for --tree
    #[arg(long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Let wildcard commands shadow exact siblings
    #[arg(long)]
    pub wildcard_first: bool,

    /// Increase log verbosity (-v debug, -vv trace); CMDTRIE_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command path to resolve, e.g. `auth user create`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub path: Vec<String>,
}

impl Cli {
    /// The lookup precedence selected on the command line.
    pub fn precedence(&self) -> WildcardPrecedence {
        if self.wildcard_first {
            WildcardPrecedence::WildcardFirst
        } else {
            WildcardPrecedence::ExactFirst
        }
    }

    /// The default tracing filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
