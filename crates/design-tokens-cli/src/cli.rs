//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use design_tokens::validate::{DEFAULT_SCHEMA_PATH, DEFAULT_VERSION_PATH};
use design_tokens::OutputMode;

/// Validate design tokens against the pinned schema.
#[derive(Debug, Parser)]
#[command(name = "design-tokens", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Pinned token schema file
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_SCHEMA_PATH)]
    pub schema: PathBuf,

    /// Schema version marker file
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_VERSION_PATH)]
    pub schema_version: PathBuf,

    /// What a document's `$schema` must reference (defaults to --schema)
    #[arg(long, global = true, value_name = "REF")]
    pub pinned: Option<String>,

    /// Token document (.json, .yaml or .yml); the built-in tokens are used when omitted
    #[arg(long, global = true, value_name = "PATH")]
    pub tokens: Option<PathBuf>,

    /// Output mode
    #[arg(long, global = true, value_enum, default_value_t = OutputArg::Auto)]
    pub output: OutputArg,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Check the schema contract and token consistency (default)
    Validate,
    /// Print the alias map built from the tokens as JSON
    Aliases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Auto,
    Term,
    Text,
    Json,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Auto => OutputMode::Auto,
            OutputArg::Term => OutputMode::Term,
            OutputArg::Text => OutputMode::Text,
            OutputArg::Json => OutputMode::Json,
        }
    }
}

impl Cli {
    /// The subcommand to run; a bare invocation validates.
    pub fn action(&self) -> Command {
        self.command.unwrap_or(Command::Validate)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
