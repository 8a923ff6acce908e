//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Merge translated definitions into every target locale file
//! - `init`: Initialize langmerge configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the project.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start looking for the project from (default: current directory)
    #[arg(long, env = "LANGMERGE_ROOT")]
    pub root: Option<PathBuf>,

    /// Locale written without annotation (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Expansion mode: single (s), multiple (m), classic-color (c) or new-color (n)
    pub mode: String,

    /// Base source identifier, e.g. block.minecraft.VAR_wool
    pub source_id: String,

    /// Base target identifier, e.g. tile.wool.VAR.name
    pub target_id: String,

    /// Text prepended to every value; NULL for none
    pub prefix: Option<String>,

    /// Text appended to every value; NULL for none
    pub suffix: Option<String>,

    /// Line prefix to start the sorted search at; NULL to derive it
    pub sort_override: Option<String>,

    /// Compute every merge and preview the inserted lines without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Treat duplicate definitions in a target file as fatal
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge translated definitions into every target locale file
    Merge(MergeCommand),
    /// Initialize a new .langmergerc.json configuration file
    Init,
}
