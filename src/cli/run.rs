use std::env;

use anyhow::{Context, Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, merge::merge},
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Init) => {
            let dir = env::current_dir().context("Failed to get current directory")?;
            init(&dir)
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
