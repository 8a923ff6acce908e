use std::process::ExitCode;

use clap::Parser;
use langmerge::cli::{Arguments, ExitStatus, FailureKind};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version report through clap with a zero exit code.
            return if err.exit_code() == 0 {
                ExitStatus::Success.into()
            } else {
                ExitStatus::Failed(FailureKind::BadArguments).into()
            };
        }
    };

    match langmerge::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::from_error(&err).into()
        }
    }
}
