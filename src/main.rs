use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::error;

use escape_time::{CliArgs, RunCliCommand};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match RunCliCommand::new(args).execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
