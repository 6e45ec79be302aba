use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use moba_team_manager_lib::commands::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    moba_team_manager_lib::init_logging(args.verbose);

    match moba_team_manager_lib::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            eprintln!("{}", moba_team_manager_lib::error_report(&e));
            ExitCode::FAILURE
        }
    }
}
