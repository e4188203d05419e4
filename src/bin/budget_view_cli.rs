use std::{env, path::PathBuf, process::ExitCode};

use budget_view::cli::run_cli;
use budget_view::cli::output;

fn main() -> ExitCode {
    budget_view::init();
    let snapshot = env::args_os().nth(1).map(PathBuf::from);
    match run_cli(snapshot) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err);
            ExitCode::FAILURE
        }
    }
}
