mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use cli::{GenerateParams, build_cli};
use logging::LogOptions;

fn main() -> ExitCode {
    logging::init(LogOptions::from_env());

    let matches = build_cli().get_matches();
    let params = GenerateParams::from_matches(&matches);

    match commands::generate::run(params.into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(target: "cli", error = %err, "generation failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
