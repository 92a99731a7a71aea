//! `incident-board` binary

use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = incident_board::cli::command().get_matches();
    let stdout = std::io::stdout();

    match incident_board::cli::run(&matches, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
