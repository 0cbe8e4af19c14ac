//! Agenda CLI - a due-date task list for the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = agenda_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
