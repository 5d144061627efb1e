//! Notepad command-line entry point.
//!
//! # Responsibility
//! - Parse configuration, start logging and optionally pre-load a file.
//! - Run the command loop on stdin/stdout and map its end to an exit code.
//!
//! # Invariants
//! - This is the only place the process exit status is decided.

mod config;
mod terminal;

use clap::Parser;
use config::{absolute_dir, Cli};
use log::{error, info};
use notepad_core::{init_logging, JsonFileStore, NoteStore, Notepad, Session, SessionEnd};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use terminal::ConsoleTerminal;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(end) => {
            info!("event=app_exit module=cli status=ok reason={end:?}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!("event=app_exit module=cli status=error");
            eprintln!("notepad: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SessionEnd, String> {
    if cli.no_color || !io::stdout().is_terminal() {
        yansi::disable();
    }

    if let Some(dir) = &cli.log_dir {
        let cwd = std::env::current_dir()
            .map_err(|err| format!("cannot resolve working directory: {err}"))?;
        let log_dir = absolute_dir(dir, &cwd);
        init_logging(cli.effective_log_level(), &log_dir).map_err(|err| err.to_string())?;
    }

    let store = JsonFileStore::new();
    let notepad = match &cli.load {
        Some(path) => Notepad::from_notes(store.load(path).map_err(|err| err.to_string())?),
        None => Notepad::new(),
    };

    let stdout = io::stdout();
    let mut session = Session::new(notepad, store, ConsoleTerminal::new(stdout.lock()));
    session
        .run(io::stdin().lock())
        .map_err(|err| format!("terminal I/O failed: {err}"))
}
