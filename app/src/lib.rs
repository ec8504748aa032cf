//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point for the calculator front end.
// CONTEXT: Wires configuration, logging and the session to the terminal.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod session;

pub use cli::{render_error, render_outcome, run_lines, Cli};
pub use config::{CalcConfig, ConfigError};
pub use format::format_number;
pub use logging::{close_log_file, get_log_path, init_log_file, next_seq, write_log};
pub use session::{Outcome, Session, SessionError, ANSWER_TOKEN};

/// Runs the `calc` binary.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    logging::set_echo(config.log_echo);
    if let Some(path) = &config.log_file {
        if let Err(e) = logging::init_log_file(path) {
            eprintln!("[LOG_INIT] {}", e);
        }
    }
    log_info!("APP", "start paren_policy={:?} precision={:?}", config.paren_policy, config.precision);

    let mut session = Session::new(config);
    let code = match cli.expression() {
        Some(expression) => run_once(&mut session, &expression, cli.ast),
        None => {
            let stdin = io::stdin();
            match run_lines(&mut session, stdin.lock(), io::stdout().lock(), cli.ast) {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    };

    close_log_file();
    code
}

fn run_once(session: &mut Session, expression: &str, show_ast: bool) -> ExitCode {
    match session.evaluate(expression) {
        Ok(outcome) => {
            let mut stdout = io::stdout().lock();
            for warning in &outcome.warnings {
                eprintln!("Warning: {}", warning);
            }
            if writeln!(stdout, "{}", render_outcome(&outcome, show_ast)).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}
