//! FILENAME: app/src/cli.rs
//! PURPOSE: Command-line arguments and the line-oriented front end.
//! CONTEXT: One-shot mode evaluates the positional expression; otherwise each
//! stdin line is one expression. `clear` forgets Ans, `quit`/`exit` stop.

use crate::config::{CalcConfig, ConfigError, DEFAULT_CONFIG_FILE};
use crate::session::{Outcome, Session, SessionError};
use crate::{log_info, log_warn};
use clap::Parser;
use parser::ParenPolicy;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "calc", version, about = "Evaluate arithmetic expressions")]
pub struct Cli {
    /// Expression to evaluate. Without it, one expression is read per stdin line
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub expression: Vec<String>,

    /// Path of the JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Close parentheses left open at the end of input instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Decimal places shown for results
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Write the unified log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the parsed tree as JSON before each result
    #[arg(long)]
    pub ast: bool,
}

impl Cli {
    /// The positional words joined back into one expression.
    pub fn expression(&self) -> Option<String> {
        if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }

    /// Loads the config file and applies flag overrides.
    pub fn load_config(&self) -> Result<CalcConfig, ConfigError> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = CalcConfig::load(&path)?;
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut CalcConfig) {
        if self.lenient {
            config.paren_policy = ParenPolicy::Lenient;
        }
        if self.precision.is_some() {
            config.precision = self.precision;
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file.clone();
        }
    }
}

/// Renders an outcome: optional JSON tree line, then the display value.
pub fn render_outcome(outcome: &Outcome, show_ast: bool) -> String {
    if show_ast {
        match serde_json::to_string(&outcome.tree) {
            Ok(json) => return format!("{}\n{}", json, outcome.display),
            Err(e) => log_warn!("CLI", "Failed to serialize tree: {}", e),
        }
    }
    outcome.display.clone()
}

pub fn render_error(err: &SessionError) -> String {
    format!("Error: {}", err)
}

/// Evaluates lines from `input` until EOF or `quit`, writing one answer per
/// line to `out`. Returns the number of lines that failed.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
    show_ast: bool,
) -> std::io::Result<usize> {
    let mut failures = 0;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "clear" => {
                session.clear();
                continue;
            }
            _ => {}
        }

        match session.evaluate(command) {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    writeln!(out, "Warning: {}", warning)?;
                }
                writeln!(out, "{}", render_outcome(&outcome, show_ast))?;
            }
            Err(e) => {
                failures += 1;
                writeln!(out, "{}", render_error(&e))?;
            }
        }
        out.flush()?;
    }

    log_info!("CLI", "session finished failures={}", failures);
    Ok(failures)
}
