//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculation engine.
//! CONTEXT: Runs the full pipeline (lex, parse, evaluate) for one expression
//! and re-exports public types for use by other crates.
//!
//! Every call owns its own Lexer, Parser and tree, so independent
//! expressions can be evaluated from several threads without locking.

pub mod error;
pub mod evaluator;


use parser::{parse_with, Expression, ParseWarning, ParserOptions};
use serde::Serialize;

// Re-export commonly used types at the crate root
pub use error::{CalcError, CalcResult, ErrorKind, EvalError};
pub use evaluator::{evaluate, factorial, Evaluate, FACTORIAL_TOLERANCE};

/// A successfully evaluated expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub expression: Expression,
    pub value: f64,
    /// Findings from a lenient parse; always empty under the strict policy.
    pub warnings: Vec<ParseWarning>,
}

/// Evaluates `input` with the default (strict) parser options.
pub fn calculate(input: &str) -> CalcResult<f64> {
    calculate_with(input, ParserOptions::default()).map(|calc| calc.value)
}

/// Evaluates `input` and keeps the parsed tree and any parser warnings.
pub fn calculate_with(input: &str, options: ParserOptions) -> CalcResult<Calculation> {
    let (expression, warnings) = parse_with(input, options)?;
    let value = expression.evaluate()?;
    Ok(Calculation {
        expression,
        value,
        warnings,
    })
}
