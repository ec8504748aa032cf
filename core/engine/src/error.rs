//! FILENAME: core/engine/src/error.rs
//! PURPOSE: Evaluation errors and the unified error of the whole pipeline.

use parser::{LexError, ParseError, SyntaxError};
use serde::Serialize;
use thiserror::Error;

/// A runtime arithmetic precondition was violated.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Modulo by zero")]
    ModuloByZero,

    #[error("Square root of negative number: {0}")]
    NegativeSqrt(f64),

    #[error("{function} of non-positive number: {value}")]
    NonPositiveLogarithm { function: &'static str, value: f64 },

    #[error("Tangent undefined at {0} (cosine is zero)")]
    TangentUndefined(f64),

    #[error("Factorial of negative number: {0}")]
    NegativeFactorial(f64),

    #[error("Factorial only defined for non-negative integers, got {0}")]
    NonIntegerFactorial(f64),
}

/// Which stage of the pipeline rejected the input.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum ErrorKind {
    Lex,
    Parse,
    Eval,
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum CalcError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Eval error: {0}")]
    Eval(#[from] EvalError),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Lex(_) => ErrorKind::Lex,
            CalcError::Parse(_) => ErrorKind::Parse,
            CalcError::Eval(_) => ErrorKind::Eval,
        }
    }
}

impl From<SyntaxError> for CalcError {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Lex(e) => CalcError::Lex(e),
            SyntaxError::Parse(e) => CalcError::Parse(e),
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
