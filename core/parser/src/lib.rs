//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the calculator expression parser.
//! CONTEXT: This module exposes the lexer, parser, and AST components
//! needed to convert an expression string into an evaluatable tree.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, % (modulo), ^ (power, right-associative)
//! - Postfix factorial: 5!
//! - Functions: sqrt, sin, cos, tan, lg (base 10), ln
//! - Constants: pi, e
//! - Parentheses for grouping
//! - Unary sign: -5, +5

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use ast::{BinaryOperator, Expression, UnaryFunction};
pub use error::{LexError, ParseError, ParseResult, SyntaxError};
pub use lexer::Lexer;
pub use parser::{
    parse, parse_with, ParenPolicy, ParseWarning, Parser, ParserOptions, MAX_NESTING_DEPTH,
};
pub use token::Token;
