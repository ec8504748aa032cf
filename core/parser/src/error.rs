//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Errors raised while turning text into an expression tree.
//! CONTEXT: Lexing and parsing are fail-fast; the first error aborts the parse.

use crate::token::Token;
use thiserror::Error;

/// The lexer met input it cannot turn into a token.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum LexError {
    #[error("Invalid character: {0}")]
    InvalidCharacter(char),

    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}

/// The token stream does not match the grammar.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: Token, found: Token },

    #[error("Invalid factor: {0}")]
    InvalidFactor(Token),

    #[error("Unexpected token after expression: {0}")]
    TrailingInput(Token),

    #[error("Expression nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Anything that can go wrong before evaluation starts.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum SyntaxError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

pub type ParseResult<T> = Result<T, SyntaxError>;
