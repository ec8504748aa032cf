//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the pipeline. Tokens are pulled on
//! demand by the parser; the cursor only moves forward.
//!
//! SUPPORTED INPUT:
//! - Single char: + - * / ^ % ! ( )
//! - Numbers: maximal runs of digits and '.', no exponent, no sign
//! - Keywords (case-sensitive): sqrt sin cos tan lg ln pi e

use crate::error::LexError;
use crate::token::Token;
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token, or `Token::EOF` once
    /// the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        match self.input.next() {
            Some('+') => Ok(Token::Plus),
            Some('-') => Ok(Token::Minus),
            Some('*') => Ok(Token::Asterisk),
            Some('/') => Ok(Token::Slash),
            Some('^') => Ok(Token::Caret),
            Some('%') => Ok(Token::Percent),
            Some('!') => Ok(Token::Exclamation),
            Some('(') => Ok(Token::LParen),
            Some(')') => Ok(Token::RParen),

            // Handle Numbers (starts with digit or dot)
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(ch),

            // Handle keywords (starts with letter)
            Some(ch) if ch.is_ascii_alphabetic() => self.read_identifier(ch),

            None => Ok(Token::EOF),

            Some(ch) => Err(LexError::InvalidCharacter(ch)),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Reads a digit/dot run. Unlike a longest-prefix float read, a run such
    /// as `1.2.3` is an error rather than silently becoming `1.2`.
    fn read_number(&mut self, first_char: char) -> Result<Token, LexError> {
        let mut number_str = String::from(first_char);

        // Greedy: every dot is swallowed, "1.2.3" is rejected as a whole.
        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                number_str.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        number_str
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| LexError::InvalidNumber(number_str))
    }

    fn read_identifier(&mut self, first_char: char) -> Result<Token, LexError> {
        let mut ident = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if !ch.is_ascii_alphabetic() {
                break;
            }
            ident.push(ch);
            self.input.next();
        }

        Token::keyword(&ident).ok_or(LexError::UnknownIdentifier(ident))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, `Token::EOF`.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token::EOF) => None,
            other => Some(other),
        }
    }
}
