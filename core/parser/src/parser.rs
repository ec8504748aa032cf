//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a stream of Tokens into an AST.
//! CONTEXT: This is the second stage of the pipeline. It pulls tokens from the
//! Lexer one at a time, keeping exactly one token of lookahead.
//!
//! GRAMMAR (precedence low to high):
//!   expression --> term ( ("+" | "-") term )*
//!   term       --> power ( ("*" | "/" | "%") power )*
//!   power      --> postfix ( "^" power )?
//!   postfix    --> factor "!"?
//!   factor     --> NUMBER | "pi" | "e" | "(" expression ")"
//!                | "-" factor | "+" factor | FUNCTION "(" expression ")"
//!
//! Prefix signs recurse into `factor`, not `power`, so `-2^2` is `(-2)^2`.
//!
//! Every nesting construct and every chained operator counts one level
//! against `MAX_NESTING_DEPTH`. That bounds both the recursion here and the
//! height of the produced tree, which is later walked recursively.

use crate::ast::{BinaryOperator, Expression, UnaryFunction};
use crate::error::{ParseError, ParseResult};
use crate::lexer::Lexer;
use crate::token::Token;
use serde::{Deserialize, Serialize};

/// Maximum nesting depth accepted before the parse is aborted.
pub const MAX_NESTING_DEPTH: usize = 256;

/// How a `(` that is still open at the end of input is treated.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParenPolicy {
    /// Any unmatched parenthesis is a parse error.
    #[default]
    Strict,
    /// Parentheses still open at end of input are closed implicitly and
    /// reported through `Parser::warnings`.
    Lenient,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ParserOptions {
    pub paren_policy: ParenPolicy,
}

impl ParserOptions {
    pub fn lenient() -> Self {
        ParserOptions {
            paren_policy: ParenPolicy::Lenient,
        }
    }
}

/// Non-fatal findings collected during a lenient parse.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum ParseWarning {
    UnclosedParenthesis,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::UnclosedParenthesis => {
                write!(f, "Unmatched '(' closed at end of input")
            }
        }
    }
}

/// The Parser struct holds the lexer and current token state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    options: ParserOptions,
    warnings: Vec<ParseWarning>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser bound to `lexer`.
    /// Immediately pulls the first token, so lexing may already fail here.
    pub fn new(lexer: Lexer<'a>) -> ParseResult<Self> {
        Self::with_options(lexer, ParserOptions::default())
    }

    pub fn with_options(mut lexer: Lexer<'a>, options: ParserOptions) -> ParseResult<Self> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
            options,
            warnings: Vec::new(),
            depth: 0,
        })
    }

    /// Parses the entire input and returns the AST.
    /// Empty input yields `Literal(0)`.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        if self.current_token == Token::EOF {
            return Ok(Expression::Literal(0.0));
        }

        let expr = self.parse_expression()?;

        // Ensure we consumed all tokens
        if self.current_token != Token::EOF {
            return Err(ParseError::TrailingInput(self.current_token).into());
        }

        Ok(expr)
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Advances to the next token.
    fn advance(&mut self) -> ParseResult<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    /// Checks if the current token matches the expected token.
    /// If it matches, advances and returns Ok. Otherwise returns an error.
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        if self.current_token == expected {
            return self.advance();
        }
        Err(ParseError::UnexpectedToken {
            expected,
            found: self.current_token,
        }
        .into())
    }

    /// Enters one nesting level, failing once the limit is exceeded.
    fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep(MAX_NESTING_DEPTH).into());
        }
        self.depth += 1;
        Ok(())
    }

    /// Consumes a closing parenthesis, honouring the paren policy.
    fn expect_closing_paren(&mut self) -> ParseResult<()> {
        if self.options.paren_policy == ParenPolicy::Lenient && self.current_token == Token::EOF {
            self.warnings.push(ParseWarning::UnclosedParenthesis);
            return Ok(());
        }
        self.expect(Token::RParen)
    }

    /// Parses additive expressions (+ and -).
    fn parse_expression(&mut self) -> ParseResult<Expression> {
        let entry_depth = self.depth;
        let mut left = self.parse_term()?;

        loop {
            let op = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.advance()?;
            // Each operator in the chain deepens the left spine
            self.descend()?;
            let right = self.parse_term()?;
            left = Expression::binary(op, left, right);
        }

        self.depth = entry_depth;
        Ok(left)
    }

    /// Parses multiplicative expressions (*, / and %).
    fn parse_term(&mut self) -> ParseResult<Expression> {
        let entry_depth = self.depth;
        let mut left = self.parse_power()?;

        loop {
            let op = match self.current_token {
                Token::Asterisk => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                Token::Percent => BinaryOperator::Modulo,
                _ => break,
            };

            self.advance()?;
            // Each operator in the chain deepens the left spine
            self.descend()?;
            let right = self.parse_power()?;
            left = Expression::binary(op, left, right);
        }

        self.depth = entry_depth;
        Ok(left)
    }

    /// Parses power expressions. The exponent recurses into `parse_power`,
    /// which makes `^` right-associative.
    fn parse_power(&mut self) -> ParseResult<Expression> {
        let base = self.parse_postfix()?;

        if self.current_token == Token::Caret {
            self.advance()?;
            self.descend()?;
            let exponent = self.parse_power()?;
            self.depth -= 1;
            return Ok(Expression::binary(BinaryOperator::Power, base, exponent));
        }

        Ok(base)
    }

    /// Parses a factor optionally followed by a single '!'.
    fn parse_postfix(&mut self) -> ParseResult<Expression> {
        let operand = self.parse_factor()?;

        if self.current_token == Token::Exclamation {
            self.advance()?;
            return Ok(Expression::unary(UnaryFunction::Factorial, operand));
        }

        Ok(operand)
    }

    fn parse_factor(&mut self) -> ParseResult<Expression> {
        match self.current_token {
            Token::Number(n) => {
                self.advance()?;
                Ok(Expression::Literal(n))
            }

            Token::Pi => {
                self.advance()?;
                Ok(Expression::Literal(std::f64::consts::PI))
            }

            Token::E => {
                self.advance()?;
                Ok(Expression::Literal(std::f64::consts::E))
            }

            // Parenthesized expression
            Token::LParen => {
                self.advance()?;
                self.descend()?;
                let expr = self.parse_expression()?;
                self.expect_closing_paren()?;
                self.depth -= 1;
                Ok(expr)
            }

            Token::Minus => {
                self.advance()?;
                self.descend()?;
                let operand = self.parse_factor()?;
                self.depth -= 1;
                Ok(Expression::negate(operand))
            }

            Token::Plus => {
                self.advance()?;
                self.descend()?;
                let operand = self.parse_factor()?;
                self.depth -= 1;
                Ok(operand)
            }

            token if token.is_function() => self.parse_function_call(token),

            token => Err(ParseError::InvalidFactor(token).into()),
        }
    }

    /// Parses `FUNCTION "(" expression ")"`; the current token is the function name.
    fn parse_function_call(&mut self, name: Token) -> ParseResult<Expression> {
        let func = match name {
            Token::Sqrt => UnaryFunction::Sqrt,
            Token::Sin => UnaryFunction::Sin,
            Token::Cos => UnaryFunction::Cos,
            Token::Tan => UnaryFunction::Tan,
            Token::Log10 => UnaryFunction::Log10,
            Token::Ln => UnaryFunction::Ln,
            other => return Err(ParseError::InvalidFactor(other).into()),
        };

        self.advance()?;
        self.expect(Token::LParen)?;
        self.descend()?;
        let argument = self.parse_expression()?;
        self.expect_closing_paren()?;
        self.depth -= 1;

        Ok(Expression::unary(func, argument))
    }
}

/// Convenience function to parse an expression string directly.
pub fn parse(input: &str) -> ParseResult<Expression> {
    let mut parser = Parser::new(Lexer::new(input))?;
    parser.parse()
}

/// Parses with explicit options and returns the tree along with any warnings.
pub fn parse_with(
    input: &str,
    options: ParserOptions,
) -> ParseResult<(Expression, Vec<ParseWarning>)> {
    let mut parser = Parser::with_options(Lexer::new(input), options)?;
    let expr = parser.parse()?;
    Ok((expr, parser.warnings))
}
