//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.
//! They are transient and carry no position information.

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    // Literals
    Number(f64),

    // Operators
    Plus,
    Minus,
    Asterisk,
    Slash,
    Caret,
    Percent,
    /// Postfix factorial: !
    Exclamation,

    // Delimiters
    LParen,
    RParen,

    // Functions
    Sqrt,
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm, spelled `lg`
    Log10,
    Ln,

    // Constants
    Pi,
    E,

    // Special
    EOF,
}

impl Token {
    /// Maps an identifier to its keyword token. Matching is case-sensitive.
    pub fn keyword(ident: &str) -> Option<Token> {
        match ident {
            "sqrt" => Some(Token::Sqrt),
            "sin" => Some(Token::Sin),
            "cos" => Some(Token::Cos),
            "tan" => Some(Token::Tan),
            "lg" => Some(Token::Log10),
            "ln" => Some(Token::Ln),
            "pi" => Some(Token::Pi),
            "e" => Some(Token::E),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(
            self,
            Token::Sqrt | Token::Sin | Token::Cos | Token::Tan | Token::Log10 | Token::Ln
        )
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Asterisk => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Caret => write!(f, "'^'"),
            Token::Percent => write!(f, "'%'"),
            Token::Exclamation => write!(f, "'!'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Sqrt => write!(f, "sqrt"),
            Token::Sin => write!(f, "sin"),
            Token::Cos => write!(f, "cos"),
            Token::Tan => write!(f, "tan"),
            Token::Log10 => write!(f, "lg"),
            Token::Ln => write!(f, "ln"),
            Token::Pi => write!(f, "pi"),
            Token::E => write!(f, "e"),
            Token::EOF => write!(f, "end of input"),
        }
    }
}
