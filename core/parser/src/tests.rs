//! FILENAME: core/parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::ast::{BinaryOperator, Expression, UnaryFunction};
use crate::error::{LexError, ParseError, SyntaxError};
use crate::lexer::Lexer;
use crate::parser::{parse, parse_with, ParseWarning, Parser, ParserOptions, MAX_NESTING_DEPTH};
use crate::token::Token;

fn lit(n: f64) -> Expression {
    Expression::Literal(n)
}

fn bin(op: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::binary(op, left, right)
}

// ========================================
// LEXER TESTS
// ========================================

#[test]
fn lexer_tokenizes_simple_math() {
    let mut lexer = Lexer::new("1 + 2");

    assert_eq!(lexer.next_token(), Ok(Token::Number(1.0)));
    assert_eq!(lexer.next_token(), Ok(Token::Plus));
    assert_eq!(lexer.next_token(), Ok(Token::Number(2.0)));
    assert_eq!(lexer.next_token(), Ok(Token::EOF));
}

#[test]
fn lexer_keeps_returning_eof() {
    let mut lexer = Lexer::new("   ");
    assert_eq!(lexer.next_token(), Ok(Token::EOF));
    assert_eq!(lexer.next_token(), Ok(Token::EOF));
}

#[test]
fn lexer_tokenizes_all_operators() {
    let tokens: Result<Vec<Token>, LexError> = Lexer::new("+-*/^%!()").collect();
    assert_eq!(
        tokens.unwrap(),
        vec![
            Token::Plus,
            Token::Minus,
            Token::Asterisk,
            Token::Slash,
            Token::Caret,
            Token::Percent,
            Token::Exclamation,
            Token::LParen,
            Token::RParen,
        ]
    );
}

#[test]
fn lexer_tokenizes_keywords() {
    let tokens: Result<Vec<Token>, LexError> = Lexer::new("sqrt sin cos tan lg ln pi e").collect();
    assert_eq!(
        tokens.unwrap(),
        vec![
            Token::Sqrt,
            Token::Sin,
            Token::Cos,
            Token::Tan,
            Token::Log10,
            Token::Ln,
            Token::Pi,
            Token::E,
        ]
    );
}

#[test]
fn lexer_reads_decimals() {
    let mut lexer = Lexer::new("3.25 .5 7.");
    assert_eq!(lexer.next_token(), Ok(Token::Number(3.25)));
    assert_eq!(lexer.next_token(), Ok(Token::Number(0.5)));
    assert_eq!(lexer.next_token(), Ok(Token::Number(7.0)));
}

#[test]
fn lexer_does_not_consume_sign() {
    let mut lexer = Lexer::new("-4");
    assert_eq!(lexer.next_token(), Ok(Token::Minus));
    assert_eq!(lexer.next_token(), Ok(Token::Number(4.0)));
}

#[test]
fn lexer_splits_identifier_from_digits() {
    let mut lexer = Lexer::new("2pi");
    assert_eq!(lexer.next_token(), Ok(Token::Number(2.0)));
    assert_eq!(lexer.next_token(), Ok(Token::Pi));
}

#[test]
fn lexer_rejects_multiple_dots() {
    let mut lexer = Lexer::new("1.2.3");
    assert_eq!(
        lexer.next_token(),
        Err(LexError::InvalidNumber("1.2.3".to_string()))
    );
}

#[test]
fn lexer_rejects_lone_dot() {
    let mut lexer = Lexer::new(".");
    assert_eq!(lexer.next_token(), Err(LexError::InvalidNumber(".".to_string())));
}

#[test]
fn lexer_rejects_unknown_identifier() {
    let mut lexer = Lexer::new("sinh(1)");
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnknownIdentifier("sinh".to_string()))
    );
}

#[test]
fn lexer_keywords_are_case_sensitive() {
    let mut lexer = Lexer::new("PI");
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnknownIdentifier("PI".to_string()))
    );
}

#[test]
fn lexer_rejects_invalid_character() {
    let mut lexer = Lexer::new("1 & 2");
    assert_eq!(lexer.next_token(), Ok(Token::Number(1.0)));
    assert_eq!(lexer.next_token(), Err(LexError::InvalidCharacter('&')));
}

#[test]
fn lexer_rejects_unicode_glyphs() {
    let mut lexer = Lexer::new("π");
    assert_eq!(lexer.next_token(), Err(LexError::InvalidCharacter('π')));
}

// ========================================
// PARSER TESTS - LITERALS
// ========================================

#[test]
fn parser_parses_number_literal() {
    assert_eq!(parse("42").unwrap(), lit(42.0));
}

#[test]
fn parser_folds_constants() {
    assert_eq!(parse("pi").unwrap(), lit(std::f64::consts::PI));
    assert_eq!(parse("e").unwrap(), lit(std::f64::consts::E));
}

#[test]
fn parser_empty_input_is_zero() {
    assert_eq!(parse("").unwrap(), lit(0.0));
    assert_eq!(parse("  \t ").unwrap(), lit(0.0));
}

// ========================================
// PARSER TESTS - PRECEDENCE & ASSOCIATIVITY
// ========================================

#[test]
fn parser_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse("1+2*3").unwrap(),
        bin(
            BinaryOperator::Add,
            lit(1.0),
            bin(BinaryOperator::Multiply, lit(2.0), lit(3.0))
        )
    );
}

#[test]
fn parser_subtraction_is_left_associative() {
    assert_eq!(
        parse("5-3-1").unwrap(),
        bin(
            BinaryOperator::Subtract,
            bin(BinaryOperator::Subtract, lit(5.0), lit(3.0)),
            lit(1.0)
        )
    );
}

#[test]
fn parser_modulo_shares_term_level() {
    assert_eq!(
        parse("7%4*2").unwrap(),
        bin(
            BinaryOperator::Multiply,
            bin(BinaryOperator::Modulo, lit(7.0), lit(4.0)),
            lit(2.0)
        )
    );
}

#[test]
fn parser_power_is_right_associative() {
    assert_eq!(
        parse("2^3^2").unwrap(),
        bin(
            BinaryOperator::Power,
            lit(2.0),
            bin(BinaryOperator::Power, lit(3.0), lit(2.0))
        )
    );
}

#[test]
fn parser_power_binds_tighter_than_multiplication() {
    assert_eq!(
        parse("2*2^3").unwrap(),
        bin(
            BinaryOperator::Multiply,
            lit(2.0),
            bin(BinaryOperator::Power, lit(2.0), lit(3.0))
        )
    );
}

#[test]
fn parser_unary_minus_binds_to_factor() {
    // -2^2 is (-2)^2
    assert_eq!(
        parse("-2^2").unwrap(),
        bin(BinaryOperator::Power, Expression::negate(lit(2.0)), lit(2.0))
    );
}

#[test]
fn parser_unary_plus_is_dropped() {
    assert_eq!(parse("+3").unwrap(), lit(3.0));
    assert_eq!(parse("+-3").unwrap(), Expression::negate(lit(3.0)));
}

#[test]
fn parser_minus_after_operator() {
    assert_eq!(
        parse("2*-3").unwrap(),
        bin(BinaryOperator::Multiply, lit(2.0), Expression::negate(lit(3.0)))
    );
}

#[test]
fn parser_factorial_applies_to_base_only() {
    assert_eq!(
        parse("2^3!").unwrap(),
        bin(
            BinaryOperator::Power,
            lit(2.0),
            Expression::unary(UnaryFunction::Factorial, lit(3.0))
        )
    );
    assert_eq!(
        parse("3!^2").unwrap(),
        bin(
            BinaryOperator::Power,
            Expression::unary(UnaryFunction::Factorial, lit(3.0)),
            lit(2.0)
        )
    );
}

#[test]
fn parser_parenthesized_factorial() {
    assert_eq!(
        parse("(1+5)!").unwrap(),
        Expression::unary(
            UnaryFunction::Factorial,
            bin(BinaryOperator::Add, lit(1.0), lit(5.0))
        )
    );
}

#[test]
fn parser_parentheses_override_precedence() {
    assert_eq!(
        parse("(1+2)*3").unwrap(),
        bin(
            BinaryOperator::Multiply,
            bin(BinaryOperator::Add, lit(1.0), lit(2.0)),
            lit(3.0)
        )
    );
}

// ========================================
// PARSER TESTS - FUNCTIONS
// ========================================

#[test]
fn parser_parses_function_calls() {
    let cases = [
        ("sqrt(4)", UnaryFunction::Sqrt),
        ("sin(4)", UnaryFunction::Sin),
        ("cos(4)", UnaryFunction::Cos),
        ("tan(4)", UnaryFunction::Tan),
        ("lg(4)", UnaryFunction::Log10),
        ("ln(4)", UnaryFunction::Ln),
    ];
    for (input, func) in cases {
        assert_eq!(parse(input).unwrap(), Expression::unary(func, lit(4.0)), "{}", input);
    }
}

#[test]
fn parser_function_argument_is_full_expression() {
    assert_eq!(
        parse("sin(pi/2)").unwrap(),
        Expression::unary(
            UnaryFunction::Sin,
            bin(BinaryOperator::Divide, lit(std::f64::consts::PI), lit(2.0))
        )
    );
}

#[test]
fn parser_function_requires_parentheses() {
    assert_eq!(
        parse("sqrt 4"),
        Err(SyntaxError::Parse(ParseError::UnexpectedToken {
            expected: Token::LParen,
            found: Token::Number(4.0),
        }))
    );
}

// ========================================
// PARSER TESTS - ERRORS
// ========================================

#[test]
fn parser_rejects_unbalanced_right_paren() {
    assert_eq!(
        parse("1+2*3)"),
        Err(SyntaxError::Parse(ParseError::TrailingInput(Token::RParen)))
    );
}

#[test]
fn parser_rejects_unclosed_left_paren() {
    assert_eq!(
        parse("(1+2*3"),
        Err(SyntaxError::Parse(ParseError::UnexpectedToken {
            expected: Token::RParen,
            found: Token::EOF,
        }))
    );
    assert!(parse("1*(2+3").is_err());
}

#[test]
fn parser_rejects_trailing_tokens() {
    assert_eq!(
        parse("1 2"),
        Err(SyntaxError::Parse(ParseError::TrailingInput(Token::Number(2.0))))
    );
}

#[test]
fn parser_rejects_dangling_operator() {
    assert_eq!(
        parse("1+"),
        Err(SyntaxError::Parse(ParseError::InvalidFactor(Token::EOF)))
    );
}

#[test]
fn parser_rejects_double_factorial() {
    assert_eq!(
        parse("3!!"),
        Err(SyntaxError::Parse(ParseError::TrailingInput(Token::Exclamation)))
    );
}

#[test]
fn parser_rejects_bare_bang() {
    assert_eq!(
        parse("!!"),
        Err(SyntaxError::Parse(ParseError::InvalidFactor(Token::Exclamation)))
    );
}

#[test]
fn parser_surfaces_lex_errors() {
    assert_eq!(
        parse("2 + foo"),
        Err(SyntaxError::Lex(LexError::UnknownIdentifier("foo".to_string())))
    );
}

#[test]
fn parser_new_fails_on_first_token() {
    assert!(matches!(
        Parser::new(Lexer::new("#")),
        Err(SyntaxError::Lex(LexError::InvalidCharacter('#')))
    ));
}

#[test]
fn parse_error_messages_name_tokens() {
    let err = parse("(1").unwrap_err();
    assert_eq!(err.to_string(), "Parse error: Expected ')', found end of input");
}

// ========================================
// PARSER TESTS - NESTING LIMIT
// ========================================

fn too_deep() -> SyntaxError {
    SyntaxError::Parse(ParseError::NestingTooDeep(MAX_NESTING_DEPTH))
}

#[test]
fn parser_accepts_nesting_up_to_limit() {
    let input = format!(
        "{}1{}",
        "(".repeat(MAX_NESTING_DEPTH),
        ")".repeat(MAX_NESTING_DEPTH)
    );
    assert_eq!(parse(&input), Ok(lit(1.0)));
}

#[test]
fn parser_rejects_deep_parentheses() {
    let input = format!(
        "{}1{}",
        "(".repeat(MAX_NESTING_DEPTH + 1),
        ")".repeat(MAX_NESTING_DEPTH + 1)
    );
    assert_eq!(parse(&input), Err(too_deep()));

    let input = format!("{}1", "(".repeat(100_000));
    assert_eq!(parse(&input), Err(too_deep()));
}

#[test]
fn parser_rejects_long_sign_runs() {
    let input = format!("{}1", "-".repeat(100_000));
    assert_eq!(parse(&input), Err(too_deep()));

    let input = format!("{}1", "+".repeat(100_000));
    assert_eq!(parse(&input), Err(too_deep()));
}

#[test]
fn parser_rejects_deep_function_calls() {
    let input = format!("{}1", "sqrt(".repeat(100_000));
    assert_eq!(parse(&input), Err(too_deep()));
}

#[test]
fn parser_rejects_long_operator_chains() {
    let input = format!("{}1", "1+".repeat(100_000));
    assert_eq!(parse(&input), Err(too_deep()));

    let input = format!("{}2", "2^".repeat(100_000));
    assert_eq!(parse(&input), Err(too_deep()));
}

#[test]
fn nesting_depth_is_released_between_siblings() {
    let group = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    let input = format!("{} * {} - {}", group, group, group);
    assert!(parse(&input).is_ok());
}

#[test]
fn lenient_parser_still_limits_nesting() {
    let input = format!("{}1", "(".repeat(100_000));
    assert_eq!(parse_with(&input, ParserOptions::lenient()), Err(too_deep()));
}

// ========================================
// PARSER TESTS - LENIENT PARENTHESES
// ========================================

#[test]
fn lenient_parser_closes_open_paren() {
    let (expr, warnings) = parse_with("(1+2*3", ParserOptions::lenient()).unwrap();
    assert_eq!(
        expr,
        bin(
            BinaryOperator::Add,
            lit(1.0),
            bin(BinaryOperator::Multiply, lit(2.0), lit(3.0))
        )
    );
    assert_eq!(warnings, vec![ParseWarning::UnclosedParenthesis]);
}

#[test]
fn lenient_parser_closes_function_call() {
    let (expr, warnings) = parse_with("2*(1+sqrt(4", ParserOptions::lenient()).unwrap();
    assert_eq!(
        expr,
        bin(
            BinaryOperator::Multiply,
            lit(2.0),
            bin(
                BinaryOperator::Add,
                lit(1.0),
                Expression::unary(UnaryFunction::Sqrt, lit(4.0))
            )
        )
    );
    assert_eq!(warnings.len(), 2);
}

#[test]
fn lenient_parser_still_rejects_stray_right_paren() {
    assert!(parse_with("1+2)", ParserOptions::lenient()).is_err());
}

#[test]
fn strict_parse_has_no_warnings() {
    let (_, warnings) = parse_with("(1+2)", ParserOptions::default()).unwrap();
    assert!(warnings.is_empty());
}

// ========================================
// AST TESTS
// ========================================

#[test]
fn parsing_twice_yields_equal_trees() {
    let input = "1+3*5!-sqrt(16)/lg(100)";
    assert_eq!(parse(input).unwrap(), parse(input).unwrap());
}

#[test]
fn expression_display_is_fully_parenthesized() {
    assert_eq!(parse("-2^2").unwrap().to_string(), "((0 - 2) ^ 2)");
    assert_eq!(parse("sqrt(4)+3!").unwrap().to_string(), "(sqrt(4) + (3)!)");
}

#[test]
fn expression_counts_nodes() {
    assert_eq!(parse("1+2*3").unwrap().node_count(), 5);
    assert_eq!(parse("sqrt(4)").unwrap().node_count(), 2);
}

#[test]
fn expression_serializes_to_json() {
    let json = serde_json::to_value(parse("1+2").unwrap()).unwrap();
    assert_eq!(json["BinaryOp"]["op"], "Add");
    assert_eq!(json["BinaryOp"]["left"]["Literal"], 1.0);

    let back: Expression = serde_json::from_value(json).unwrap();
    assert_eq!(back, parse("1+2").unwrap());
}
