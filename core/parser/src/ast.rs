//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for arithmetic expressions.
//! CONTEXT: The Parser builds this tree bottom-up; the engine's evaluator
//! then walks it to compute a single f64. The node set is closed:
//!
//! - Literal: a number (constants pi and e are folded in at parse time)
//! - BinaryOp: + - * / ^ %
//! - UnaryFunction: sqrt sin cos tan lg ln and postfix !
//!
//! Unary minus is encoded as `0 - operand`; unary plus leaves its operand as is.

use serde::{Deserialize, Serialize};

/// Represents a parsed expression. Every child is exclusively owned.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Expression {
    Literal(f64),

    /// A binary operation: left op right (e.g., 5 + 3).
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// A single-argument function or the postfix factorial.
    UnaryFunction {
        func: UnaryFunction,
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(func: UnaryFunction, operand: Expression) -> Self {
        Expression::UnaryFunction {
            func,
            operand: Box::new(operand),
        }
    }

    /// Builds `0 - operand`, the tree for a prefix minus.
    pub fn negate(operand: Expression) -> Self {
        Expression::binary(BinaryOperator::Subtract, Expression::Literal(0.0), operand)
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Literal(_) => 1,
            Expression::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expression::UnaryFunction { operand, .. } => 1 + operand.node_count(),
        }
    }
}

/// Binary operators, lowest precedence group first.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
    Power,    // ^ (right-associative)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum UnaryFunction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Factorial,
}

impl UnaryFunction {
    /// Name as typed by the user; `None` for the postfix factorial.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            UnaryFunction::Sqrt => Some("sqrt"),
            UnaryFunction::Sin => Some("sin"),
            UnaryFunction::Cos => Some("cos"),
            UnaryFunction::Tan => Some("tan"),
            UnaryFunction::Log10 => Some("lg"),
            UnaryFunction::Ln => Some("ln"),
            UnaryFunction::Factorial => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::Modulo => write!(f, "%"),
            BinaryOperator::Power => write!(f, "^"),
        }
    }
}

impl std::fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().unwrap_or("!"))
    }
}

/// Fully parenthesised infix form, e.g. `((0 - 2) ^ 2)`.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(n) => write!(f, "{}", n),
            Expression::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expression::UnaryFunction {
                func: UnaryFunction::Factorial,
                operand,
            } => write!(f, "({})!", operand),
            Expression::UnaryFunction { func, operand } => write!(f, "{}({})", func, operand),
        }
    }
}
