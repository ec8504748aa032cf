//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates expression trees to a single f64.
//! CONTEXT: After an expression is parsed into an AST, this module traverses
//! the tree depth-first (left operand before right) and computes the result.
//! Evaluation is a pure function of the tree; the first failing node aborts it.
//!
//! DOMAIN RULES:
//! - Division and modulo fail on an exact zero divisor; modulo keeps the
//!   dividend's sign.
//! - Power never fails: a negative base with a fractional exponent is NaN.
//! - sqrt fails below zero, lg and ln fail at or below zero.
//! - tan fails only when cos(x) == 0.0 exactly.
//! - Factorial needs a non-negative value within 1e-10 of an integer.

use crate::error::EvalError;
use parser::{BinaryOperator, Expression, UnaryFunction};

/// Distance from the nearest integer still accepted by factorial.
pub const FACTORIAL_TOLERANCE: f64 = 1e-10;

/// Anything that can be reduced to a number.
pub trait Evaluate {
    fn evaluate(&self) -> Result<f64, EvalError>;
}

impl Evaluate for Expression {
    fn evaluate(&self) -> Result<f64, EvalError> {
        match self {
            Expression::Literal(n) => Ok(*n),

            Expression::BinaryOp { op, left, right } => {
                let left_val = left.evaluate()?;
                let right_val = right.evaluate()?;
                apply_binary(*op, left_val, right_val)
            }

            Expression::UnaryFunction { func, operand } => {
                let val = operand.evaluate()?;
                apply_function(*func, val)
            }
        }
    }
}

/// Evaluates a tree. Same as `expr.evaluate()`.
pub fn evaluate(expr: &Expression) -> Result<f64, EvalError> {
    expr.evaluate()
}

fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Subtract => Ok(left - right),
        BinaryOperator::Multiply => Ok(left * right),
        BinaryOperator::Divide => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        }
        BinaryOperator::Modulo => {
            if right == 0.0 {
                return Err(EvalError::ModuloByZero);
            }
            // f64 `%` is fmod: the result takes the dividend's sign
            Ok(left % right)
        }
        BinaryOperator::Power => Ok(left.powf(right)),
    }
}

fn apply_function(func: UnaryFunction, val: f64) -> Result<f64, EvalError> {
    match func {
        UnaryFunction::Sqrt => {
            if val < 0.0 {
                return Err(EvalError::NegativeSqrt(val));
            }
            Ok(val.sqrt())
        }
        UnaryFunction::Sin => Ok(val.sin()),
        UnaryFunction::Cos => Ok(val.cos()),
        UnaryFunction::Tan => {
            // Exact comparison; rounding means this almost never fires at pi/2.
            if val.cos() == 0.0 {
                return Err(EvalError::TangentUndefined(val));
            }
            Ok(val.tan())
        }
        UnaryFunction::Log10 => {
            if val <= 0.0 {
                return Err(EvalError::NonPositiveLogarithm {
                    function: "Logarithm",
                    value: val,
                });
            }
            Ok(val.log10())
        }
        UnaryFunction::Ln => {
            if val <= 0.0 {
                return Err(EvalError::NonPositiveLogarithm {
                    function: "Natural logarithm",
                    value: val,
                });
            }
            Ok(val.ln())
        }
        UnaryFunction::Factorial => factorial(val),
    }
}

/// n! as a double. Large n overflows to infinity rather than failing.
pub fn factorial(val: f64) -> Result<f64, EvalError> {
    if val < 0.0 {
        return Err(EvalError::NegativeFactorial(val));
    }
    if val.is_nan() {
        return Err(EvalError::NonIntegerFactorial(val));
    }
    if val.is_infinite() {
        return Ok(f64::INFINITY);
    }

    let rounded = val.round();
    if (val - rounded).abs() > FACTORIAL_TOLERANCE {
        return Err(EvalError::NonIntegerFactorial(val));
    }

    let n = rounded as u64;
    let mut result = 1.0_f64;
    for i in 2..=n {
        result *= i as f64;
        // Past 170! the product is infinite and stays so
        if result.is_infinite() {
            break;
        }
    }
    Ok(result)
}
