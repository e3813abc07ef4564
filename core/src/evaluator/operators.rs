//! Arithmetic operators.

use core::str::FromStr;

use crate::values::ErrorKind;

/// The operators a symbol can name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Combine two numbers.
    ///
    /// Follows IEEE 754 except that `/` by zero (either sign) is an error.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ErrorKind> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right == 0.0 {
                    Err(ErrorKind::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }

    /// The result of applying this operator to a single operand.
    pub fn apply_unary(self, operand: f64) -> f64 {
        match self {
            Operator::Sub => -operand,
            Operator::Add | Operator::Mul | Operator::Div => operand,
        }
    }
}

impl FromStr for Operator {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            _ => Err(ErrorKind::UnrecognizedOperator),
        }
    }
}
