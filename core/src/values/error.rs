//! Failures that surface as [`Expr::Error`](super::Expr::Error) values.
//!
//! These never unwind. The reader and the evaluator convert them into error
//! values, which then travel through the tree like any other value.

use thiserror::Error;

/// Every kind of error value the core can produce.
///
/// The `Display` text is the exact message stored in the error value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A numeric token that does not denote a finite `f64`.
    #[error("invalid number")]
    InvalidNumber,

    /// An operator symbol outside `+ - * /`.
    #[error("unrecognized operator")]
    UnrecognizedOperator,

    /// Right operand of `/` is zero.
    #[error("division or modulo by zero")]
    DivisionByZero,

    /// An arithmetic operand that is not a number.
    #[error("type mismatch")]
    TypeMismatch,

    /// An S-expression with operands whose head is not a symbol.
    #[error("S-expression does not start with symbol")]
    NotAnOperator,

    /// Evaluation nested deeper than the configured limit.
    #[error("evaluation depth exceeds maximum of {max_depth} levels")]
    DepthExceeded { max_depth: usize },
}
