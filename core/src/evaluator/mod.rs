//! Tree-walking evaluator for Lispy expressions.
//!
//! Reduces an expression tree to a single value. Errors are ordinary
//! [`Expr::Error`] values: the first one produced anywhere in an
//! S-expression becomes the result of that S-expression.
//!
//! ## Design Principles
//!
//! - **Never panic**: all trees are handled, ill-typed ones produce error values
//! - **Stack-safe**: depth tracking turns runaway nesting into an error value
//! - **Quoting**: Q-expressions are values and are never looked into
//!
//! ## Example
//!
//! ```
//! use lispy_core::{evaluator, parser, reader};
//!
//! let root = parser::parse("(+ 1 (* 2 3))").unwrap();
//! let result = evaluator::eval(reader::read(&root));
//! assert_eq!(result.as_number(), Some(7.0));
//! ```

mod eval;
mod operators;


pub use eval::{Evaluator, apply};
pub use operators::Operator;

use crate::values::Expr;

/// Default limit on S-expression nesting during evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Evaluate an expression with the default depth limit.
pub fn eval(expr: Expr) -> Expr {
    eval_with_limits(expr, DEFAULT_MAX_DEPTH)
}

/// Evaluate an expression, producing an error value instead of nesting
/// deeper than `max_depth` S-expressions.
pub fn eval_with_limits(expr: Expr, max_depth: usize) -> Expr {
    Evaluator::new(max_depth).eval(expr)
}
