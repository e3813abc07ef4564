//! Lispy - a small S-expression calculator
//!
//! # Overview
//!
//! Lispy reads one line at a time, turns it into a tree of numbers, symbols
//! and lists, and reduces that tree with prefix arithmetic. Two list forms
//! exist:
//!
//! - **S-expressions** `( ... )` are evaluated: the head names an operator,
//!   the rest are its operands.
//! - **Q-expressions** `{ ... }` are quoted: they are values and are never
//!   evaluated.
//!
//! Evaluation never fails in the Rust sense. Division by zero, a bad
//! operator or an ill-typed operand all produce an error value that prints
//! as `Error: <message>`. Only text the grammar rejects is reported as a
//! [`ParseError`].
//!
//! # Quick Start
//!
//! ```
//! use lispy::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! assert_eq!(engine.evaluate_line("+ 1 (* 2 3)").unwrap(), "7.000000");
//! assert_eq!(engine.evaluate_line("{1 2 (+ 3 4)}").unwrap(), "{1.000000 2.000000 (+ 3.000000 4.000000)}");
//! assert_eq!(engine.evaluate_line("(/ 10 0)").unwrap(), "Error: division or modulo by zero");
//! ```
//!
//! # Reporting parse errors
//!
//! ```
//! use lispy::{Engine, render_error_to_string_no_color};
//!
//! let engine = Engine::default();
//! let err = engine.evaluate_line("(+ 1 2").unwrap_err();
//! let report = render_error_to_string_no_color(&err);
//! assert!(report.contains("Unclosed delimiter"));
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from lispy_core
pub use lispy_core::api::{
    Diagnostic, Engine, EngineOptions, EvalMode, ExecutionOptions, ParseOptions, Severity,
};

// Re-export the pipeline stages and their types
pub use lispy_core::parser::{ParseError, ParseErrorKind};
pub use lispy_core::values::{self, ErrorKind, Expr};
pub use lispy_core::{evaluator, parser, printer, reader};
