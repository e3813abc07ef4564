//! The Lispy line-processing engine.

use super::{EngineOptions, EvalMode};
use crate::parser::{self, ParseError};
use crate::values::Expr;
use crate::{evaluator, printer, reader};

/// Reads, evaluates and prints one line at a time.
///
/// The engine owns only its options. Each call builds a fresh tree that is
/// released before the call returns, so nothing carries over between lines.
///
/// # Example
///
/// ```
/// use lispy_core::api::{Engine, EngineOptions};
///
/// let engine = Engine::new(EngineOptions::default());
/// assert_eq!(engine.evaluate_line("(+ 1 (* 2 3))").unwrap(), "7.000000");
/// assert_eq!(engine.read_line("{+ 1 2}").unwrap(), "({+ 1.000000 2.000000})");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse `source` and build its tree without evaluating it.
    pub fn read(&self, source: &str) -> Result<Expr, ParseError> {
        let root = parser::parse_with_max_depth(source, self.options.parse.max_depth)?;
        Ok(reader::read(&root))
    }

    /// Parse, read and evaluate `source`.
    pub fn evaluate(&self, source: &str) -> Result<Expr, ParseError> {
        let expr = self.read(source)?;
        Ok(evaluator::eval_with_limits(
            expr,
            self.options.execution.max_depth,
        ))
    }

    /// Reader, then printer.
    pub fn read_line(&self, text: &str) -> Result<String, ParseError> {
        tracing::debug!(line = text, "reading line");
        let expr = self.read(text)?;
        let rendered = printer::format(&expr);
        expr.release();
        Ok(rendered)
    }

    /// Reader, evaluator, then printer.
    pub fn evaluate_line(&self, text: &str) -> Result<String, ParseError> {
        tracing::debug!(line = text, "evaluating line");
        let result = self.evaluate(text)?;
        if let Expr::Error(message) = &result {
            tracing::debug!(%message, "line evaluated to an error");
        }
        let rendered = printer::format(&result);
        result.release();
        Ok(rendered)
    }

    /// Handle a line according to the configured [`EvalMode`].
    pub fn process_line(&self, text: &str) -> Result<String, ParseError> {
        match self.options.mode {
            EvalMode::Evaluate => self.evaluate_line(text),
            EvalMode::ReadOnly => self.read_line(text),
        }
    }

    /// Render the raw parse tree of `text`, for debugging the grammar.
    pub fn parse_tree(&self, text: &str) -> Result<String, ParseError> {
        let root = parser::parse_with_max_depth(text, self.options.parse.max_depth)?;
        Ok(parser::dump_tree(&root))
    }
}
