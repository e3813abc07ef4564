//! Diagnostics exposed at the API boundary.
//!
//! Maps cleanly onto a rendered report: the facade crate turns these into
//! ariadne output, an editor could turn them into LSP diagnostics.

use core::fmt;

use crate::parser::Span;

/// A diagnostic message with a source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Help lines suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "P001").
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
