//! Error rendering using ariadne
//!
//! Turns a [`ParseError`] into a report showing the offending line with the
//! failing span underlined, the error code and any help lines.

use crate::{Diagnostic, ParseError, Severity};
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use lispy::{Engine, render_error};
///
/// let engine = Engine::default();
/// if let Err(e) = engine.evaluate_line("(+ 1 2") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &ParseError) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &ParseError, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String
pub fn render_error_to_string(error: &ParseError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes
///
/// Same as [`render_error_to_string`] but without ANSI color codes, so the
/// output is easy to compare in tests.
pub fn render_error_to_string_no_color(error: &ParseError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &ParseError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostic(&error.source, &error.to_diagnostic(), writer, use_color)
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
    };

    // Widen a zero-width span to cover the character it points at.
    let mut span = diag.span.0.clone();
    if span.is_empty() {
        if let Some(c) = source.get(span.start..).and_then(|rest| rest.chars().next()) {
            span.end += c.len_utf8();
        }
    }

    let config = ariadne::Config::default()
        .with_color(use_color)
        .with_index_type(IndexType::Byte);
    let mut report = Report::build(kind, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(config);

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(colors.next()),
    );

    for help_msg in &diag.help {
        report = report.with_help(help_msg);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
