//! Rendering of values back to text.
//!
//! Numbers use a fixed six-decimal format, so `7` prints as `7.000000`.
//! Number, symbol and compound output reads back as the same tree.

use core::fmt;

use crate::values::{Cells, Expr, ListKind};

/// Render `expr` to a new string.
pub fn format(expr: &Expr) -> String {
    expr.to_string()
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{:.6}", n),
            Expr::Symbol(s) => f.write_str(s),
            Expr::Error(message) => write!(f, "Error: {}", message),
            Expr::SExpr(cells) => write_list(f, ListKind::SExpr, cells),
            Expr::QExpr(cells) => write_list(f, ListKind::QExpr, cells),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, kind: ListKind, cells: &Cells) -> fmt::Result {
    write!(f, "{}", kind.open())?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", kind.close())
}
