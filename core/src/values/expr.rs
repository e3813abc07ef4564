use core::ops::Deref;

use super::ErrorKind;

/// A value: a literal, a symbol, an error, or a compound of values.
///
/// `Number`, `Symbol` and `Error` are leaves. `SExpr` and `QExpr` own their
/// children through [`Cells`]; both may be empty.
///
/// Only dropping is free of recursion. `Clone`, `PartialEq`, `Debug` and
/// `Display` recurse, so format or compare trees no deeper than the parser
/// accepts ([`crate::parser::DEFAULT_MAX_DEPTH`] by default).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Symbol(String),
    Error(String),
    /// Parenthesized, eligible for evaluation.
    SExpr(Cells),
    /// Brace-delimited, never evaluated.
    QExpr(Cells),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    pub fn symbol(text: impl Into<String>) -> Self {
        Expr::Symbol(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Expr::Error(message.into())
    }

    /// An empty S-expression, `()`.
    pub fn sexpr() -> Self {
        Expr::SExpr(Cells::new())
    }

    /// An empty Q-expression, `{}`.
    pub fn qexpr() -> Self {
        Expr::QExpr(Cells::new())
    }

    pub fn sexpr_of(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::SExpr(children.into_iter().collect())
    }

    pub fn qexpr_of(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::QExpr(children.into_iter().collect())
    }

    /// Release this tree and everything it owns.
    ///
    /// Consuming `self` means the tree cannot be released twice.
    pub fn release(self) {
        tracing::trace!(kind = self.kind_name(), "releasing tree");
        drop(self);
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Expr::Error(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expr::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The children of a compound, or `None` for a leaf.
    pub fn cells(&self) -> Option<&Cells> {
        match self {
            Expr::SExpr(cells) | Expr::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn cells_mut(&mut self) -> Option<&mut Cells> {
        match self {
            Expr::SExpr(cells) | Expr::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number",
            Expr::Symbol(_) => "symbol",
            Expr::Error(_) => "error",
            Expr::SExpr(_) => "sexpr",
            Expr::QExpr(_) => "qexpr",
        }
    }
}

impl From<ErrorKind> for Expr {
    fn from(kind: ErrorKind) -> Self {
        Expr::Error(kind.to_string())
    }
}

/// Which compound variant a [`ListBuilder`] produces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListKind {
    SExpr,
    QExpr,
}

impl ListKind {
    pub fn open(self) -> char {
        match self {
            ListKind::SExpr => '(',
            ListKind::QExpr => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            ListKind::SExpr => ')',
            ListKind::QExpr => '}',
        }
    }
}

/// The owned, ordered children of a compound expression.
///
/// Dropping a `Cells` releases the whole subtree without recursing, so trees
/// nested far deeper than the call stack can be released safely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cells(Vec<Expr>);

impl Cells {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Move `child` to the end of the sequence.
    pub fn push(&mut self, child: Expr) -> &mut Self {
        self.0.push(child);
        self
    }

    /// Take the children out, leaving this sequence empty.
    pub fn into_vec(mut self) -> Vec<Expr> {
        core::mem::take(&mut self.0)
    }
}

impl Deref for Cells {
    type Target = [Expr];

    fn deref(&self) -> &[Expr] {
        &self.0
    }
}

impl FromIterator<Expr> for Cells {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Cells {
    type Item = &'a Expr;
    type IntoIter = core::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Cells {
    type Item = Expr;
    type IntoIter = std::vec::IntoIter<Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl Drop for Cells {
    fn drop(&mut self) {
        // Detach grandchildren before each child is freed, so every node is
        // dropped with an empty `Cells` and the default drop never recurses.
        let mut pending = core::mem::take(&mut self.0);
        while let Some(mut expr) = pending.pop() {
            if let Some(cells) = expr.cells_mut() {
                pending.append(&mut cells.0);
            }
        }
    }
}

/// Builds a compound expression one child at a time.
///
/// Appending is only possible here or on [`Cells`], never on a leaf `Expr`.
#[derive(Debug)]
pub struct ListBuilder {
    kind: ListKind,
    cells: Cells,
}

impl ListBuilder {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            cells: Cells::new(),
        }
    }

    pub fn sexpr() -> Self {
        Self::new(ListKind::SExpr)
    }

    pub fn qexpr() -> Self {
        Self::new(ListKind::QExpr)
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Change the variant this builder will produce.
    pub fn retag(&mut self, kind: ListKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Move `child` to the end of the compound being built.
    pub fn push(&mut self, child: Expr) -> &mut Self {
        self.cells.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn build(self) -> Expr {
        match self.kind {
            ListKind::SExpr => Expr::SExpr(self.cells),
            ListKind::QExpr => Expr::QExpr(self.cells),
        }
    }
}
