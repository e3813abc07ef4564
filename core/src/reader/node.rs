use core::fmt;

/// The role a parse-tree node plays, as far as the reader cares.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeTag {
    /// The whole line; read as an S-expression.
    Root,
    Number,
    Symbol,
    SExpr,
    QExpr,
    /// Anything the grammar emits that carries no value (anchors, whitespace).
    Artifact,
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeTag::Root => "root",
            NodeTag::Number => "number",
            NodeTag::Symbol => "symbol",
            NodeTag::SExpr => "sexpr",
            NodeTag::QExpr => "qexpr",
            NodeTag::Artifact => "artifact",
        };
        f.write_str(name)
    }
}

/// A node of a generic parse tree: a tag, its literal text, and ordered
/// children.
pub trait ParseNode: Sized {
    type Children: Iterator<Item = Self>;

    fn tag(&self) -> NodeTag;

    /// The source text this node spans.
    fn contents(&self) -> &str;

    fn children(&self) -> Self::Children;
}
