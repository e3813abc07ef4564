//! Unit tests for the reader.

use super::*;
use crate::parser::parse;
use crate::test_utils;
use pretty_assertions::assert_eq;

fn read_str(input: &str) -> Expr {
    let root = parse(input).unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e));
    read(&root)
}

fn num(x: f64) -> Expr {
    Expr::number(x)
}

fn sym(s: &str) -> Expr {
    Expr::symbol(s)
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_read_number() {
    assert_eq!(read_number("42"), num(42.0));
    assert_eq!(read_number("-0.5"), num(-0.5));
    assert_eq!(read_number(".25"), num(0.25));
}

#[test]
fn test_read_number_overflow() {
    let huge = "9".repeat(400);
    assert_eq!(read_number(&huge), Expr::error("invalid number"));
    assert_eq!(read_number(&format!("-{}", huge)), Expr::error("invalid number"));
}

#[test]
fn test_read_number_malformed() {
    assert_eq!(read_number(""), Expr::error("invalid number"));
    assert_eq!(read_number("1.2.3"), Expr::error("invalid number"));
    assert_eq!(read_number("inf"), Expr::error("invalid number"));
    assert_eq!(read_number("NaN"), Expr::error("invalid number"));
}

#[test]
fn test_read_number_underflow() {
    let tiny = format!("0.{}1", "0".repeat(400));
    assert_eq!(read_number(&tiny), Expr::error("invalid number"));
    assert_eq!(read_number(&format!("-{}", tiny)), Expr::error("invalid number"));

    // Rounds to a subnormal rather than to zero.
    let subnormal = format!("0.{}5", "0".repeat(315));
    assert_eq!(read_number(&subnormal), Expr::error("invalid number"));
}

#[test]
fn test_read_number_zero_is_not_underflow() {
    assert_eq!(read_number("0"), num(0.0));
    assert_eq!(read_number("-0.000"), num(-0.0));
    assert_eq!(read_number(&format!("0.{}", "0".repeat(400))), num(0.0));
}

// ============================================================================
// Trees from the grammar
// ============================================================================

#[test]
fn test_root_is_sexpr() {
    assert_eq!(
        read_str("+ 1 2"),
        Expr::sexpr_of([sym("+"), num(1.0), num(2.0)])
    );
}

#[test]
fn test_empty_line() {
    assert_eq!(read_str(""), Expr::sexpr());
    assert_eq!(read_str("   "), Expr::sexpr());
}

#[test]
fn test_nested_sexpr() {
    assert_eq!(
        read_str("(+ 1 (* 2 3))"),
        Expr::sexpr_of([Expr::sexpr_of([
            sym("+"),
            num(1.0),
            Expr::sexpr_of([sym("*"), num(2.0), num(3.0)]),
        ])])
    );
}

#[test]
fn test_qexpr() {
    assert_eq!(
        read_str("{+ 1 2}"),
        Expr::sexpr_of([Expr::qexpr_of([sym("+"), num(1.0), num(2.0)])])
    );
}

#[test]
fn test_open_list_retags_qexpr() {
    assert_eq!(open_list(ListKind::SExpr).build(), Expr::sexpr());
    let list = open_list(ListKind::QExpr);
    assert_eq!(list.kind(), ListKind::QExpr);
    assert_eq!(list.build(), Expr::qexpr());
}

#[test]
fn test_empty_brackets() {
    assert_eq!(read_str("()"), Expr::sexpr_of([Expr::sexpr()]));
    assert_eq!(read_str("{}"), Expr::sexpr_of([Expr::qexpr()]));
    assert_eq!(
        read_str("({} ())"),
        Expr::sexpr_of([Expr::sexpr_of([Expr::qexpr(), Expr::sexpr()])])
    );
}

#[test]
fn test_invalid_number_inside_tree() {
    let input = format!("(+ 1 {})", "9".repeat(400));
    assert_eq!(
        read_str(&input),
        Expr::sexpr_of([Expr::sexpr_of([
            sym("+"),
            num(1.0),
            Expr::error("invalid number"),
        ])])
    );
}

#[test]
fn test_symbol_text_is_verbatim() {
    assert_eq!(read_str("/"), Expr::sexpr_of([sym("/")]));
    assert_eq!(read_str("-"), Expr::sexpr_of([sym("-")]));
}

// ============================================================================
// Trees from other producers
// ============================================================================

/// A hand-built tree in the style of parsers that keep punctuation and
/// anchor tokens as children.
#[derive(Debug, Clone)]
struct TestNode {
    tag: NodeTag,
    contents: &'static str,
    children: Vec<TestNode>,
}

impl TestNode {
    fn leaf(tag: NodeTag, contents: &'static str) -> Self {
        Self {
            tag,
            contents,
            children: vec![],
        }
    }

    fn branch(tag: NodeTag, children: Vec<TestNode>) -> Self {
        Self {
            tag,
            contents: "",
            children,
        }
    }
}

impl ParseNode for TestNode {
    type Children = std::vec::IntoIter<TestNode>;

    fn tag(&self) -> NodeTag {
        self.tag
    }

    fn contents(&self) -> &str {
        self.contents
    }

    fn children(&self) -> Self::Children {
        self.children.clone().into_iter()
    }
}

#[test]
fn test_punctuation_and_artifacts_are_skipped() {
    use NodeTag::*;
    test_utils::init_test_logging();

    // > regex  sexpr[ '(' + 1 qexpr['{' 2 '}'] ')' ]  regex
    let root = TestNode::branch(
        Root,
        vec![
            TestNode::leaf(Artifact, ""),
            TestNode::branch(
                SExpr,
                vec![
                    TestNode::leaf(Symbol, "("),
                    TestNode::leaf(Symbol, "+"),
                    TestNode::leaf(Number, "1"),
                    TestNode::branch(
                        QExpr,
                        vec![
                            TestNode::leaf(Symbol, "{"),
                            TestNode::leaf(Number, "2"),
                            TestNode::leaf(Symbol, "}"),
                        ],
                    ),
                    TestNode::leaf(Symbol, ")"),
                ],
            ),
            TestNode::leaf(Artifact, ""),
        ],
    );

    assert_eq!(
        read(&root),
        Expr::sexpr_of([Expr::sexpr_of([
            sym("+"),
            num(1.0),
            Expr::qexpr_of([num(2.0)]),
        ])])
    );
}

#[test]
fn test_leaf_root() {
    assert_eq!(read(&TestNode::leaf(NodeTag::Number, "7")), num(7.0));
    assert_eq!(read(&TestNode::leaf(NodeTag::Symbol, "*")), sym("*"));
}

/// A synthetic chain `((((... 1 ...))))` that allocates nothing per level.
#[derive(Debug, Clone)]
enum Chain {
    Link(usize),
    End,
}

impl ParseNode for Chain {
    type Children = std::vec::IntoIter<Chain>;

    fn tag(&self) -> NodeTag {
        match self {
            Chain::Link(_) => NodeTag::SExpr,
            Chain::End => NodeTag::Number,
        }
    }

    fn contents(&self) -> &str {
        match self {
            Chain::Link(_) => "",
            Chain::End => "1",
        }
    }

    fn children(&self) -> Self::Children {
        match self {
            Chain::Link(0) => vec![Chain::End].into_iter(),
            Chain::Link(n) => vec![Chain::Link(n - 1)].into_iter(),
            Chain::End => Vec::new().into_iter(),
        }
    }
}

#[test]
fn test_deep_nesting_does_not_recurse() {
    let depth = 100_000;
    let expr = read(&Chain::Link(depth));

    let mut levels = 0;
    let mut cursor = &expr;
    while let Expr::SExpr(cells) = cursor {
        assert_eq!(cells.len(), 1);
        levels += 1;
        cursor = &cells[0];
    }
    assert_eq!(levels, depth + 1);
    assert_eq!(*cursor, num(1.0));
}
