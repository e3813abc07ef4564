//! Conversion from a generic parse tree into [`Expr`].
//!
//! The reader only sees trees through [`ParseNode`], so it does not depend
//! on the shape of any particular grammar implementation. This is the single
//! place where stringly-tagged nodes are turned into the closed `Expr` set.

mod node;

#[cfg(test)]
mod reader_test;

pub use node::{NodeTag, ParseNode};

use crate::values::{ErrorKind, Expr, ListBuilder, ListKind};

/// Build the value tree for `node`.
///
/// Walks the tree with an explicit stack of open compounds, so nesting depth
/// is limited by memory rather than by the call stack.
pub fn read<N: ParseNode>(node: &N) -> Expr {
    let kind = match classify(node) {
        Shape::Leaf(expr) => return expr,
        Shape::List(kind) => kind,
    };

    let mut stack = vec![Frame {
        list: open_list(kind),
        children: node.children(),
    }];
    let mut finished = None;

    while let Some(frame) = stack.last_mut() {
        if let Some(done) = finished.take() {
            frame.list.push(done);
        }

        match frame.children.next() {
            Some(child) if is_noise(&child) => {
                tracing::trace!(tag = %child.tag(), contents = child.contents(), "skipping child");
            }
            Some(child) => {
                tracing::trace!(tag = %child.tag(), "adding child");
                match classify(&child) {
                    Shape::Leaf(expr) => {
                        frame.list.push(expr);
                    }
                    Shape::List(kind) => stack.push(Frame {
                        list: open_list(kind),
                        children: child.children(),
                    }),
                }
            }
            None => {
                finished = stack.pop().map(|frame| frame.list.build());
            }
        }
    }

    finished.unwrap_or_else(Expr::sexpr)
}

/// Parse a numeric literal, producing an error value when it is out of the
/// normal `f64` range in either direction.
///
/// Text with a non-zero digit that rounds to zero or to a subnormal is out
/// of range just like text that overflows to infinity.
pub fn read_number(text: &str) -> Expr {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && !underflows(text, value) => Expr::Number(value),
        _ => ErrorKind::InvalidNumber.into(),
    }
}

fn underflows(text: &str, value: f64) -> bool {
    !value.is_normal() && text.bytes().any(|b| matches!(b, b'1'..=b'9'))
}

/// Every compound starts out as an empty S-expression and is re-tagged once
/// its node turns out to be a Q-expression.
fn open_list(kind: ListKind) -> ListBuilder {
    let mut list = ListBuilder::sexpr();
    if kind != list.kind() {
        list.retag(kind);
    }
    list
}

struct Frame<I> {
    list: ListBuilder,
    children: I,
}

enum Shape {
    Leaf(Expr),
    List(ListKind),
}

fn classify<N: ParseNode>(node: &N) -> Shape {
    match node.tag() {
        NodeTag::Number => Shape::Leaf(read_number(node.contents())),
        NodeTag::Symbol => Shape::Leaf(Expr::symbol(node.contents())),
        NodeTag::QExpr => Shape::List(ListKind::QExpr),
        NodeTag::Root | NodeTag::SExpr | NodeTag::Artifact => Shape::List(ListKind::SExpr),
    }
}

/// Bracket punctuation and grammar artifacts carry no value.
fn is_noise<N: ParseNode>(node: &N) -> bool {
    node.tag() == NodeTag::Artifact || matches!(node.contents(), "(" | ")" | "{" | "}")
}
