//! Debug rendering of a raw parse tree.

use core::fmt::Write;

use crate::reader::ParseNode;

/// Render `node` and its descendants, one per line, two spaces per level.
///
/// Leaves are followed by their quoted contents:
///
/// ```text
/// root
///   sexpr
///     symbol '+'
///     number '1'
///   artifact ''
/// ```
pub fn dump_tree<N: ParseNode>(node: &N) -> String {
    let mut out = String::new();
    let mut stack = vec![(0usize, node.children())];

    push_line(&mut out, 0, node);

    // Each frame walks one node's children; the root was printed above.
    while let Some((depth, children)) = stack.last_mut() {
        let depth = *depth;
        match children.next() {
            Some(child) => {
                push_line(&mut out, depth + 1, &child);
                stack.push((depth + 1, child.children()));
            }
            None => {
                stack.pop();
            }
        }
    }

    out
}

fn push_line<N: ParseNode>(out: &mut String, depth: usize, node: &N) {
    let mut children = node.children();
    let is_leaf = children.next().is_none();
    let _ = write!(out, "{:indent$}{}", "", node.tag(), indent = depth * 2);
    if is_leaf {
        let _ = write!(out, " '{}'", node.contents());
    }
    out.push('\n');
}
