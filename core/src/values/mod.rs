//! The value model: one recursive sum type shared by the reader, the
//! evaluator and the printer.
//!
//! Every node is exclusively owned by its parent's [`Cells`] or by whoever
//! holds the root. There is no sharing and no cycles, so releasing a tree is
//! a plain walk over owned children.

mod error;
mod expr;


pub use error::ErrorKind;
pub use expr::{Cells, Expr, ListBuilder, ListKind};
