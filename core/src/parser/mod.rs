mod dump;
pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use dump::dump_tree;
pub use error::{ParseError, ParseErrorKind};
pub use parser::{DEFAULT_MAX_DEPTH, LispyParser, Rule, parse, parse_with_max_depth};
pub use syntax::Span;
