use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;

use crate::parser::error::convert_pest_error;
use crate::parser::{ParseError, ParseErrorKind, Span};
use crate::reader::{NodeTag, ParseNode};

/// Default limit on bracket nesting accepted by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Parser)]
#[grammar = "parser/lispy.pest"]
pub struct LispyParser;

/// Parse one line into its generic parse tree, rooted at [`Rule::lispy`].
pub fn parse(source: &str) -> Result<Pair<'_, Rule>, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Pair<'_, Rule>, ParseError> {
    check_nesting(source, max_depth)?;

    let mut pairs =
        LispyParser::parse(Rule::lispy, source).map_err(|e| convert_pest_error(e, source))?;
    pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            source,
            Span::new(0, source.len()),
        )
    })
}

/// Reject lines nested deeper than `max_depth` or with a bracket left open.
///
/// Runs before the grammar so that pathological nesting never reaches the
/// recursive descent. Mismatched closers are left for the grammar to report.
fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut open: Vec<(usize, char)> = Vec::new();

    for (pos, c) in source.char_indices() {
        match c {
            '(' | '{' => {
                open.push((pos, c));
                if open.len() > max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded {
                            depth: open.len(),
                            max_depth,
                        },
                        source,
                        Span::new(pos, pos + 1),
                    ));
                }
            }
            ')' | '}' => {
                if open.pop().is_none() {
                    // Unbalanced closer: the grammar gives the better message.
                    return Ok(());
                }
            }
            _ => {}
        }
    }

    match open.first() {
        Some(&(pos, delimiter)) => Err(ParseError::new(
            ParseErrorKind::UnclosedDelimiter { delimiter },
            source,
            Span::new(pos, pos + 1),
        )),
        None => Ok(()),
    }
}

impl<'i> ParseNode for Pair<'i, Rule> {
    type Children = Pairs<'i, Rule>;

    fn tag(&self) -> NodeTag {
        match self.as_rule() {
            Rule::lispy => NodeTag::Root,
            Rule::number => NodeTag::Number,
            Rule::symbol => NodeTag::Symbol,
            Rule::sexpr => NodeTag::SExpr,
            Rule::qexpr => NodeTag::QExpr,
            _ => NodeTag::Artifact,
        }
    }

    fn contents(&self) -> &str {
        self.as_str()
    }

    fn children(&self) -> Self::Children {
        self.clone().into_inner()
    }
}
