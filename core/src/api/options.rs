//! Configuration options for the Lispy engine.

/// Configuration options for turning text into a tree.
///
/// # Example
///
/// ```
/// use lispy_core::api::ParseOptions;
///
/// let options = ParseOptions { max_depth: 64 };
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum bracket nesting accepted in one line.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: crate::parser::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for expression evaluation.
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Maximum S-expression nesting during evaluation.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_depth: crate::evaluator::DEFAULT_MAX_DEPTH,
        }
    }
}

/// What [`Engine::process_line`](super::Engine::process_line) does with a
/// line once it is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvalMode {
    /// Read, evaluate, print.
    #[default]
    Evaluate,
    /// Read and print the tree as read.
    ReadOnly,
}

/// Configuration options for the Lispy engine.
///
/// # Example
///
/// ```
/// use lispy_core::api::{EngineOptions, EvalMode, ExecutionOptions, ParseOptions};
///
/// let options = EngineOptions {
///     parse: ParseOptions::default(),
///     execution: ExecutionOptions { max_depth: 500 },
///     mode: EvalMode::ReadOnly,
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub parse: ParseOptions,
    pub execution: ExecutionOptions,
    pub mode: EvalMode,
}
