//! Public API for the Lispy line interface.
//!
//! # Example
//!
//! ```
//! use lispy_core::api::{Engine, EngineOptions, EvalMode};
//!
//! let engine = Engine::new(EngineOptions {
//!     mode: EvalMode::Evaluate,
//!     ..EngineOptions::default()
//! });
//!
//! assert_eq!(engine.process_line("(- 10 1 2 3)").unwrap(), "4.000000");
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::Engine;
pub use error::{Diagnostic, Severity};
pub use options::{EngineOptions, EvalMode, ExecutionOptions, ParseOptions};
