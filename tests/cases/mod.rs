#![allow(dead_code)]

use lispy::{Engine, EngineOptions, EvalMode, ParseErrorKind};
use once_cell::sync::Lazy;

static EVALUATING: Lazy<Engine> = Lazy::new(|| engine(EvalMode::Evaluate));
static READING: Lazy<Engine> = Lazy::new(|| engine(EvalMode::ReadOnly));

fn engine(mode: EvalMode) -> Engine {
    Engine::new(EngineOptions {
        mode,
        ..EngineOptions::default()
    })
}

/// Run one line through an engine in the given mode, keeping only the kind
/// of a parse failure.
pub fn run(mode: EvalMode, input: &str) -> Result<String, ParseErrorKind> {
    let engine = match mode {
        EvalMode::Evaluate => &*EVALUATING,
        EvalMode::ReadOnly => &*READING,
    };
    engine.process_line(input).map_err(|e| e.kind)
}

pub fn owned(expected: Result<&str, ParseErrorKind>) -> Result<String, ParseErrorKind> {
    expected.map(str::to_string)
}

/// Declare a line transcript.
///
/// `read` is what the line prints as in read-only mode, `evaluated` what it
/// prints as once evaluated. Either may be omitted.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $(read: { $read:expr },)?
        $(evaluated: { $evaluated:expr },)?
    ) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;
            use pretty_assertions::assert_eq;

            $(
                #[test]
                fn read() {
                    assert_eq!(
                        $crate::cases::run(lispy::EvalMode::ReadOnly, $input),
                        $crate::cases::owned($read),
                    );
                }
            )?

            $(
                #[test]
                fn evaluated() {
                    assert_eq!(
                        $crate::cases::run(lispy::EvalMode::Evaluate, $input),
                        $crate::cases::owned($evaluated),
                    );
                }
            )?
        }
    };
}
