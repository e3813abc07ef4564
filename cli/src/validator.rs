use reedline::{ValidationResult, Validator};

use crate::lexer::calculate_depth;

/// Keeps the editor open while a bracket is still unclosed.
pub struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        if calculate_depth(line) > 0 {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Complete
        }
    }
}
