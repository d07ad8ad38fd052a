//! Crate-level error types.

use crate::parser::SyntaxError;
use thiserror::Error;

/// Errors produced by the specification core.
///
/// Only two kinds exist: grammar violations raised during parsing, and the
/// argument-validation wrapper raised when a predicate is built from a
/// malformed raw string. Matching itself is total and never errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The specification string violates the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A raw string passed where a method specification was required failed
    /// to parse.
    #[error("{context} must be method specification, '{input}' ({source}) given.")]
    InvalidSpecification {
        /// Where the offending argument was passed.
        context: String,
        /// The offending input string.
        input: String,
        /// The underlying parser diagnostic.
        source: SyntaxError,
    },
}

/// Convenience result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_specification_message_embeds_input_and_diagnostic() {
        let err = SpecError::InvalidSpecification {
            context: "Argument 1 passed to HasMethod::new()".to_string(),
            input: "public function foo??".to_string(),
            source: SyntaxError::new("??"),
        };
        assert_eq!(
            err.to_string(),
            "Argument 1 passed to HasMethod::new() must be method specification, \
             'public function foo??' (syntax error at \"??\") given."
        );
    }
}
