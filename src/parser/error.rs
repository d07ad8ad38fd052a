use thiserror::Error;

/// Error raised when a specification string violates the grammar.
///
/// Carries the exact unconsumed input at the point the parse failed, so the
/// reporting layer can show precisely where the specification went wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("syntax error at \"{at}\"")]
pub struct SyntaxError {
    /// Unconsumed input at the failure point.
    pub at: String,
}

impl SyntaxError {
    /// Create a syntax error positioned at the given unconsumed input.
    pub fn new(at: impl Into<String>) -> Self {
        Self { at: at.into() }
    }
}
