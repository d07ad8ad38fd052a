//! Assertion helpers built on top of [`HasMethod`].
//!
//! These produce the `Failed asserting that ...` reports a test harness
//! would surface; the predicate itself stays boolean and total.

use crate::constraint::HasMethod;
use crate::error::SpecError;
use crate::reflect::{Resolver, Subject};
use thiserror::Error;

/// Failure raised by the assertion helpers.
#[derive(Debug, Error)]
pub enum AssertionError {
    /// The specification string was invalid.
    #[error(transparent)]
    Invalid(#[from] SpecError),

    /// The subject did not satisfy (or unexpectedly satisfied) the predicate.
    #[error("Failed asserting that {subject} {description}.")]
    Failed {
        /// Rendering of the examined subject.
        subject: String,
        /// Description of the predicate that did not hold.
        description: String,
    },
}

/// Assert that `subject` has a method fulfilling `spec`.
pub fn assert_has_method(
    spec: &str,
    subject: &Subject<'_>,
    resolver: &dyn Resolver,
) -> Result<(), AssertionError> {
    let constraint = HasMethod::new(spec)?;
    if constraint.matches(subject, resolver) {
        Ok(())
    } else {
        Err(AssertionError::Failed {
            subject: subject.to_string(),
            description: constraint.describe(),
        })
    }
}

/// Assert that `subject` has no method fulfilling `spec`.
pub fn assert_not_has_method(
    spec: &str,
    subject: &Subject<'_>,
    resolver: &dyn Resolver,
) -> Result<(), AssertionError> {
    let constraint = HasMethod::new(spec)?;
    if constraint.matches(subject, resolver) {
        Err(AssertionError::Failed {
            subject: subject.to_string(),
            description: constraint.describe_negation(),
        })
    } else {
        Ok(())
    }
}
