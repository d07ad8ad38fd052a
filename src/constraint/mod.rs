//! Boolean predicate adapting a [`MethodSpec`] to heterogeneous subjects.

use crate::error::{Result, SpecError};
use crate::parser::SpecParser;
use crate::reflect::{Resolver, Subject};
use crate::spec::MethodSpec;
use tracing::debug;

/// Predicate that accepts objects, classes, traits and interfaces having a
/// method fulfilling the wrapped specification.
///
/// Evaluation is total: unreflectable subjects, unknown type names and
/// absent methods all collapse to `false` instead of erroring, so the
/// predicate composes safely inside assertion layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasMethod {
    spec: MethodSpec,
}

impl HasMethod {
    /// Build the predicate from a raw specification string.
    ///
    /// Syntax errors are wrapped into [`SpecError::InvalidSpecification`]
    /// so the caller who passed the malformed literal sees both the input
    /// and the parser diagnostic.
    pub fn new(input: &str) -> Result<Self> {
        match SpecParser::new().parse(input) {
            Ok(spec) => Ok(Self { spec }),
            Err(source) => Err(SpecError::InvalidSpecification {
                context: "Argument 1 passed to HasMethod::new()".to_string(),
                input: input.to_string(),
                source,
            }),
        }
    }

    /// Build the predicate from an already-parsed specification.
    pub fn from_spec(spec: MethodSpec) -> Self {
        Self { spec }
    }

    /// The wrapped specification.
    pub fn spec(&self) -> &MethodSpec {
        &self.spec
    }

    /// Evaluate the predicate against `subject`, resolving type names
    /// through `resolver`.
    pub fn matches(&self, subject: &Subject<'_>, resolver: &dyn Resolver) -> bool {
        let Some(reflected) = subject.reflect(resolver) else {
            debug!(%subject, "subject is not reflectable");
            return false;
        };
        match reflected.method(self.spec.name()) {
            Some(method) => self.spec.matches(method),
            None => {
                debug!(%subject, method = self.spec.name(), "method not found on subject");
                false
            }
        }
    }

    /// Description used by reporting layers, e.g. `has public method foo()`.
    pub fn describe(&self) -> String {
        format!("has {}()", self.spec)
    }

    /// Description of the negated predicate.
    pub fn describe_negation(&self) -> String {
        format!("does not have {}()", self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::{Access, IS_PROTECTED, IS_PUBLIC, IS_STATIC};
    use crate::reflect::{MethodInfo, TypeInfo, TypeKind, TypeRegistry};

    fn registry() -> TypeRegistry {
        TypeRegistry::new().with(
            TypeInfo::new("Greeter", TypeKind::Class)
                .with_method(MethodInfo::new("greet", IS_PUBLIC))
                .with_method(MethodInfo::new("configure", IS_PROTECTED | IS_STATIC)),
        )
    }

    #[test]
    fn test_matches_by_name_and_modifiers() {
        let registry = registry();
        let constraint = HasMethod::new("public function greet").unwrap();
        assert!(constraint.matches(&Subject::Name("Greeter"), &registry));

        let constraint = HasMethod::new("protected function greet").unwrap();
        assert!(!constraint.matches(&Subject::Name("Greeter"), &registry));
    }

    #[test]
    fn test_absent_method_and_unknown_type_are_no_match() {
        let registry = registry();
        let constraint = HasMethod::new("greet").unwrap();
        assert!(!constraint.matches(&Subject::Name("Stranger"), &registry));

        let constraint = HasMethod::new("vanish").unwrap();
        assert!(!constraint.matches(&Subject::Name("Greeter"), &registry));
    }

    #[test]
    fn test_unreflectable_subject_is_no_match() {
        let registry = registry();
        let constraint = HasMethod::new("greet").unwrap();
        assert!(!constraint.matches(&Subject::Int(123), &registry));
        assert!(!constraint.matches(&Subject::Null, &registry));
    }

    #[test]
    fn test_describe() {
        let constraint = HasMethod::from_spec(
            MethodSpec::named("greet")
                .with_access(Access::Public)
                .with_static(true),
        );
        assert_eq!(constraint.describe(), "has public static method greet()");
        assert_eq!(
            constraint.describe_negation(),
            "does not have public static method greet()"
        );
    }

    #[test]
    fn test_new_wraps_syntax_error() {
        let err = HasMethod::new("public function foo??").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Argument 1 passed to HasMethod::new() must be method specification, \
             'public function foo??' (syntax error at \"??\") given."
        );
    }
}
