//! Method specification value type and matching engine.

use crate::modifier::{Access, ACCESS_MASK};
use crate::parser::{SpecParser, SyntaxError};
use crate::reflect::MethodDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requirements on a method: its name plus optional modifier constraints.
///
/// Each constraint is tri-state: `None` means unconstrained, `Some(true)` /
/// `Some(false)` require the modifier to be present / absent. Visibility is
/// constrained by one of the six [`Access`] forms. Values are immutable once
/// built and freely shareable.
///
/// Direct construction does not enforce the abstract/final mutual exclusion
/// that the grammar enforces; only specs built through the parser carry that
/// guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSpec {
    name: String,
    is_static: Option<bool>,
    access: Option<Access>,
    is_abstract: Option<bool>,
    is_final: Option<bool>,
}

impl MethodSpec {
    /// Create a spec constraining only the method name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: None,
            access: None,
            is_abstract: None,
            is_final: None,
        }
    }

    /// Constrain the `static` modifier.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = Some(is_static);
        self
    }

    /// Constrain the visibility.
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }

    /// Constrain the `abstract` modifier.
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = Some(is_abstract);
        self
    }

    /// Constrain the `final` modifier.
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = Some(is_final);
        self
    }

    /// Method name this spec requires.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `static` constraint, if any.
    pub fn is_static(&self) -> Option<bool> {
        self.is_static
    }

    /// The visibility constraint, if any.
    pub fn access(&self) -> Option<Access> {
        self.access
    }

    /// The `abstract` constraint, if any.
    pub fn is_abstract(&self) -> Option<bool> {
        self.is_abstract
    }

    /// The `final` constraint, if any.
    pub fn is_final(&self) -> Option<bool> {
        self.is_final
    }

    /// Check whether `method` fulfills every constraint of this spec.
    ///
    /// Unconstrained fields always pass. Matching is total: it yields a
    /// boolean and never errors.
    pub fn matches(&self, method: &dyn MethodDescriptor) -> bool {
        self.match_name(method)
            && self.match_static(method)
            && self.match_access(method)
            && self.match_abstract(method)
            && self.match_final(method)
    }

    fn match_name(&self, method: &dyn MethodDescriptor) -> bool {
        self.name == method.name()
    }

    fn match_static(&self, method: &dyn MethodDescriptor) -> bool {
        self.is_static.map_or(true, |s| method.is_static() == s)
    }

    // The constraint is the set of allowed visibilities; the method's own
    // visibility bit must fall inside it.
    fn match_access(&self, method: &dyn MethodDescriptor) -> bool {
        self.access.map_or(true, |a| {
            let vis = method.modifiers() & ACCESS_MASK;
            vis != 0 && vis & !a.bits() == 0
        })
    }

    fn match_abstract(&self, method: &dyn MethodDescriptor) -> bool {
        self.is_abstract.map_or(true, |a| method.is_abstract() == a)
    }

    fn match_final(&self, method: &dyn MethodDescriptor) -> bool {
        self.is_final.map_or(true, |f| method.is_final() == f)
    }
}

impl fmt::Display for MethodSpec {
    /// Canonical rendering: `final`, `abstract`, access and `static` markers
    /// in that fixed order, then `method <name>`. Unconstrained fields are
    /// skipped; negative constraints render with a `!` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.is_final {
            f.write_str(if value { "final " } else { "!final " })?;
        }
        if let Some(value) = self.is_abstract {
            f.write_str(if value { "abstract " } else { "!abstract " })?;
        }
        if let Some(access) = self.access {
            write!(f, "{access} ")?;
        }
        if let Some(value) = self.is_static {
            f.write_str(if value { "static " } else { "!static " })?;
        }
        write!(f, "method {}", self.name)
    }
}

impl FromStr for MethodSpec {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecParser::new().parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::{IS_FINAL, IS_PRIVATE, IS_PROTECTED, IS_PUBLIC, IS_STATIC};
    use crate::reflect::MethodInfo;

    #[test]
    fn test_name_only_spec_matches_on_name_alone() {
        let spec = MethodSpec::named("foo");
        assert!(spec.matches(&MethodInfo::new("foo", IS_PUBLIC)));
        assert!(spec.matches(&MethodInfo::new("foo", IS_PRIVATE | IS_STATIC | IS_FINAL)));
        assert!(!spec.matches(&MethodInfo::new("bar", IS_PUBLIC)));
        assert!(!spec.matches(&MethodInfo::new("Foo", IS_PUBLIC)));
    }

    #[test]
    fn test_static_constraint() {
        let spec = MethodSpec::named("foo").with_static(true);
        assert!(spec.matches(&MethodInfo::new("foo", IS_PUBLIC | IS_STATIC)));
        assert!(!spec.matches(&MethodInfo::new("foo", IS_PUBLIC)));

        let spec = MethodSpec::named("foo").with_static(false);
        assert!(spec.matches(&MethodInfo::new("foo", IS_PUBLIC)));
        assert!(!spec.matches(&MethodInfo::new("foo", IS_PUBLIC | IS_STATIC)));
    }

    #[test]
    fn test_negated_access_matches_the_other_two_visibilities() {
        let spec = MethodSpec::named("foo").with_access(Access::NotPublic);
        assert!(spec.matches(&MethodInfo::new("foo", IS_PROTECTED)));
        assert!(spec.matches(&MethodInfo::new("foo", IS_PRIVATE)));
        assert!(!spec.matches(&MethodInfo::new("foo", IS_PUBLIC)));
    }

    #[test]
    fn test_every_access_form_accepts_exactly_its_visibility_set() {
        let cases = [
            (Access::Public, [true, false, false]),
            (Access::Protected, [false, true, false]),
            (Access::Private, [false, false, true]),
            (Access::NotPublic, [false, true, true]),
            (Access::NotProtected, [true, false, true]),
            (Access::NotPrivate, [true, true, false]),
        ];
        for (access, expected) in cases {
            let spec = MethodSpec::named("foo").with_access(access);
            let visibilities = [IS_PUBLIC, IS_PROTECTED, IS_PRIVATE];
            for (vis, expect) in visibilities.into_iter().zip(expected) {
                assert_eq!(
                    spec.matches(&MethodInfo::new("foo", vis | IS_STATIC)),
                    expect,
                    "access {access:?} against visibility bits {vis:#b}"
                );
            }
        }
    }

    #[test]
    fn test_display_renders_fixed_marker_order() {
        let spec = MethodSpec::named("foo")
            .with_static(true)
            .with_access(Access::Public)
            .with_final(true);
        assert_eq!(spec.to_string(), "final public static method foo");

        let spec = MethodSpec::named("foo")
            .with_abstract(false)
            .with_access(Access::NotPrivate);
        assert_eq!(spec.to_string(), "!abstract !private method foo");

        assert_eq!(MethodSpec::named("foo").to_string(), "method foo");
    }

    // Deliberate looseness carried over from the reference behavior: only
    // the parser rejects abstract+final, direct construction does not.
    #[test]
    fn test_direct_construction_permits_abstract_final() {
        let spec = MethodSpec::named("foo").with_abstract(true).with_final(true);
        assert_eq!(spec.is_abstract(), Some(true));
        assert_eq!(spec.is_final(), Some(true));
        assert!(!spec.matches(&MethodInfo::new("foo", IS_PUBLIC | IS_FINAL)));
    }
}
