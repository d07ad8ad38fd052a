//! Reflection boundary: method descriptors, reflectable subjects and name
//! resolution.
//!
//! The matching core never inspects a live runtime. It consumes a
//! [`MethodDescriptor`] obtained through the [`Reflect`] capability, and a
//! [`Resolver`] stands in for the host runtime's class table. The crate ships
//! [`TypeRegistry`] as a plain in-memory resolver so predicates can be
//! exercised end to end.

use crate::modifier::{IS_ABSTRACT, IS_FINAL, IS_PRIVATE, IS_PROTECTED, IS_PUBLIC, IS_STATIC};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Read-only view of a resolved method's name and modifier bits.
///
/// The boolean queries are derived from [`modifiers`](Self::modifiers), so a
/// descriptor only has to report a consistent bit set.
pub trait MethodDescriptor: fmt::Debug + Send + Sync {
    /// Method name, exact and case-sensitive.
    fn name(&self) -> &str;

    /// Combined modifier bit set (see [`crate::modifier`]).
    fn modifiers(&self) -> u32;

    /// Whether the method is static.
    fn is_static(&self) -> bool {
        self.modifiers() & IS_STATIC != 0
    }

    /// Whether the method is public.
    fn is_public(&self) -> bool {
        self.modifiers() & IS_PUBLIC != 0
    }

    /// Whether the method is protected.
    fn is_protected(&self) -> bool {
        self.modifiers() & IS_PROTECTED != 0
    }

    /// Whether the method is private.
    fn is_private(&self) -> bool {
        self.modifiers() & IS_PRIVATE != 0
    }

    /// Whether the method is abstract.
    fn is_abstract(&self) -> bool {
        self.modifiers() & IS_ABSTRACT != 0
    }

    /// Whether the method is final.
    fn is_final(&self) -> bool {
        self.modifiers() & IS_FINAL != 0
    }
}

/// Concrete method descriptor backing [`TypeInfo`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    name: String,
    modifiers: u32,
}

impl MethodInfo {
    /// Create a descriptor from a name and a modifier bit set.
    pub fn new(name: impl Into<String>, modifiers: u32) -> Self {
        Self {
            name: name.into(),
            modifiers,
        }
    }
}

impl MethodDescriptor for MethodInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> u32 {
        self.modifiers
    }
}

/// Kind of class-like entity a type name can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    /// A concrete or abstract class.
    Class,
    /// A trait.
    Trait,
    /// An interface.
    Interface,
}

/// Reflected view of a class, trait or interface and its methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    name: String,
    kind: TypeKind,
    methods: Vec<MethodInfo>,
}

impl TypeInfo {
    /// Create an empty type entry.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            methods: Vec::new(),
        }
    }

    /// Add a method descriptor to this type.
    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    /// Type name as it would appear in a failure report.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What kind of entity this is.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Look up a declared method by exact name.
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Capability to look up methods on a reflected subject.
pub trait Reflect: fmt::Debug + Send + Sync {
    /// Name of the reflected entity, used in reports.
    fn type_name(&self) -> &str;

    /// Look up a method descriptor by exact name.
    fn method(&self, name: &str) -> Option<&dyn MethodDescriptor>;
}

impl Reflect for TypeInfo {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn method(&self, name: &str) -> Option<&dyn MethodDescriptor> {
        TypeInfo::method(self, name).map(|m| m as &dyn MethodDescriptor)
    }
}

/// Resolves type names to reflectable entities, the way a language runtime's
/// class table would.
pub trait Resolver {
    /// Resolve a class, trait or interface name. Unknown names yield `None`.
    fn resolve(&self, name: &str) -> Option<&dyn Reflect>;
}

/// In-memory [`Resolver`] keyed by type name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeRegistry {
    types: HashMap<String, TypeInfo>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type entry under its own name.
    pub fn register(&mut self, info: TypeInfo) {
        self.types.insert(info.name.clone(), info);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, info: TypeInfo) -> Self {
        self.register(info);
        self
    }
}

impl Resolver for TypeRegistry {
    fn resolve(&self, name: &str) -> Option<&dyn Reflect> {
        self.types.get(name).map(|t| t as &dyn Reflect)
    }
}

/// Value under examination by a predicate.
///
/// Only objects and names of resolvable types can be reflected; every other
/// variant collapses to "no match" during evaluation.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    /// A live object instance.
    Object(&'a dyn Reflect),
    /// A string naming a class, trait or interface.
    Name(&'a str),
    /// An integer value, never reflectable.
    Int(i64),
    /// A floating point value, never reflectable.
    Float(f64),
    /// A boolean value, never reflectable.
    Bool(bool),
    /// An absent value, never reflectable.
    Null,
}

impl<'a> Subject<'a> {
    /// Resolve this subject into a reflectable entity, or fail.
    ///
    /// `Name` subjects are looked up in `resolver`; non-reflectable variants
    /// and unknown names yield `None`.
    pub fn reflect<'r>(&'r self, resolver: &'r dyn Resolver) -> Option<&'r dyn Reflect> {
        match *self {
            Subject::Object(obj) => Some(obj),
            Subject::Name(name) => resolver.resolve(name),
            _ => None,
        }
    }
}

impl<'a> From<&'a TypeInfo> for Subject<'a> {
    fn from(info: &'a TypeInfo) -> Self {
        Subject::Object(info)
    }
}

impl<'a> From<&'a str> for Subject<'a> {
    fn from(name: &'a str) -> Self {
        Subject::Name(name)
    }
}

impl From<i64> for Subject<'_> {
    fn from(value: i64) -> Self {
        Subject::Int(value)
    }
}

impl From<bool> for Subject<'_> {
    fn from(value: bool) -> Self {
        Subject::Bool(value)
    }
}

impl fmt::Display for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Object(obj) => write!(f, "object {}", obj.type_name()),
            Subject::Name(name) => write!(f, "'{name}'"),
            Subject::Int(value) => write!(f, "{value}"),
            Subject::Float(value) => write!(f, "{value}"),
            Subject::Bool(value) => write!(f, "{value}"),
            Subject::Null => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::ACCESS_MASK;

    fn sample_type() -> TypeInfo {
        TypeInfo::new("Sample", TypeKind::Class)
            .with_method(MethodInfo::new("run", IS_PUBLIC))
            .with_method(MethodInfo::new("setup", IS_PROTECTED | IS_STATIC))
    }

    #[test]
    fn test_descriptor_queries_follow_bits() {
        let m = MethodInfo::new("setup", IS_PROTECTED | IS_STATIC | IS_FINAL);
        assert!(m.is_static());
        assert!(m.is_protected());
        assert!(m.is_final());
        assert!(!m.is_public());
        assert!(!m.is_private());
        assert!(!m.is_abstract());
        assert_eq!(m.modifiers() & ACCESS_MASK, IS_PROTECTED);
    }

    #[test]
    fn test_method_lookup_is_exact() {
        let t = sample_type();
        assert!(t.method("run").is_some());
        assert!(t.method("Run").is_none());
        assert!(t.method("missing").is_none());
    }

    #[test]
    fn test_registry_resolution() {
        let registry = TypeRegistry::new().with(sample_type());
        assert!(registry.resolve("Sample").is_some());
        assert!(registry.resolve("Other").is_none());
    }

    #[test]
    fn test_subject_reflection() {
        let registry = TypeRegistry::new().with(sample_type());
        let info = sample_type();

        assert!(Subject::Object(&info).reflect(&registry).is_some());
        assert!(Subject::Name("Sample").reflect(&registry).is_some());
        assert!(Subject::Name("Other").reflect(&registry).is_none());
        assert!(Subject::Int(123).reflect(&registry).is_none());
        assert!(Subject::Null.reflect(&registry).is_none());
    }
}
