//! Method specification DSL parser and matching engine.
//!
//! This library parses compact textual method specifications such as
//! `public static function foo` or bare `foo` into immutable [`MethodSpec`]
//! values, and evaluates them against reflected method descriptors through
//! the [`HasMethod`] predicate. Reflection itself stays behind the traits in
//! [`reflect`]; the crate ships a plain in-memory [`TypeRegistry`] so the
//! pipeline is usable end to end.
//!
//! # Example
//!
//! ```
//! use methodspec::modifier::{IS_PUBLIC, IS_STATIC};
//! use methodspec::{HasMethod, MethodInfo, Subject, TypeInfo, TypeKind, TypeRegistry};
//!
//! # fn main() -> methodspec::Result<()> {
//! let registry = TypeRegistry::new().with(
//!     TypeInfo::new("Greeter", TypeKind::Class)
//!         .with_method(MethodInfo::new("greet", IS_PUBLIC | IS_STATIC)),
//! );
//!
//! let constraint = HasMethod::new("public static function greet")?;
//! assert!(constraint.matches(&Subject::Name("Greeter"), &registry));
//! assert!(!constraint.matches(&Subject::Int(123), &registry));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use constraint::HasMethod;
pub use error::{Result, SpecError};
pub use modifier::Access;
pub use parser::{SpecParser, SyntaxError};
pub use reflect::{
    MethodDescriptor, MethodInfo, Reflect, Resolver, Subject, TypeInfo, TypeKind, TypeRegistry,
};
pub use spec::MethodSpec;

/// Modifier vocabulary and bit-flag encoding
pub mod modifier;

/// Method specification value type
pub mod spec;

/// Specification parser
pub mod parser;

/// Reflection boundary traits and in-memory implementations
pub mod reflect;

/// Predicate over reflectable subjects
pub mod constraint;

/// Assertion helpers
pub mod assert;

/// Error types
pub mod error;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber with default settings
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
