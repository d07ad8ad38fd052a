//! Hand-written scanner for the method specification grammar.
//!
//! ```text
//! spec            := bare_name | modifier_clause+ "function" name
//! bare_name       := name
//! modifier_clause := ("abstract" | "!abstract")
//!                  | ("final" | "!final")
//!                  | ("static" | "!static")
//!                  | ("public" | "!public" | "protected" | "!protected"
//!                  |  "private" | "!private")
//! name            := [A-Za-z_][0-9A-Za-z_]*
//! ```
//!
//! Modifier clauses may appear in any order, but each of the four categories
//! (abstract, final, static, access) is consumable at most once. The parser
//! tracks consumed categories and excludes them from later lookaheads, so
//! `public !public function foo` fails the same way `public public ...` does.
//! Asserting `abstract` together with `final` is rejected as inconsistent.
//! Any failure reports the exact unconsumed remainder of the input.

use crate::modifier::Access;
use crate::spec::MethodSpec;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Parser error type
pub mod error;

pub use error::SyntaxError;

/// Upper bound on modifier-clause iterations. Only four categories exist, so
/// the cap can only be hit on a parser bug, never on user input.
const MAX_MODIFIER_CLAUSES: usize = 4;

static RE_BARE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][0-9A-Za-z_]*$").expect("invalid bare name regex"));
static RE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][0-9A-Za-z_]*\b").expect("invalid name regex"));
static RE_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^function\b").expect("invalid function regex"));
static RE_ABSTRACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!?abstract\b").expect("invalid abstract regex"));
static RE_FINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!?final\b").expect("invalid final regex"));
static RE_STATIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!?static\b").expect("invalid static regex"));
static RE_ACCESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:!?public|!?protected|!?private)\b").expect("invalid access regex")
});

/// The four modifier-clause categories, each consumable at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    Abstract,
    Final,
    Static,
    Access,
}

impl Clause {
    fn regex(self) -> &'static Regex {
        match self {
            Clause::Abstract => &RE_ABSTRACT,
            Clause::Final => &RE_FINAL,
            Clause::Static => &RE_STATIC,
            Clause::Access => &RE_ACCESS,
        }
    }
}

/// Parser for method specification strings.
///
/// Parsing is a pure function of the input; the parser itself holds no
/// state and may be shared freely.
///
/// # Examples
///
/// ```
/// use methodspec::parser::SpecParser;
///
/// let spec = SpecParser::new().parse("public static function foo")?;
/// assert_eq!(spec.name(), "foo");
/// assert_eq!(spec.is_static(), Some(true));
/// # Ok::<(), methodspec::parser::SyntaxError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecParser;

impl SpecParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a specification string into a [`MethodSpec`].
    ///
    /// A plain identifier is shorthand for a spec constraining only the
    /// name; everything else must follow the full `modifier* function name`
    /// form. On failure the returned [`SyntaxError`] carries the exact
    /// unconsumed suffix of the input.
    pub fn parse(&self, input: &str) -> Result<MethodSpec, SyntaxError> {
        if RE_BARE_NAME.is_match(input) {
            trace!(name = input, "parsed bare-name specification");
            return Ok(MethodSpec::named(input));
        }

        let mut rest = input;
        let mut clauses = vec![Clause::Abstract, Clause::Final, Clause::Static, Clause::Access];

        let mut is_static = None;
        let mut access = None;
        let mut is_abstract = None;
        let mut is_final = None;

        for _ in 0..MAX_MODIFIER_CLAUSES {
            let Some((clause, token)) = lookahead_clause(&mut clauses, &mut rest) else {
                break;
            };
            trace!(?clause, token, "consumed modifier clause");
            match clause {
                Clause::Abstract => {
                    is_abstract = Some(!token.starts_with('!'));
                    ensure_abstract_final_consistent(token, rest, is_abstract, is_final)?;
                }
                Clause::Final => {
                    is_final = Some(!token.starts_with('!'));
                    ensure_abstract_final_consistent(token, rest, is_abstract, is_final)?;
                }
                Clause::Static => is_static = Some(!token.starts_with('!')),
                Clause::Access => access = Access::from_keyword(token),
            }
            rest = rest.trim_start();
        }

        let Some(m) = RE_FUNCTION.find(rest) else {
            return Err(SyntaxError::new(rest));
        };
        rest = rest[m.end()..].trim_start();

        let Some(m) = RE_NAME.find(rest) else {
            return Err(SyntaxError::new(rest));
        };
        let name = &rest[..m.end()];
        rest = &rest[m.end()..];

        if !rest.is_empty() {
            return Err(SyntaxError::new(rest));
        }

        let mut spec = MethodSpec::named(name);
        if let Some(value) = is_static {
            spec = spec.with_static(value);
        }
        if let Some(value) = access {
            spec = spec.with_access(value);
        }
        if let Some(value) = is_abstract {
            spec = spec.with_abstract(value);
        }
        if let Some(value) = is_final {
            spec = spec.with_final(value);
        }
        Ok(spec)
    }
}

/// Try to consume one of the not-yet-seen modifier clauses at the front of
/// `rest`. A matched category is removed from the candidate list, which is
/// what rejects repeats of the same category with a differing literal.
fn lookahead_clause<'a>(clauses: &mut Vec<Clause>, rest: &mut &'a str) -> Option<(Clause, &'a str)> {
    for i in 0..clauses.len() {
        let clause = clauses[i];
        if let Some(m) = clause.regex().find(rest) {
            let token = &rest[..m.end()];
            *rest = &rest[m.end()..];
            clauses.remove(i);
            return Some((clause, token));
        }
    }
    None
}

/// Abstract and final cannot both be asserted. Checked right after each of
/// the two clauses is consumed; the diagnostic points at the clause that
/// completed the conflicting pair. Both explicitly negated is consistent.
fn ensure_abstract_final_consistent(
    token: &str,
    rest: &str,
    is_abstract: Option<bool>,
    is_final: Option<bool>,
) -> Result<(), SyntaxError> {
    if let (Some(abstract_), Some(final_)) = (is_abstract, is_final) {
        if abstract_ || final_ {
            return Err(SyntaxError::new(format!("{token}{rest}")));
        }
    }
    Ok(())
}
