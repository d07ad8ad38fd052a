//! Modifier vocabulary: bit-flag encoding and the visibility constraint set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public visibility bit.
pub const IS_PUBLIC: u32 = 1 << 0;
/// Protected visibility bit.
pub const IS_PROTECTED: u32 = 1 << 1;
/// Private visibility bit.
pub const IS_PRIVATE: u32 = 1 << 2;
/// Static modifier bit.
pub const IS_STATIC: u32 = 1 << 3;
/// Abstract modifier bit.
pub const IS_ABSTRACT: u32 = 1 << 4;
/// Final modifier bit.
pub const IS_FINAL: u32 = 1 << 5;

/// Combined mask of the three visibility bits.
pub const ACCESS_MASK: u32 = IS_PUBLIC | IS_PROTECTED | IS_PRIVATE;

/// Visibility constraint forms producible by the specification grammar.
///
/// A negated form (`!public` etc.) accepts any visibility except the named
/// one, i.e. the union of the other two visibility bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    /// Matches only public methods (`public`).
    Public,
    /// Matches only protected methods (`protected`).
    Protected,
    /// Matches only private methods (`private`).
    Private,
    /// Matches any visibility except public (`!public`).
    NotPublic,
    /// Matches any visibility except protected (`!protected`).
    NotProtected,
    /// Matches any visibility except private (`!private`).
    NotPrivate,
}

impl Access {
    /// All six constraint forms, in keyword-table order.
    pub const ALL: [Access; 6] = [
        Access::Public,
        Access::Protected,
        Access::Private,
        Access::NotPublic,
        Access::NotProtected,
        Access::NotPrivate,
    ];

    /// Visibility bits accepted by this constraint.
    pub fn bits(self) -> u32 {
        match self {
            Access::Public => IS_PUBLIC,
            Access::Protected => IS_PROTECTED,
            Access::Private => IS_PRIVATE,
            Access::NotPublic => IS_PROTECTED | IS_PRIVATE,
            Access::NotProtected => IS_PUBLIC | IS_PRIVATE,
            Access::NotPrivate => IS_PUBLIC | IS_PROTECTED,
        }
    }

    /// Keyword this constraint is written as in a specification string.
    pub fn keyword(self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Protected => "protected",
            Access::Private => "private",
            Access::NotPublic => "!public",
            Access::NotProtected => "!protected",
            Access::NotPrivate => "!private",
        }
    }

    /// Look up the constraint form for a specification keyword.
    pub fn from_keyword(s: &str) -> Option<Access> {
        Access::ALL.into_iter().find(|a| a.keyword() == s)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
