//! Atomic identifiers.

use std::fmt;

use smol_str::SmolStr;

use super::keywords::is_reserved_word;

/// An identifier as written in the source declarations.
///
/// Equality and hashing are by content. No validation is performed on
/// construction; escaping only happens when the name is rendered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Name(SmolStr);

impl Name {
    /// The empty name, used for the root package.
    pub const EMPTY: Name = Name(SmolStr::new_inline(""));

    /// Sentinel name given to constructor members.
    pub const CONSTRUCTOR: Name = Name(SmolStr::new_inline("<init>"));

    /// Sentinel name of the repeated (vararg) marker type.
    pub const REPEATED: Name = Name(SmolStr::new_inline("*"));

    pub const SCALA: Name = Name(SmolStr::new_inline("scala"));
    pub const SCALAJS: Name = Name(SmolStr::new_inline("scalajs"));
    pub const JS: Name = Name(SmolStr::new_inline("js"));

    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(SmolStr::new(raw))
    }

    /// The raw, unescaped text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_constructor(&self) -> bool {
        *self == Self::CONSTRUCTOR
    }

    /// `anon$<n>`, the name of the `n`th synthesized structural type in a
    /// container.
    pub fn anon(n: u32) -> Self {
        Self::new(format!("anon${n}"))
    }

    /// The counter value of an `anon$<n>` name.
    pub fn anon_index(&self) -> Option<u32> {
        let digits = self.as_str().strip_prefix("anon$")?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Returns true if the name must be wrapped in backticks to be used as an
    /// identifier in emitted source.
    pub fn needs_escaping(&self) -> bool {
        let ident = self.as_str();
        ident.is_empty()
            || is_reserved_word(ident)
            || !(is_plain_identifier(ident) || is_operator_identifier(ident))
    }

    /// The text as it must appear in emitted source.
    pub fn escaped(&self) -> String {
        if self.needs_escaping() {
            format!("`{}`", self.0)
        } else {
            self.0.to_string()
        }
    }
}

fn is_plain_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c == '_' || c == '$' || unicode_ident::is_xid_start(c) => {}
        _ => return false,
    }
    chars.all(|c| c == '$' || unicode_ident::is_xid_continue(c))
}

fn is_operator_identifier(ident: &str) -> bool {
    !ident.is_empty() && ident.chars().all(is_operator_char)
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '!' | '#' | '%' | '&' | '*' | '+' | '-' | '/' | ':' | '<' | '=' | '>' | '?' | '@' | '\\'
            | '^' | '|' | '~'
    )
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_escaping() {
            write!(f, "`{}`", self.0)
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for Name {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Name {
    fn from(raw: String) -> Self {
        Self(SmolStr::from(raw))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
