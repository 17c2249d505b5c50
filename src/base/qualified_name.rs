//! Dotted paths of names.

use std::fmt;
use std::str::FromStr;

use super::Name;
use crate::error::{ModelError, Result};

/// Literal used to render the root path.
pub const ROOT_LITERAL: &str = "_root_";

/// An ordered, possibly empty sequence of [`Name`]s. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QualifiedName {
    parts: Vec<Name>,
}

impl QualifiedName {
    pub const ROOT: QualifiedName = QualifiedName { parts: Vec::new() };

    pub fn new(parts: Vec<Name>) -> Self {
        Self { parts }
    }

    /// `scala`
    pub fn scala() -> Self {
        Self::ROOT.dot(Name::SCALA)
    }

    /// `scala.scalajs.js`
    pub fn scala_js() -> Self {
        Self::scala().dot(Name::SCALAJS).dot(Name::JS)
    }

    pub fn array() -> Self {
        Self::scala_js().dot(Name::new("Array"))
    }

    pub fn dictionary() -> Self {
        Self::scala_js().dot(Name::new("Dictionary"))
    }

    pub fn function_base() -> Self {
        Self::scala_js().dot(Name::new("Function"))
    }

    /// `scala.scalajs.js.Function<arity>`
    pub fn function(arity: usize) -> Self {
        Self::scala_js().dot(Name::new(format!("Function{arity}")))
    }

    /// `scala.scalajs.js.Tuple<arity>`
    pub fn tuple(arity: usize) -> Self {
        Self::scala_js().dot(Name::new(format!("Tuple{arity}")))
    }

    pub fn union() -> Self {
        Self::scala_js().dot(Name::new("|"))
    }

    pub fn is_root(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn segments(&self) -> &[Name] {
        &self.parts
    }

    /// Returns a new path with `name` appended.
    pub fn dot(&self, name: impl Into<Name>) -> Self {
        let mut parts = Vec::with_capacity(self.parts.len() + 1);
        parts.extend(self.parts.iter().cloned());
        parts.push(name.into());
        Self { parts }
    }

    /// Returns all but the last segment.
    ///
    /// # Panics
    ///
    /// Panics on the root path.
    pub fn init(&self) -> Self {
        assert!(!self.is_root(), "init of empty qualified name");
        Self {
            parts: self.parts[..self.parts.len() - 1].to_vec(),
        }
    }

    /// Returns the last segment.
    ///
    /// # Panics
    ///
    /// Panics on the root path.
    pub fn last(&self) -> &Name {
        match self.parts.last() {
            Some(last) => last,
            None => panic!("last of empty qualified name"),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(ROOT_LITERAL);
        }
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            // A leading `_root_` would read back as the root path.
            if i == 0 && part.as_str() == ROOT_LITERAL {
                write!(f, "`{ROOT_LITERAL}`")?;
            } else {
                write!(f, "{part}")?;
            }
        }
        Ok(())
    }
}

impl From<Name> for QualifiedName {
    fn from(name: Name) -> Self {
        Self { parts: vec![name] }
    }
}

impl FromIterator<Name> for QualifiedName {
    fn from_iter<I: IntoIterator<Item = Name>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl FromStr for QualifiedName {
    type Err = ModelError;

    /// Parses the dotted form produced by `Display`. Backticks around a
    /// segment are stripped; dots inside backticks are kept.
    fn from_str(s: &str) -> Result<Self> {
        if s == ROOT_LITERAL {
            return Ok(Self::ROOT);
        }
        if s.is_empty() {
            return Err(ModelError::UnexpectedEnd(s.to_string()));
        }

        let mut parts = Vec::new();
        let mut current = String::new();
        let mut quoted = false;
        let mut was_quoted = false;
        for (offset, c) in s.char_indices() {
            match c {
                '`' => {
                    if !quoted && !current.is_empty() {
                        return Err(ModelError::unexpected_char(s, offset, c));
                    }
                    quoted = !quoted;
                    was_quoted = true;
                }
                '.' if !quoted => {
                    push_segment(s, &mut parts, &mut current, was_quoted)?;
                    was_quoted = false;
                }
                _ if was_quoted && !quoted => {
                    return Err(ModelError::unexpected_char(s, offset, c));
                }
                _ => current.push(c),
            }
        }
        if quoted {
            return Err(ModelError::UnexpectedEnd(s.to_string()));
        }
        push_segment(s, &mut parts, &mut current, was_quoted)?;

        Ok(Self { parts })
    }
}

fn push_segment(path: &str, parts: &mut Vec<Name>, current: &mut String, quoted: bool) -> Result<()> {
    if current.is_empty() && !quoted {
        return Err(ModelError::EmptySegment {
            path: path.to_string(),
            index: parts.len(),
        });
    }
    parts.push(Name::from(std::mem::take(current)));
    Ok(())
}
