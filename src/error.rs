//! Error types for the facade model.
//!
//! Building the symbol graph never fails. The only recoverable errors come from
//! reading names and type references back from their canonical text form.

use thiserror::Error;

/// Errors produced when parsing the canonical text of model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A dotted path contained an empty segment, e.g. `a..b`.
    #[error("empty segment at position {index} in '{path}'")]
    EmptySegment { path: String, index: usize },

    /// A character that cannot appear at this point.
    #[error("unexpected '{found}' at offset {offset} in '{input}'")]
    UnexpectedChar {
        input: String,
        offset: usize,
        found: char,
    },

    /// A `[` without its matching `]`.
    #[error("unclosed '[' opened at offset {offset} in '{input}'")]
    UnclosedBracket { input: String, offset: usize },

    /// The input ended where a name was expected.
    #[error("unexpected end of input in '{0}'")]
    UnexpectedEnd(String),
}

impl ModelError {
    pub(crate) fn unexpected_char(input: &str, offset: usize, found: char) -> Self {
        Self::UnexpectedChar {
            input: input.to_string(),
            offset,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
