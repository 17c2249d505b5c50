//! Identifier model for the facade graph.
//!
//! This module provides the naming primitives used everywhere else:
//! - [`Name`] - An atomic identifier with target-language escaping
//! - [`QualifiedName`] - A dotted path of names; the empty path is the root
//! - Reserved words of the target language
//!
//! This module has NO dependencies on other facade modules except the error type.

pub mod keywords;
mod name;
mod qualified_name;

pub use name::Name;
pub use qualified_name::{QualifiedName, ROOT_LITERAL};
