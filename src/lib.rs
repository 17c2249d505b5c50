//! # facade-symbols
//!
//! Symbol graph for turning external interface declarations into Scala.js
//! facades: packages, classes (traits), companion objects, fields, methods and
//! the type references between them.
//!
//! An upstream parser drives the construction protocol on [`FacadeGraph`]; a
//! downstream printer walks the finished graph in declaration order.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! graph    → Arena, construction protocol, traversal, sharded build
//!   ↓
//! symbols  → Symbol enum, per-kind structs, canonical text form
//!   ↓
//! types    → TypeRef, Repeated marker, built-in types
//!   ↓
//! base     → Name, QualifiedName, reserved words
//! ```

// ============================================================================
// MODULES (dependency order: base → types → symbols → graph)
// ============================================================================

/// Identifier model: Name, QualifiedName, reserved words
pub mod base;

/// Errors from parsing the canonical text form
pub mod error;

/// Type references and the vararg marker
pub mod types;

/// Symbol hierarchy
pub mod symbols;

/// The facade graph and its construction protocol
pub mod graph;

// Re-export the whole model
pub use base::{Name, QualifiedName};
pub use error::{ModelError, Result};
pub use graph::{FacadeGraph, SymbolVisitor, Walk};
pub use symbols::{
    ClassSymbol, CommentSymbol, FieldSymbol, Members, MethodSymbol, ModuleSymbol, PackageSymbol,
    ParamSymbol, Symbol, SymbolId, SymbolKind, TypeParamSymbol,
};
pub use types::{Repeated, TypeRef};
