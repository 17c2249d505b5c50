//! The facade graph and its construction protocol.
//!
//! ## Lifecycle
//!
//! ```text
//! ingestion ──get-or-create / new_*──▶ FacadeGraph ──walk / accept──▶ printer
//! ```
//!
//! Ingestion is the only writer. It walks declarations top-down and asks each
//! container for its children, refining them in place as more declarations
//! about the same entity arrive. The printer then reads the graph in member
//! order and never mutates it.

#[allow(clippy::module_inception)]
mod graph;
mod merge;
mod protocol;
mod walk;

pub use graph::FacadeGraph;
pub use walk::{SymbolVisitor, Walk};
