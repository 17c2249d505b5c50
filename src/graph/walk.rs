//! Read-only traversal for emission and snapshots.

use super::FacadeGraph;
use crate::symbols::{Symbol, SymbolId};

/// Pre-order iterator over the members of a container, yielding
/// `(depth, id)` in member insertion order. Direct members have depth 0.
pub struct Walk<'g> {
    graph: &'g FacadeGraph,
    stack: Vec<(usize, SymbolId)>,
}

impl Iterator for Walk<'_> {
    type Item = (usize, SymbolId);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop()?;
        if let Some(members) = self.graph.get(id).and_then(Symbol::members) {
            self.stack
                .extend(members.ids().iter().rev().map(|&child| (depth + 1, child)));
        }
        Some((depth, id))
    }
}

/// Callbacks for a structured traversal, e.g. by a printer that needs to open
/// and close a body around each container's members.
pub trait SymbolVisitor {
    fn enter_container(&mut self, _graph: &FacadeGraph, _id: SymbolId, _symbol: &Symbol) {}

    fn leave_container(&mut self, _graph: &FacadeGraph, _id: SymbolId, _symbol: &Symbol) {}

    fn visit_leaf(&mut self, _graph: &FacadeGraph, _id: SymbolId, _symbol: &Symbol) {}
}

impl FacadeGraph {
    /// Iterates over everything below `container`, depth first.
    pub fn walk(&self, container: SymbolId) -> Walk<'_> {
        let stack = self
            .members(container)
            .iter()
            .rev()
            .map(|&id| (0, id))
            .collect();
        Walk { graph: self, stack }
    }

    /// Drives `visitor` over `id` and, for containers, all of its members.
    pub fn accept<V: SymbolVisitor + ?Sized>(&self, id: SymbolId, visitor: &mut V) {
        let symbol = self.symbol(id);
        match symbol.members() {
            Some(members) => {
                visitor.enter_container(self, id, symbol);
                for &child in members.ids() {
                    self.accept(child, visitor);
                }
                visitor.leave_container(self, id, symbol);
            }
            None => visitor.visit_leaf(self, id, symbol),
        }
    }

    /// Renders the tree below `container` one symbol per line, indented two
    /// spaces per level. Classes and modules with a companion are suffixed
    /// with `// companion`.
    pub fn snapshot(&self, container: SymbolId) -> String {
        let mut out = String::new();
        for (depth, id) in self.walk(container) {
            let symbol = self.symbol(id);
            out.push_str(&format!("{:indent$}{symbol}", "", indent = depth * 2));
            if symbol.companion().is_some() {
                out.push_str(" // companion");
            }
            out.push('\n');
        }
        out
    }

    /// The whole graph as JSON, for machine-readable golden files.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
