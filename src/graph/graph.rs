use crate::base::{Name, QualifiedName};
use crate::symbols::{
    ClassSymbol, FieldSymbol, Members, MethodSymbol, ModuleSymbol, PackageSymbol, Symbol, SymbolId,
    SymbolKind,
};

/// Arena owning every symbol of one facade graph.
///
/// Symbols never move once allocated, so a [`SymbolId`] stays valid for the
/// lifetime of the graph. Containers list their members by id, and companion
/// links are ids as well, which keeps the class/module cycle out of the
/// ownership structure.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FacadeGraph {
    /// Arena storage for all symbols - single source of truth
    pub(super) arena: Vec<Symbol>,
    /// Owning container of each arena slot; `None` for the root and for
    /// symbols detached by duplicate elimination.
    pub(super) owners: Vec<Option<SymbolId>>,
    pub(super) root: SymbolId,
}

impl Default for FacadeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl FacadeGraph {
    /// Creates a graph holding only the unnamed root package.
    pub fn new() -> Self {
        Self {
            arena: vec![Symbol::Package(PackageSymbol::new(Name::EMPTY))],
            owners: vec![None],
            root: SymbolId::new(0),
        }
    }

    pub fn root(&self) -> SymbolId {
        self.root
    }

    /// Number of arena slots, detached symbols included. Never zero, since
    /// the root package occupies the first slot; count attached symbols with
    /// [`FacadeGraph::iter_symbols`].
    pub fn slot_count(&self) -> usize {
        self.arena.len()
    }

    pub(super) fn alloc(&mut self, symbol: impl Into<Symbol>, owner: SymbolId) -> SymbolId {
        let id = SymbolId::new(self.arena.len());
        let symbol = symbol.into();
        tracing::trace!(id = %id, owner = %owner, symbol = %symbol, "allocated symbol");
        self.arena.push(symbol);
        self.owners.push(Some(owner));
        id
    }

    // ============================================================
    // Data Access Methods
    // ============================================================

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.arena.get(id.index())
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.arena.get_mut(id.index())
    }

    /// Returns the symbol for an id handed out by this graph.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        self.get(id)
            .unwrap_or_else(|| panic!("symbol {id} does not belong to this graph"))
    }

    pub fn package(&self, id: SymbolId) -> Option<&PackageSymbol> {
        self.get(id)?.as_package()
    }

    pub fn class(&self, id: SymbolId) -> Option<&ClassSymbol> {
        self.get(id)?.as_class()
    }

    pub fn class_mut(&mut self, id: SymbolId) -> Option<&mut ClassSymbol> {
        match self.get_mut(id)? {
            Symbol::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn module(&self, id: SymbolId) -> Option<&ModuleSymbol> {
        self.get(id)?.as_module()
    }

    pub fn module_mut(&mut self, id: SymbolId) -> Option<&mut ModuleSymbol> {
        match self.get_mut(id)? {
            Symbol::Module(module) => Some(module),
            _ => None,
        }
    }

    pub fn field(&self, id: SymbolId) -> Option<&FieldSymbol> {
        self.get(id)?.as_field()
    }

    pub fn field_mut(&mut self, id: SymbolId) -> Option<&mut FieldSymbol> {
        match self.get_mut(id)? {
            Symbol::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn method(&self, id: SymbolId) -> Option<&MethodSymbol> {
        self.get(id)?.as_method()
    }

    pub fn method_mut(&mut self, id: SymbolId) -> Option<&mut MethodSymbol> {
        match self.get_mut(id)? {
            Symbol::Method(method) => Some(method),
            _ => None,
        }
    }

    /// # Panics
    ///
    /// Panics if `id` is not a package, class or module.
    pub(super) fn container(&self, id: SymbolId) -> &Members {
        self.symbol(id)
            .members()
            .unwrap_or_else(|| panic!("symbol {id} is not a container"))
    }

    /// # Panics
    ///
    /// Panics if `id` is not a package, class or module.
    pub(super) fn container_mut(&mut self, id: SymbolId) -> &mut Members {
        self.arena
            .get_mut(id.index())
            .and_then(Symbol::members_mut)
            .unwrap_or_else(|| panic!("symbol {id} is not a container"))
    }

    /// Members of a container in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `container` is not a package, class or module.
    pub fn members(&self, container: SymbolId) -> &[SymbolId] {
        self.container(container).ids()
    }

    /// The container that owns `id`, or `None` for the root and for detached
    /// symbols.
    pub fn owner(&self, id: SymbolId) -> Option<SymbolId> {
        self.owners.get(id.index()).copied().flatten()
    }

    /// True if `id` is the root or is reachable from it.
    pub fn is_attached(&self, id: SymbolId) -> bool {
        id == self.root || self.owner(id).is_some()
    }

    /// The companion of a class or module.
    pub fn companion(&self, id: SymbolId) -> Option<SymbolId> {
        self.get(id)?.companion()
    }

    /// Path of names from the root down to `id`. The root package contributes
    /// no segment; a comment yields the path of its container.
    pub fn qualified_name(&self, id: SymbolId) -> QualifiedName {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == self.root {
                break;
            }
            if let Some(name) = self.get(cur).and_then(Symbol::name) {
                parts.push(name.clone());
            }
            current = self.owner(cur);
        }
        parts.reverse();
        QualifiedName::new(parts)
    }

    /// Walks `path` from the root through nested containers.
    ///
    /// At each step a package is preferred over a class, and a class over a
    /// module of the same name. The empty path resolves to the root.
    pub fn resolve(&self, path: &QualifiedName) -> Option<SymbolId> {
        let mut current = self.root;
        for segment in path.segments() {
            let members = self.get(current)?.members()?;
            current = [SymbolKind::Package, SymbolKind::Class, SymbolKind::Module]
                .into_iter()
                .find_map(|kind| members.find(kind, segment))?;
        }
        Some(current)
    }

    /// Iterates over every attached symbol in arena order.
    pub fn iter_symbols(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.arena
            .iter()
            .enumerate()
            .map(|(index, symbol)| (SymbolId::new(index), symbol))
            .filter(|(id, _)| self.is_attached(*id))
    }
}
