//! Construction protocol: the calls ingestion makes to grow the graph.
//!
//! Packages, classes and modules are get-or-create: a second request for the
//! same name in the same container returns the first entity untouched. Fields
//! and methods are always appended; duplicate methods are removed by an
//! explicit [`FacadeGraph::remove_if_duplicate`] call.

use tracing::debug;

use super::FacadeGraph;
use crate::base::Name;
use crate::symbols::{
    ClassSymbol, CommentSymbol, FieldSymbol, MethodSymbol, ModuleSymbol, PackageSymbol, Symbol,
    SymbolId, SymbolKind,
};

impl FacadeGraph {
    // ============================================================
    // Lookup
    // ============================================================

    pub fn find_class(&self, container: SymbolId, name: &Name) -> Option<SymbolId> {
        self.container(container).find(SymbolKind::Class, name)
    }

    pub fn find_module(&self, container: SymbolId, name: &Name) -> Option<SymbolId> {
        self.container(container).find(SymbolKind::Module, name)
    }

    pub fn find_package(&self, container: SymbolId, name: &Name) -> Option<SymbolId> {
        self.container(container).find(SymbolKind::Package, name)
    }

    // ============================================================
    // Get-or-create
    // ============================================================

    /// Returns the class named `name` in `container`, creating it if needed.
    ///
    /// A new class is linked both ways with a module of the same name already
    /// present in `container`.
    pub fn get_class_or_create(&mut self, container: SymbolId, name: impl Into<Name>) -> SymbolId {
        let name = name.into();
        if let Some(existing) = self.find_class(container, &name) {
            return existing;
        }

        let companion = self.find_module(container, &name);
        let mut class = ClassSymbol::new(name.clone());
        class.companion = companion;
        let id = self.alloc(class, container);
        self.container_mut(container)
            .push_named(SymbolKind::Class, name, id);

        if let Some(module) = companion {
            self.link_companion(module, id);
        }
        id
    }

    /// Returns the module named `name` in `container`, creating it if needed.
    ///
    /// A new module is linked both ways with a class of the same name already
    /// present in `container`.
    pub fn get_module_or_create(
        &mut self,
        container: SymbolId,
        name: impl Into<Name>,
    ) -> SymbolId {
        let name = name.into();
        if let Some(existing) = self.find_module(container, &name) {
            return existing;
        }

        let companion = self.find_class(container, &name);
        let mut module = ModuleSymbol::new(name.clone());
        module.companion = companion;
        let id = self.alloc(module, container);
        self.container_mut(container)
            .push_named(SymbolKind::Module, name, id);

        if let Some(class) = companion {
            self.link_companion(class, id);
        }
        id
    }

    /// Returns the package named `name` in `container`, creating it if needed.
    ///
    /// # Panics
    ///
    /// Panics if `container` is not a package.
    pub fn get_package_or_create(
        &mut self,
        container: SymbolId,
        name: impl Into<Name>,
    ) -> SymbolId {
        assert!(
            self.package(container).is_some(),
            "packages can only be nested in packages, {container} is not one"
        );
        let name = name.into();
        if let Some(existing) = self.find_package(container, &name) {
            return existing;
        }

        let id = self.alloc(PackageSymbol::new(name.clone()), container);
        self.container_mut(container)
            .push_named(SymbolKind::Package, name, id);
        id
    }

    /// Points the existing class or module `existing` at its new sibling.
    fn link_companion(&mut self, existing: SymbolId, created: SymbolId) {
        match self.get_mut(existing) {
            Some(Symbol::Class(class)) => class.companion = Some(created),
            Some(Symbol::Module(module)) => module.companion = Some(created),
            _ => return,
        }
        debug!(class_or_module = %existing, companion = %created, "linked companions");
    }

    // ============================================================
    // Always-new members
    // ============================================================

    /// Appends a new field. Fields are never deduplicated.
    pub fn new_field(&mut self, container: SymbolId, name: impl Into<Name>) -> SymbolId {
        self.push_member(container, FieldSymbol::new(name.into()))
    }

    /// Appends a new method. Overloads share a name, so this never looks for
    /// an existing one.
    pub fn new_method(&mut self, container: SymbolId, name: impl Into<Name>) -> SymbolId {
        self.push_member(container, MethodSymbol::new(name.into()))
    }

    pub fn add_comment(&mut self, container: SymbolId, text: impl Into<String>) -> SymbolId {
        self.push_member(container, CommentSymbol { text: text.into() })
    }

    pub(super) fn push_member(&mut self, container: SymbolId, symbol: impl Into<Symbol>) -> SymbolId {
        // Validate before allocating so a bad container leaves no orphan slot.
        self.container(container);
        let id = self.alloc(symbol, container);
        self.container_mut(container).push(id);
        id
    }

    /// Fresh `anon$<n>` name for an unnamed nested structural type.
    pub fn new_anon_member_name(&mut self, container: SymbolId) -> Name {
        self.container_mut(container).next_anon_name()
    }

    // ============================================================
    // Duplicate elimination
    // ============================================================

    /// Removes `method` from `container` if another member is structurally
    /// equal to it.
    ///
    /// Removal is by position of `method` itself, so with several equal copies
    /// only the given one goes. Returns whether it was removed; a method that
    /// is not a member of `container` is left alone.
    pub fn remove_if_duplicate(&mut self, container: SymbolId, method: SymbolId) -> bool {
        let Some(target) = self.method(method) else {
            return false;
        };
        let members = self.container(container).ids();
        let Some(position) = members.iter().position(|&id| id == method) else {
            return false;
        };
        let has_twin = members
            .iter()
            .any(|&id| id != method && self.method(id).is_some_and(|other| other == target));
        if !has_twin {
            return false;
        }

        debug!(container = %container, method = %method, signature = %target, "removed duplicate method");
        self.container_mut(container).ids.remove(position);
        self.owners[method.index()] = None;
        true
    }
}
