//! Sharded ingestion: build independent graphs in parallel, then merge.
//!
//! Get-or-create and companion linking are not safe under concurrent mutation
//! of one container, so each shard gets a graph of its own and the results are
//! folded together afterwards through the ordinary construction protocol.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::FacadeGraph;
use crate::base::{Name, QualifiedName};
use crate::symbols::{MethodSymbol, Symbol, SymbolId, SymbolKind, TypeParamSymbol};
use crate::types::TypeRef;

/// Decisions fixed before the first symbol is copied.
struct MergePlan {
    /// Arena length at entry; lower ids were in the graph before the merge.
    watermark: usize,
    /// Merged name of each renamed anonymous class or module, by source id.
    names: FxHashMap<SymbolId, Name>,
    /// Source path and merged path of each renamed container.
    paths: Vec<(QualifiedName, QualifiedName)>,
}

impl MergePlan {
    fn target_name(&self, source: SymbolId, name: &Name) -> Name {
        self.names.get(&source).cloned().unwrap_or_else(|| name.clone())
    }

    /// Points `tpe`, and its type arguments, at renamed containers.
    fn retarget(&self, tpe: &mut TypeRef) {
        if self.paths.is_empty() {
            return;
        }
        let segments = tpe.type_name.segments();
        let renamed = self
            .paths
            .iter()
            .filter(|(from, _)| segments.starts_with(from.segments()))
            .max_by_key(|(from, _)| from.len());
        if let Some((from, to)) = renamed {
            tpe.type_name = to
                .segments()
                .iter()
                .chain(&segments[from.len()..])
                .cloned()
                .collect();
        }
        for arg in &mut tpe.targs {
            self.retarget(arg);
        }
    }

    fn retarget_type_param(&self, tparam: &mut TypeParamSymbol) {
        if let Some(bound) = &mut tparam.upper_bound {
            self.retarget(bound);
        }
    }

    fn retarget_method(&self, method: &mut MethodSymbol) {
        for tparam in &mut method.tparams {
            self.retarget_type_param(tparam);
        }
        for param in &mut method.params {
            self.retarget(&mut param.tpe);
        }
        self.retarget(&mut method.result_type);
    }

    fn retarget_symbol(&self, symbol: &mut Symbol) {
        match symbol {
            Symbol::Field(field) => self.retarget(&mut field.tpe),
            Symbol::Method(method) => self.retarget_method(method),
            Symbol::TypeParam(tparam) => self.retarget_type_param(tparam),
            Symbol::Param(param) => self.retarget(&mut param.tpe),
            Symbol::Comment(_) | Symbol::Package(_) | Symbol::Class(_) | Symbol::Module(_) => {}
        }
    }
}

impl FacadeGraph {
    /// Grafts the contents of `other` into this graph.
    ///
    /// Packages, classes and modules unify by kind and name, and companions
    /// link through the usual lazy rule. Fields, comments and methods are
    /// copied as they are. An incoming method is dropped only when an equal
    /// method was already in the target container before the merge, so
    /// overloads `other` kept side by side stay side by side. A class that
    /// already exists keeps its trait flag and type parameters and gains any
    /// parents it was missing.
    ///
    /// Anonymous-name counters add up. Where the target container had already
    /// handed out `anon$<n>` names, incoming `anon$<k>` classes and modules
    /// become `anon$<k + n>`, and type references into them follow.
    pub fn merge(&mut self, other: &FacadeGraph) {
        debug!(
            into_slots = self.slot_count(),
            from_slots = other.slot_count(),
            "merging facade graphs"
        );
        let mut plan = MergePlan {
            watermark: self.arena.len(),
            names: FxHashMap::default(),
            paths: Vec::new(),
        };
        self.plan_renames(other, other.root, Some(self.root), &QualifiedName::ROOT, &mut plan);
        let root = self.root;
        self.graft(other, other.root, root, &plan);
    }

    /// Chooses merged names for the anonymous containers below `from`.
    /// `into` is the matching target container, if it exists yet.
    fn plan_renames(
        &self,
        other: &FacadeGraph,
        from: SymbolId,
        into: Option<SymbolId>,
        into_path: &QualifiedName,
        plan: &mut MergePlan,
    ) {
        let offset = into.map_or(0, |id| self.container(id).anon_counter);
        for &child in other.members(from) {
            let symbol = other.symbol(child);
            let kind = symbol.kind();
            let Some(name) = symbol.name().filter(|_| kind.is_container()) else {
                continue;
            };

            let mut target_name = name.clone();
            if offset > 0 && matches!(kind, SymbolKind::Class | SymbolKind::Module) {
                if let Some(index) = name.anon_index() {
                    target_name = Name::anon(index.saturating_add(offset));
                    debug!(from = %name, to = %target_name, "renamed anonymous member");
                    plan.names.insert(child, target_name.clone());
                    plan.paths
                        .push((other.qualified_name(child), into_path.dot(target_name.clone())));
                }
            }

            let target = into.and_then(|id| self.container(id).find(kind, &target_name));
            let child_path = into_path.dot(target_name);
            self.plan_renames(other, child, target, &child_path, plan);
        }
    }

    fn graft(&mut self, other: &FacadeGraph, from: SymbolId, into: SymbolId, plan: &MergePlan) {
        let counter = other.container(from).anon_counter;
        let members = self.container_mut(into);
        members.anon_counter = members.anon_counter.saturating_add(counter);

        for &child in other.members(from) {
            match other.symbol(child) {
                Symbol::Package(package) => {
                    let id = self.get_package_or_create(into, package.name.clone());
                    self.graft(other, child, id, plan);
                }
                Symbol::Class(source) => {
                    let name = plan.target_name(child, &source.name);
                    let created = self.find_class(into, &name).is_none();
                    let id = self.get_class_or_create(into, name);
                    if let Some(class) = self.class_mut(id) {
                        if created {
                            class.is_trait = source.is_trait;
                            class.tparams = source.tparams.clone();
                            for tparam in &mut class.tparams {
                                plan.retarget_type_param(tparam);
                            }
                        }
                        for parent in &source.parents {
                            let mut parent = parent.clone();
                            plan.retarget(&mut parent);
                            if !class.parents.contains(&parent) {
                                class.parents.push(parent);
                            }
                        }
                    }
                    self.graft(other, child, id, plan);
                }
                Symbol::Module(module) => {
                    let name = plan.target_name(child, &module.name);
                    let id = self.get_module_or_create(into, name);
                    self.graft(other, child, id, plan);
                }
                Symbol::Method(method) => {
                    let mut method = method.clone();
                    plan.retarget_method(&mut method);
                    if self.has_earlier_twin(into, &method, plan.watermark) {
                        debug!(container = %into, signature = %method, "dropped merged duplicate method");
                        continue;
                    }
                    self.push_member(into, method);
                }
                symbol @ (Symbol::Field(_)
                | Symbol::Comment(_)
                | Symbol::TypeParam(_)
                | Symbol::Param(_)) => {
                    let mut symbol = symbol.clone();
                    plan.retarget_symbol(&mut symbol);
                    self.push_member(into, symbol);
                }
            }
        }
    }

    /// True if a member of `container` allocated below `watermark` equals
    /// `method`.
    fn has_earlier_twin(&self, container: SymbolId, method: &MethodSymbol, watermark: usize) -> bool {
        self.members(container)
            .iter()
            .any(|&id| id.index() < watermark && self.method(id).is_some_and(|other| other == method))
    }

    /// Builds one graph per shard in parallel and merges them in shard order.
    ///
    /// `build` receives an empty graph and must only touch that graph, so every
    /// container has exactly one writer. The merged result does not depend on
    /// scheduling, and anonymous names synthesized by different shards in a
    /// shared container stay distinct.
    pub fn build_sharded<S, F>(shards: Vec<S>, build: F) -> FacadeGraph
    where
        S: Send,
        F: Fn(&mut FacadeGraph, S) + Sync + Send,
    {
        let parts: Vec<FacadeGraph> = shards
            .into_par_iter()
            .map(|shard| {
                let mut graph = FacadeGraph::new();
                build(&mut graph, shard);
                graph
            })
            .collect();

        debug!(shards = parts.len(), "built shards");
        let mut merged = FacadeGraph::new();
        for part in &parts {
            merged.merge(part);
        }
        merged
    }
}
