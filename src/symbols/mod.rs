//! Symbol hierarchy of the facade graph.
//!
//! Every node is a [`Symbol`]: a tagged union over the per-kind structs. The
//! containers ([`PackageSymbol`], [`ClassSymbol`], [`ModuleSymbol`]) refer to
//! their members and companions by [`SymbolId`]; the arena that owns them is
//! [`FacadeGraph`](crate::graph::FacadeGraph).

mod display;
mod symbol;

pub use symbol::{
    ClassSymbol, CommentSymbol, FieldSymbol, Members, MethodSymbol, ModuleSymbol, PackageSymbol,
    ParamSymbol, Symbol, SymbolId, SymbolKind, TypeParamSymbol,
};
