use std::fmt;

use rustc_hash::FxHashMap;

use crate::base::Name;
use crate::types::TypeRef;

/// Unique identifier for a symbol in the graph arena.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new SymbolId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discriminant of a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SymbolKind {
    Comment,
    Package,
    Class,
    Module,
    Field,
    Method,
    TypeParam,
    Param,
}

impl SymbolKind {
    pub fn is_container(self) -> bool {
        matches!(self, Self::Package | Self::Class | Self::Module)
    }
}

// ============================================================================
// CONTAINER STATE
// ============================================================================

/// Members shared by every container kind.
///
/// `ids` is in insertion order, which mirrors the declaration order of the
/// source and is preserved through emission. `named` indexes the packages,
/// classes and modules by kind and name; fields and methods are not indexed
/// because they may repeat.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Members {
    pub(crate) ids: Vec<SymbolId>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) named: FxHashMap<(SymbolKind, Name), SymbolId>,
    pub(crate) anon_counter: u32,
}

impl Members {
    pub fn ids(&self) -> &[SymbolId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn find(&self, kind: SymbolKind, name: &Name) -> Option<SymbolId> {
        self.named.get(&(kind, name.clone())).copied()
    }

    pub(crate) fn push(&mut self, id: SymbolId) {
        self.ids.push(id);
    }

    pub(crate) fn push_named(&mut self, kind: SymbolKind, name: Name, id: SymbolId) {
        self.ids.push(id);
        self.named.insert((kind, name), id);
    }

    pub(crate) fn next_anon_name(&mut self) -> Name {
        self.anon_counter += 1;
        Name::anon(self.anon_counter)
    }
}

// ============================================================================
// SYMBOL KINDS
// ============================================================================

/// Free-form comment carried through to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommentSymbol {
    pub text: String,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PackageSymbol {
    pub name: Name,
    pub members: Members,
}

/// A class or trait. `is_trait` defaults to `true`: declarations are
/// interface-like unless ingestion learns that the type is constructible.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassSymbol {
    pub name: Name,
    pub is_trait: bool,
    pub tparams: Vec<TypeParamSymbol>,
    pub parents: Vec<TypeRef>,
    pub members: Members,
    pub companion: Option<SymbolId>,
}

/// A singleton object. Never has type parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModuleSymbol {
    pub name: Name,
    pub members: Members,
    pub companion: Option<SymbolId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSymbol {
    pub name: Name,
    pub tpe: TypeRef,
}

/// A method or constructor.
///
/// Equality is structural over name, type parameters, parameters and result
/// type. `js_name` and `is_bracket_access` do not take part; this equality is
/// what duplicate elimination uses.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MethodSymbol {
    pub name: Name,
    pub tparams: Vec<TypeParamSymbol>,
    pub params: Vec<ParamSymbol>,
    pub result_type: TypeRef,
    /// Native name when it differs from `name`.
    pub js_name: Option<String>,
    pub is_bracket_access: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeParamSymbol {
    pub name: Name,
    pub upper_bound: Option<TypeRef>,
}

/// A method parameter.
///
/// Equality compares names only. Two overloads whose parameters share names
/// but not types therefore compare equal, and duplicate elimination keeps
/// just the first of them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParamSymbol {
    pub name: Name,
    pub tpe: TypeRef,
    pub optional: bool,
}

impl PackageSymbol {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            members: Members::default(),
        }
    }
}

impl ClassSymbol {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            is_trait: true,
            tparams: Vec::new(),
            parents: Vec::new(),
            members: Members::default(),
            companion: None,
        }
    }
}

impl ModuleSymbol {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            members: Members::default(),
            companion: None,
        }
    }
}

impl FieldSymbol {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            tpe: TypeRef::any(),
        }
    }
}

impl MethodSymbol {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            tparams: Vec::new(),
            params: Vec::new(),
            result_type: TypeRef::dynamic(),
            js_name: None,
            is_bracket_access: false,
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.name.is_constructor()
    }
}

impl PartialEq for MethodSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.tparams == other.tparams
            && self.params == other.params
            && self.result_type == other.result_type
    }
}

impl Eq for MethodSymbol {}

impl TypeParamSymbol {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            upper_bound: None,
        }
    }

    pub fn bounded(name: Name, upper_bound: TypeRef) -> Self {
        Self {
            name,
            upper_bound: Some(upper_bound),
        }
    }
}

impl ParamSymbol {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            tpe: TypeRef::any(),
            optional: false,
        }
    }

    pub fn typed(name: Name, tpe: TypeRef) -> Self {
        Self {
            name,
            tpe,
            optional: false,
        }
    }

    pub fn is_repeated(&self) -> bool {
        self.tpe.is_repeated()
    }
}

impl PartialEq for ParamSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ParamSymbol {}

// ============================================================================
// SYMBOL
// ============================================================================

/// A node of the facade graph.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Symbol {
    Comment(CommentSymbol),
    Package(PackageSymbol),
    Class(ClassSymbol),
    Module(ModuleSymbol),
    Field(FieldSymbol),
    Method(MethodSymbol),
    TypeParam(TypeParamSymbol),
    Param(ParamSymbol),
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Comment(_) => SymbolKind::Comment,
            Symbol::Package(_) => SymbolKind::Package,
            Symbol::Class(_) => SymbolKind::Class,
            Symbol::Module(_) => SymbolKind::Module,
            Symbol::Field(_) => SymbolKind::Field,
            Symbol::Method(_) => SymbolKind::Method,
            Symbol::TypeParam(_) => SymbolKind::TypeParam,
            Symbol::Param(_) => SymbolKind::Param,
        }
    }

    /// Returns the name of this symbol; comments have none.
    pub fn name(&self) -> Option<&Name> {
        match self {
            Symbol::Comment(_) => None,
            Symbol::Package(PackageSymbol { name, .. })
            | Symbol::Class(ClassSymbol { name, .. })
            | Symbol::Module(ModuleSymbol { name, .. })
            | Symbol::Field(FieldSymbol { name, .. })
            | Symbol::Method(MethodSymbol { name, .. })
            | Symbol::TypeParam(TypeParamSymbol { name, .. })
            | Symbol::Param(ParamSymbol { name, .. }) => Some(name),
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Returns the member list for packages, classes and modules.
    pub fn members(&self) -> Option<&Members> {
        match self {
            Symbol::Package(p) => Some(&p.members),
            Symbol::Class(c) => Some(&c.members),
            Symbol::Module(m) => Some(&m.members),
            _ => None,
        }
    }

    pub(crate) fn members_mut(&mut self) -> Option<&mut Members> {
        match self {
            Symbol::Package(p) => Some(&mut p.members),
            Symbol::Class(c) => Some(&mut c.members),
            Symbol::Module(m) => Some(&mut m.members),
            _ => None,
        }
    }

    /// Returns the companion link of a class or module.
    pub fn companion(&self) -> Option<SymbolId> {
        match self {
            Symbol::Class(c) => c.companion,
            Symbol::Module(m) => m.companion,
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassSymbol> {
        match self {
            Symbol::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_module(&self) -> Option<&ModuleSymbol> {
        match self {
            Symbol::Module(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_package(&self) -> Option<&PackageSymbol> {
        match self {
            Symbol::Package(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldSymbol> {
        match self {
            Symbol::Field(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodSymbol> {
        match self {
            Symbol::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&CommentSymbol> {
        match self {
            Symbol::Comment(c) => Some(c),
            _ => None,
        }
    }
}

macro_rules! impl_from_symbol {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Symbol {
                fn from(symbol: $ty) -> Self {
                    Symbol::$variant(symbol)
                }
            }
        )*
    };
}

impl_from_symbol!(
    Comment(CommentSymbol),
    Package(PackageSymbol),
    Class(ClassSymbol),
    Module(ModuleSymbol),
    Field(FieldSymbol),
    Method(MethodSymbol),
    TypeParam(TypeParamSymbol),
    Param(ParamSymbol),
);
