//! Canonical text form of each symbol, used for diagnostics and golden files.
//!
//! Only the symbol's own header is rendered; container members are laid out by
//! [`FacadeGraph::snapshot`](crate::graph::FacadeGraph::snapshot).

use std::fmt;

use super::symbol::{
    ClassSymbol, CommentSymbol, FieldSymbol, MethodSymbol, ModuleSymbol, PackageSymbol,
    ParamSymbol, Symbol, TypeParamSymbol,
};

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_tparams(f: &mut fmt::Formatter<'_>, tparams: &[TypeParamSymbol]) -> fmt::Result {
    if tparams.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    write_list(f, tparams)?;
    f.write_str(">")
}

impl fmt::Display for CommentSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/* {} */", self.text)
    }
}

impl fmt::Display for PackageSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "package {}", self.name)
    }
}

impl fmt::Display for ClassSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = if self.is_trait { "trait" } else { "class" };
        write!(f, "{keyword} {}", self.name)?;
        write_tparams(f, &self.tparams)
    }
}

impl fmt::Display for ModuleSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object {}", self.name)
    }
}

impl fmt::Display for FieldSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var {}: {}", self.name, self.tpe)
    }
}

impl fmt::Display for MethodSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(js_name) = &self.js_name {
            write!(f, "@JSName({js_name:?}) ")?;
        }
        if self.is_bracket_access {
            f.write_str("@JSBracketAccess ")?;
        }
        write!(f, "def {}", self.name)?;
        write_tparams(f, &self.tparams)?;
        f.write_str("(")?;
        write_list(f, &self.params)?;
        write!(f, "): {}", self.result_type)
    }
}

impl fmt::Display for TypeParamSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(bound) = &self.upper_bound {
            write!(f, " <: {bound}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ParamSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.tpe)?;
        if self.optional {
            f.write_str(" = _")?;
        }
        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Comment(s) => fmt::Display::fmt(s, f),
            Symbol::Package(s) => fmt::Display::fmt(s, f),
            Symbol::Class(s) => fmt::Display::fmt(s, f),
            Symbol::Module(s) => fmt::Display::fmt(s, f),
            Symbol::Field(s) => fmt::Display::fmt(s, f),
            Symbol::Method(s) => fmt::Display::fmt(s, f),
            Symbol::TypeParam(s) => fmt::Display::fmt(s, f),
            Symbol::Param(s) => fmt::Display::fmt(s, f),
        }
    }
}
