//! Type references and the repeated (vararg) marker.

use std::fmt;
use std::str::FromStr;

use crate::base::{Name, QualifiedName, ROOT_LITERAL};
use crate::error::{ModelError, Result};

/// A reference to a type: a qualified type name plus ordered type arguments.
///
/// The model stores shapes only; nothing checks that the name resolves or that
/// the argument count fits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeRef {
    pub type_name: QualifiedName,
    pub targs: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(type_name: QualifiedName) -> Self {
        Self {
            type_name,
            targs: Vec::new(),
        }
    }

    pub fn with_args(type_name: QualifiedName, targs: Vec<TypeRef>) -> Self {
        Self { type_name, targs }
    }

    // ------------------------------------------------------------------------
    // Built-in types
    // ------------------------------------------------------------------------

    pub fn any() -> Self {
        Self::new(QualifiedName::scala_js().dot("Any"))
    }

    pub fn dynamic() -> Self {
        Self::new(QualifiedName::scala_js().dot("Dynamic"))
    }

    pub fn number() -> Self {
        Self::new(QualifiedName::scala().dot("Double"))
    }

    pub fn boolean() -> Self {
        Self::new(QualifiedName::scala().dot("Boolean"))
    }

    /// `String` is always in scope, so it stays unqualified.
    pub fn string() -> Self {
        Self::new(QualifiedName::from(Name::new("String")))
    }

    pub fn object() -> Self {
        Self::new(QualifiedName::scala_js().dot("Object"))
    }

    pub fn function() -> Self {
        Self::new(QualifiedName::function_base())
    }

    pub fn unit() -> Self {
        Self::new(QualifiedName::scala().dot("Unit"))
    }

    // ------------------------------------------------------------------------
    // Composite types
    // ------------------------------------------------------------------------

    pub fn array(elem: TypeRef) -> Self {
        Self::with_args(QualifiedName::array(), vec![elem])
    }

    pub fn dictionary(value: TypeRef) -> Self {
        Self::with_args(QualifiedName::dictionary(), vec![value])
    }

    /// A function type of the matching arity; the result is the last argument.
    pub fn function_of(params: Vec<TypeRef>, result: TypeRef) -> Self {
        let arity = params.len();
        let mut targs = params;
        targs.push(result);
        Self::with_args(QualifiedName::function(arity), targs)
    }

    pub fn tuple(elems: Vec<TypeRef>) -> Self {
        Self::with_args(QualifiedName::tuple(elems.len()), elems)
    }

    pub fn union(left: TypeRef, right: TypeRef) -> Self {
        Self::with_args(QualifiedName::union(), vec![left, right])
    }

    /// Shorthand for [`Repeated::apply`].
    pub fn repeated(inner: TypeRef) -> Self {
        Repeated::apply(inner)
    }

    /// Shorthand for [`Repeated::unapply`].
    pub fn as_repeated(&self) -> Option<&TypeRef> {
        Repeated::unapply(self)
    }

    pub fn is_repeated(&self) -> bool {
        self.as_repeated().is_some()
    }
}

impl From<QualifiedName> for TypeRef {
    fn from(type_name: QualifiedName) -> Self {
        Self::new(type_name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.type_name)?;
        for (i, targ) in self.targs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{targ}")?;
        }
        f.write_str("]")
    }
}

/// Encoding of a variadic parameter type inside the generic [`TypeRef`] shape.
///
/// A repeated type is a reference to the one-segment name [`Name::REPEATED`]
/// with exactly one type argument.
pub struct Repeated;

impl Repeated {
    pub fn type_name() -> QualifiedName {
        QualifiedName::from(Name::REPEATED)
    }

    pub fn apply(inner: TypeRef) -> TypeRef {
        TypeRef::with_args(Self::type_name(), vec![inner])
    }

    pub fn unapply(tpe: &TypeRef) -> Option<&TypeRef> {
        match tpe.targs.as_slice() {
            [inner] if tpe.type_name.segments() == [Name::REPEATED] => Some(inner),
            _ => None,
        }
    }
}

impl FromStr for TypeRef {
    type Err = ModelError;

    /// Parses the form produced by `Display`, e.g. `scala.scalajs.js.Array[scala.Double[]]`.
    /// The bracket list may be omitted for types without arguments.
    fn from_str(s: &str) -> Result<Self> {
        let mut parser = TypeRefParser { input: s, pos: 0 };
        let tpe = parser.parse_type()?;
        match parser.peek() {
            None => Ok(tpe),
            Some(c) => Err(ModelError::unexpected_char(s, parser.pos, c)),
        }
    }
}

struct TypeRefParser<'a> {
    input: &'a str,
    pos: usize,
}

impl TypeRefParser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef> {
        self.skip_whitespace();
        let type_name = self.parse_path()?;
        let mut targs = Vec::new();

        if self.peek() == Some('[') {
            let open = self.pos;
            self.pos += 1;
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.pos += 1;
                return Ok(TypeRef::with_args(type_name, targs));
            }
            loop {
                targs.push(self.parse_type()?);
                self.skip_whitespace();
                match self.peek() {
                    Some(',') => self.pos += 1,
                    Some(']') => {
                        self.pos += 1;
                        break;
                    }
                    Some(c) => return Err(ModelError::unexpected_char(self.input, self.pos, c)),
                    None => {
                        return Err(ModelError::UnclosedBracket {
                            input: self.input.to_string(),
                            offset: open,
                        });
                    }
                }
            }
        }

        Ok(TypeRef::with_args(type_name, targs))
    }

    /// Reads up to the next `[`, `,` or `]` outside backticks and hands the
    /// text to the qualified-name parser.
    fn parse_path(&mut self) -> Result<QualifiedName> {
        let start = self.pos;
        let mut quoted = false;
        while let Some(c) = self.peek() {
            match c {
                '`' => quoted = !quoted,
                '[' | ',' | ']' if !quoted => break,
                c if c.is_whitespace() && !quoted => break,
                _ => {}
            }
            self.pos += c.len_utf8();
        }

        let text = &self.input[start..self.pos];
        if text.is_empty() {
            return match self.peek() {
                Some(c) => Err(ModelError::unexpected_char(self.input, self.pos, c)),
                None => Err(ModelError::UnexpectedEnd(self.input.to_string())),
            };
        }
        if text == ROOT_LITERAL {
            return Ok(QualifiedName::ROOT);
        }
        text.parse()
    }
}
