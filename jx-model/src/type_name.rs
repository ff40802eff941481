//! The generic-aware type descriptor.

use std::{fmt, str::FromStr};

use crate::{ClassName, Error, PrimitiveType, Result, parse};

/// A use of a Java type.
///
/// Trees are immutable once built and every child is owned by its parent,
/// so equality and hashing are structural and order-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// `void`, only meaningful as a method return type.
    Void,
    /// `int`, `boolean`, ...
    Primitive(PrimitiveType),
    /// A plain class or type variable reference.
    Class(ClassName),
    /// A generic invocation such as `List<String>`.
    Parameterized(ParameterizedTypeName),
    /// `T[]`
    Array(ArrayTypeName),
    /// `?`, `? extends T` or `? super T`.
    Wildcard(WildcardTypeName),
}

/// A raw class applied to one or more type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterizedTypeName {
    raw: ClassName,
    arguments: Vec<TypeName>,
}

impl ParameterizedTypeName {
    pub fn raw(&self) -> &ClassName {
        &self.raw
    }

    /// The type arguments, never empty.
    pub fn arguments(&self) -> &[TypeName] {
        &self.arguments
    }

    pub(crate) fn into_parts(self) -> (ClassName, Vec<TypeName>) {
        (self.raw, self.arguments)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayTypeName {
    component: Box<TypeName>,
}

impl ArrayTypeName {
    pub fn component(&self) -> &TypeName {
        &self.component
    }
}

/// A wildcard type argument. At most one bound is ever present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardTypeName {
    bound: WildcardBound,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Unbounded,
    /// `? extends T`
    Upper(Box<TypeName>),
    /// `? super T`
    Lower(Box<TypeName>),
}

impl WildcardTypeName {
    pub fn bound(&self) -> &WildcardBound {
        &self.bound
    }

    pub fn upper_bound(&self) -> Option<&TypeName> {
        match &self.bound {
            WildcardBound::Upper(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn lower_bound(&self) -> Option<&TypeName> {
        match &self.bound {
            WildcardBound::Lower(ty) => Some(ty),
            _ => None,
        }
    }
}

impl TypeName {
    pub fn class(name: ClassName) -> Self {
        Self::Class(name)
    }

    /// Parse a dotted name without type arguments, e.g. `java.lang.String`.
    ///
    /// Shorthand for [`TypeName::class`] over [`ClassName::parse`]; use
    /// [`TypeName::parse`] when the input needs validation.
    pub fn named(qualified: &str) -> Self {
        Self::Class(ClassName::parse(qualified))
    }

    /// A type variable reference such as `T`.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Class(ClassName::variable(name))
    }

    /// Apply `arguments` to `raw`.
    ///
    /// An empty argument list collapses to the raw type.
    pub fn parameterized(raw: ClassName, arguments: Vec<TypeName>) -> Self {
        if arguments.is_empty() {
            Self::Class(raw)
        } else {
            Self::Parameterized(ParameterizedTypeName { raw, arguments })
        }
    }

    pub fn array(component: TypeName) -> Self {
        Self::Array(ArrayTypeName {
            component: Box::new(component),
        })
    }

    /// The unbounded wildcard `?`.
    pub fn wildcard() -> Self {
        Self::Wildcard(WildcardTypeName {
            bound: WildcardBound::Unbounded,
        })
    }

    /// `? extends upper`
    pub fn subtype_of(upper: TypeName) -> Self {
        Self::Wildcard(WildcardTypeName {
            bound: WildcardBound::Upper(Box::new(upper)),
        })
    }

    /// `? super lower`
    pub fn supertype_of(lower: TypeName) -> Self {
        Self::Wildcard(WildcardTypeName {
            bound: WildcardBound::Lower(Box::new(lower)),
        })
    }

    /// Build a wildcard from optional bounds, rejecting a pair.
    pub fn wildcard_bounded(upper: Option<TypeName>, lower: Option<TypeName>) -> Result<Self> {
        match (upper, lower) {
            (Some(upper), Some(lower)) => Err(Box::new(Error::InvalidWildcardBounds {
                upper: upper.to_string(),
                lower: lower.to_string(),
            })),
            (Some(upper), None) => Ok(Self::subtype_of(upper)),
            (None, Some(lower)) => Ok(Self::supertype_of(lower)),
            (None, None) => Ok(Self::wildcard()),
        }
    }

    /// Parse a canonical type name such as `java.util.List<java.lang.String>`.
    pub fn parse(s: &str) -> Result<Self> {
        parse::parse(s)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Check if this is one of the `java.lang` primitive wrappers.
    pub fn is_boxed_primitive(&self) -> bool {
        matches!(self, Self::Class(class) if PrimitiveType::from_boxed(class).is_some())
    }

    /// The class this type refers to, ignoring type arguments.
    pub fn raw_class(&self) -> Option<&ClassName> {
        match self {
            Self::Class(class) => Some(class),
            Self::Parameterized(p) => Some(&p.raw),
            _ => None,
        }
    }

    pub fn as_parameterized(&self) -> Option<&ParameterizedTypeName> {
        match self {
            Self::Parameterized(p) => Some(p),
            _ => None,
        }
    }

    /// Type arguments of a parameterized type, empty otherwise.
    pub fn arguments(&self) -> &[TypeName] {
        match self {
            Self::Parameterized(p) => &p.arguments,
            _ => &[],
        }
    }

    /// Replace a primitive with its wrapper class.
    pub fn boxed(&self) -> TypeName {
        match self {
            Self::Primitive(p) => Self::Class(p.boxed_class()),
            Self::Void => Self::named("java.lang.Void"),
            other => other.clone(),
        }
    }

    /// Replace a wrapper class with its primitive, if it is one.
    pub fn unboxed(&self) -> Option<TypeName> {
        match self {
            Self::Primitive(_) => Some(self.clone()),
            Self::Class(class) => PrimitiveType::from_boxed(class).map(Self::Primitive),
            _ => None,
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(name: ClassName) -> Self {
        Self::Class(name)
    }
}

impl From<PrimitiveType> for TypeName {
    fn from(primitive: PrimitiveType) -> Self {
        Self::Primitive(primitive)
    }
}

impl FromStr for TypeName {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse::parse(s)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Primitive(p) => f.write_str(p.keyword()),
            Self::Class(class) => write!(f, "{}", class),
            Self::Parameterized(p) => {
                write!(f, "{}<", p.raw)?;
                for (i, arg) in p.arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            Self::Array(array) => write!(f, "{}[]", array.component),
            Self::Wildcard(w) => match &w.bound {
                WildcardBound::Unbounded => f.write_str("?"),
                WildcardBound::Upper(ty) => write!(f, "? extends {}", ty),
                WildcardBound::Lower(ty) => write!(f, "? super {}", ty),
            },
        }
    }
}

/// Anything that normalizes into a [`TypeName`]: descriptors, class names and
/// canonical strings.
///
/// Native Rust types go through [`TypeName::of`] first.
pub trait IntoTypeName {
    fn into_type_name(self) -> Result<TypeName>;
}

impl IntoTypeName for TypeName {
    fn into_type_name(self) -> Result<TypeName> {
        Ok(self)
    }
}

impl IntoTypeName for &TypeName {
    fn into_type_name(self) -> Result<TypeName> {
        Ok(self.clone())
    }
}

impl IntoTypeName for ClassName {
    fn into_type_name(self) -> Result<TypeName> {
        Ok(TypeName::Class(self))
    }
}

impl IntoTypeName for &ClassName {
    fn into_type_name(self) -> Result<TypeName> {
        Ok(TypeName::Class(self.clone()))
    }
}

impl IntoTypeName for PrimitiveType {
    fn into_type_name(self) -> Result<TypeName> {
        Ok(TypeName::Primitive(self))
    }
}

impl IntoTypeName for &str {
    fn into_type_name(self) -> Result<TypeName> {
        TypeName::parse(self)
    }
}

impl IntoTypeName for String {
    fn into_type_name(self) -> Result<TypeName> {
        TypeName::parse(&self)
    }
}

impl IntoTypeName for &String {
    fn into_type_name(self) -> Result<TypeName> {
        TypeName::parse(self)
    }
}
