//! Structural queries and layer-by-layer rewriting of generic types.
//!
//! A "layer" is one level of generic nesting: `Outer<Inner<Leaf>>` has two.
//! [`TypeName::disassemble`] peels the outermost layer and
//! [`TypeName::assemble`] adds one back.

use crate::{ClassName, Error, IntoTypeName, Result, TypeName, WildcardBound};

/// How [`TypeName::assemble_with`] combines the outer type with the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssembleMode {
    /// Wrap the current type: `Current` becomes `Outer<Current>`.
    #[default]
    Wrap,
    /// Swap the outermost type and keep its arguments: `Base<Arg>` becomes
    /// `Outer<Arg>` and a non-generic `Current` becomes `Outer`. The nesting
    /// depth never changes.
    Replace,
}

impl TypeName {
    /// Check if `candidate` appears anywhere in this type.
    ///
    /// Matches this type itself, the raw class of a parameterized type, any
    /// type argument, array components and wildcard bounds. This is purely
    /// syntactic: subtyping is never consulted.
    pub fn contains(&self, candidate: &TypeName) -> bool {
        if self == candidate {
            return true;
        }
        match self {
            Self::Parameterized(p) => {
                matches!(candidate, Self::Class(class) if class == p.raw())
                    || p.arguments().iter().any(|arg| arg.contains(candidate))
            }
            Self::Array(array) => array.component().contains(candidate),
            Self::Wildcard(w) => match w.bound() {
                WildcardBound::Unbounded => false,
                WildcardBound::Upper(bound) | WildcardBound::Lower(bound) => {
                    bound.contains(candidate)
                }
            },
            Self::Void | Self::Primitive(_) | Self::Class(_) => false,
        }
    }

    /// Check if the class `candidate` appears anywhere in this type.
    pub fn contains_class(&self, candidate: &ClassName) -> bool {
        self.contains(&TypeName::Class(candidate.clone()))
    }

    /// Peel one layer of generic nesting.
    ///
    /// A parameterized type yields its type argument; with several arguments
    /// the *last* one is returned. Any other type is returned unchanged, so
    /// repeated calls walk inward until they become no-ops.
    pub fn disassemble(&self) -> TypeName {
        match self {
            Self::Parameterized(p) => match p.arguments().last() {
                Some(last) => last.clone(),
                None => self.clone(),
            },
            _ => self.clone(),
        }
    }

    /// Like [`disassemble`](Self::disassemble), but refuses to pick one of
    /// several type arguments.
    pub fn disassemble_strict(&self) -> Result<TypeName> {
        match self.arguments() {
            [] | [_] => Ok(self.disassemble()),
            args => Err(Box::new(Error::UnsupportedDisassembly {
                ty: self.to_string(),
                count: args.len(),
            })),
        }
    }

    /// Wrap this type as the single type argument of `outer`.
    ///
    /// `outer` may be a [`TypeName`], a [`ClassName`] or a canonical string;
    /// it must name a plain class.
    ///
    /// # Example
    ///
    /// ```
    /// use jx_model::TypeName;
    ///
    /// let list = TypeName::of::<String>().assemble("java.util.List").unwrap();
    /// assert_eq!(list.to_string(), "java.util.List<java.lang.String>");
    /// ```
    pub fn assemble(&self, outer: impl IntoTypeName) -> Result<TypeName> {
        self.assemble_with(outer, AssembleMode::Wrap)
    }

    /// Combine this type with `outer` according to `mode`.
    pub fn assemble_with(&self, outer: impl IntoTypeName, mode: AssembleMode) -> Result<TypeName> {
        let outer = match outer.into_type_name()? {
            TypeName::Class(class) => class,
            other => {
                return Err(Box::new(Error::InvalidAssemblyBase {
                    ty: other.to_string(),
                }));
            }
        };

        Ok(match (mode, self) {
            (AssembleMode::Replace, Self::Parameterized(p)) => {
                let (_, arguments) = p.clone().into_parts();
                TypeName::parameterized(outer, arguments)
            }
            (AssembleMode::Replace, _) => TypeName::Class(outer),
            (AssembleMode::Wrap, _) => TypeName::parameterized(outer, vec![self.clone()]),
        })
    }

    /// Number of generic layers along the disassembly path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Parameterized(_) => 1 + self.disassemble().depth(),
            _ => 0,
        }
    }
}
