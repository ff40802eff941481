use jx_model::{IntoTypeName, TypeName};

use crate::Result;

/// A type variable declaration such as `T extends Comparable<T>`.
///
/// References to the variable are plain [`TypeName::variable`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeVariable {
    name: String,
    bounds: Vec<TypeName>,
}

impl TypeVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    /// Add an upper bound; several bounds render as `A & B`.
    pub fn bound(mut self, bound: TypeName) -> Self {
        self.bounds.push(bound);
        self
    }

    /// Add an upper bound given as a canonical name.
    pub fn parse_bound(self, bound: impl IntoTypeName) -> Result<Self> {
        Ok(self.bound(bound.into_type_name()?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[TypeName] {
        &self.bounds
    }

    /// The type used to refer to this variable.
    pub fn as_type(&self) -> TypeName {
        TypeName::variable(self.name.clone())
    }
}
