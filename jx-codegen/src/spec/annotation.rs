//! Annotation builder.

use indexmap::IndexMap;
use jx_model::{ClassName, TypeName};

use crate::{Arg, CodeBlock, CodeWriter, Error, Result};

/// An annotation such as `@SuppressWarnings("unused")`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSpec {
    ty: ClassName,
    /// Member name -> values (several values render as an array)
    members: IndexMap<String, Vec<CodeBlock>>,
}

impl AnnotationSpec {
    /// An annotation without members, e.g. `@Override`.
    pub fn of(ty: ClassName) -> Self {
        Self {
            ty,
            members: IndexMap::new(),
        }
    }

    pub fn builder(ty: ClassName) -> AnnotationSpecBuilder {
        AnnotationSpecBuilder {
            spec: Self::of(ty),
            error: None,
        }
    }

    /// `@java.lang.Override`
    pub fn override_() -> Self {
        Self::of(ClassName::new("java.lang", "Override"))
    }

    pub fn annotation_type(&self) -> &ClassName {
        &self.ty
    }

    pub fn member(&self, name: &str) -> Option<&[CodeBlock]> {
        self.members.get(name).map(Vec::as_slice)
    }

    pub(crate) fn render(&self, w: &mut CodeWriter<'_>) -> Result<()> {
        w.emit("@");
        w.emit_type(&TypeName::Class(self.ty.clone()))?;
        if self.members.is_empty() {
            return Ok(());
        }

        w.emit("(");
        let single_value = self.members.len() == 1 && self.members.contains_key("value");
        for (i, (name, values)) in self.members.iter().enumerate() {
            if i > 0 {
                w.emit(", ");
            }
            if !single_value {
                w.emit(name).emit(" = ");
            }
            if let [value] = values.as_slice() {
                w.emit_code(value)?;
            } else {
                w.emit("{");
                for (j, value) in values.iter().enumerate() {
                    if j > 0 {
                        w.emit(", ");
                    }
                    w.emit_code(value)?;
                }
                w.emit("}");
            }
        }
        w.emit(")");
        Ok(())
    }
}

#[derive(Debug)]
pub struct AnnotationSpecBuilder {
    spec: AnnotationSpec,
    error: Option<Box<Error>>,
}

impl AnnotationSpecBuilder {
    /// Add a value to member `name`; adding twice makes it an array.
    pub fn add_member(
        mut self,
        name: impl Into<String>,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Self {
        let name = name.into();
        match CodeBlock::of(format, args) {
            Ok(value) => self.spec.members.entry(name).or_default().push(value),
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    pub fn build(self) -> Result<AnnotationSpec> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.spec),
        }
    }
}
