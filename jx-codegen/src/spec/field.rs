use std::collections::BTreeSet;

use jx_model::{IntoTypeName, TypeName};

use super::is_valid_name;
use crate::{AnnotationSpec, Arg, CodeBlock, CodeBlockBuilder, CodeWriter, Error, Modifier, Result};

/// A field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    ty: TypeName,
    name: String,
    javadoc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: BTreeSet<Modifier>,
    initializer: Option<CodeBlock>,
}

impl FieldSpec {
    pub fn builder(ty: impl IntoTypeName, name: impl Into<String>) -> FieldSpecBuilder {
        let (ty, error) = match ty.into_type_name() {
            Ok(ty) => (ty, None),
            Err(err) => (TypeName::Void, Some(Box::<Error>::from(err))),
        };
        FieldSpecBuilder {
            spec: Self {
                ty,
                name: name.into(),
                javadoc: CodeBlock::default(),
                annotations: Vec::new(),
                modifiers: BTreeSet::new(),
                initializer: None,
            },
            javadoc: CodeBlock::builder(),
            error,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeName {
        &self.ty
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    pub fn initializer(&self) -> Option<&CodeBlock> {
        self.initializer.as_ref()
    }

    pub(crate) fn render(&self, w: &mut CodeWriter<'_>, implicit: &[Modifier]) -> Result<()> {
        w.emit_javadoc(&self.javadoc)?;
        w.emit_annotations(&self.annotations, false)?;
        w.emit_modifiers(&self.modifiers, implicit);
        w.emit_type(&self.ty)?.emit(" ").emit(&self.name);
        if let Some(initializer) = &self.initializer {
            w.emit(" = ");
            w.emit_code(initializer)?;
        }
        w.emit(";\n");
        Ok(())
    }
}

#[derive(Debug)]
pub struct FieldSpecBuilder {
    spec: FieldSpec,
    javadoc: CodeBlockBuilder,
    error: Option<Box<Error>>,
}

impl FieldSpecBuilder {
    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.spec.modifiers.extend(modifiers);
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    pub fn add_javadoc(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.javadoc = self.javadoc.add(format, args);
        self
    }

    /// Set the initializer, e.g. `"new $T<>()"`.
    pub fn initializer(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        match CodeBlock::of(format, args) {
            Ok(code) => self.spec.initializer = Some(code),
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    pub fn build(self) -> Result<FieldSpec> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut spec = self.spec;
        spec.javadoc = self.javadoc.build()?;
        if !is_valid_name(&spec.name) {
            return Err(Error::invalid_spec("field", &spec.name, "not a valid identifier"));
        }
        if matches!(spec.ty, TypeName::Void) {
            return Err(Error::invalid_spec("field", &spec.name, "fields cannot be void"));
        }
        let access = spec.modifiers.iter().filter(|m| m.is_access()).count();
        if access > 1 {
            return Err(Error::invalid_spec(
                "field",
                &spec.name,
                "at most one access modifier is allowed",
            ));
        }
        Ok(spec)
    }
}
