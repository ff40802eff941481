use std::collections::BTreeSet;

use jx_model::{IntoTypeName, TypeName};

use super::is_valid_name;
use crate::{AnnotationSpec, CodeWriter, Error, Modifier, Result};

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    name: String,
    ty: TypeName,
    modifiers: BTreeSet<Modifier>,
    annotations: Vec<AnnotationSpec>,
}

impl ParameterSpec {
    /// A plain parameter such as `String name`.
    pub fn of(ty: impl IntoTypeName, name: impl Into<String>) -> Result<Self> {
        Self::builder(ty, name).build()
    }

    pub fn builder(ty: impl IntoTypeName, name: impl Into<String>) -> ParameterSpecBuilder {
        let name = name.into();
        let (ty, error) = match ty.into_type_name() {
            Ok(ty) => (ty, None),
            Err(err) => (TypeName::Void, Some(Box::<Error>::from(err))),
        };
        ParameterSpecBuilder {
            spec: Self {
                name,
                ty,
                modifiers: BTreeSet::new(),
                annotations: Vec::new(),
            },
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

    /// Write the parameter; a `varargs` parameter renders its array type as `T...`.
    pub(crate) fn render(&self, w: &mut CodeWriter<'_>, varargs: bool) -> Result<()> {
        w.emit_annotations(&self.annotations, true)?;
        w.emit_modifiers(&self.modifiers, &[]);
        match (&self.ty, varargs) {
            (TypeName::Array(array), true) => {
                w.emit_type(array.component())?.emit("...");
            }
            (ty, _) => {
                w.emit_type(ty)?;
            }
        }
        w.emit(" ").emit(&self.name);
        Ok(())
    }
}

#[derive(Debug)]
pub struct ParameterSpecBuilder {
    spec: ParameterSpec,
    error: Option<Box<Error>>,
}

impl ParameterSpecBuilder {
    /// Only `final` is accepted on parameters.
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.spec.modifiers.insert(modifier);
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    pub fn build(self) -> Result<ParameterSpec> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let spec = self.spec;
        if !is_valid_name(&spec.name) {
            return Err(Error::invalid_spec("parameter", &spec.name, "not a valid identifier"));
        }
        if matches!(spec.ty, TypeName::Void) {
            return Err(Error::invalid_spec("parameter", &spec.name, "parameters cannot be void"));
        }
        if let Some(modifier) = spec.modifiers.iter().find(|m| **m != Modifier::Final) {
            return Err(Error::invalid_spec(
                "parameter",
                &spec.name,
                format!("modifier '{modifier}' is not allowed on parameters"),
            ));
        }
        Ok(spec)
    }
}
