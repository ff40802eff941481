use std::collections::BTreeSet;

use jx_model::{IntoTypeName, TypeName};

use super::is_valid_name;
use crate::{
    AnnotationSpec, Arg, CodeBlock, CodeBlockBuilder, CodeWriter, Error, Modifier, ParameterSpec,
    Result, TypeKind, TypeVariable,
};

const CONSTRUCTOR: &str = "<init>";

/// A method or constructor declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    name: String,
    javadoc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: BTreeSet<Modifier>,
    type_variables: Vec<TypeVariable>,
    /// `None` for constructors
    return_type: Option<TypeName>,
    parameters: Vec<ParameterSpec>,
    varargs: bool,
    exceptions: Vec<TypeName>,
    code: CodeBlock,
}

impl MethodSpec {
    /// Start a method returning `void` unless [`returns`](MethodSpecBuilder::returns) is called.
    pub fn method_builder(name: impl Into<String>) -> MethodSpecBuilder {
        MethodSpecBuilder::new(name.into(), Some(TypeName::Void))
    }

    pub fn constructor_builder() -> MethodSpecBuilder {
        MethodSpecBuilder::new(CONSTRUCTOR.to_string(), None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }

    pub fn return_type(&self) -> Option<&TypeName> {
        self.return_type.as_ref()
    }

    pub fn type_variables(&self) -> &[TypeVariable] {
        &self.type_variables
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    pub fn code(&self) -> &CodeBlock {
        &self.code
    }

    fn has_body(&self, kind: TypeKind) -> bool {
        if self.modifiers.contains(&Modifier::Abstract) || self.modifiers.contains(&Modifier::Native)
        {
            return false;
        }
        kind != TypeKind::Interface
            || [Modifier::Default, Modifier::Static, Modifier::Private]
                .iter()
                .any(|m| self.modifiers.contains(m))
    }

    pub(crate) fn render(
        &self,
        w: &mut CodeWriter<'_>,
        enclosing: &str,
        kind: TypeKind,
    ) -> Result<()> {
        w.emit_javadoc(&self.javadoc)?;
        w.emit_annotations(&self.annotations, false)?;
        let implicit: &[Modifier] = match kind {
            TypeKind::Interface => &[Modifier::Public, Modifier::Abstract],
            _ => &[],
        };
        w.emit_modifiers(&self.modifiers, implicit);
        if !self.type_variables.is_empty() {
            w.emit_type_variables(&self.type_variables)?.emit(" ");
        }

        match &self.return_type {
            Some(ty) => {
                w.emit_type(ty)?.emit(" ").emit(&self.name);
            }
            None => {
                w.emit(enclosing);
            }
        }

        w.emit("(");
        let last = self.parameters.len().saturating_sub(1);
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                w.emit(", ");
            }
            parameter.render(w, self.varargs && i == last)?;
        }
        w.emit(")");

        for (i, exception) in self.exceptions.iter().enumerate() {
            w.emit(if i == 0 { " throws " } else { ", " });
            w.emit_type(exception)?;
        }

        if !self.has_body(kind) {
            w.emit(";\n");
            return Ok(());
        }

        w.emit(" {\n").indent();
        w.emit_code(&self.code)?;
        w.ensure_line_start().unindent().emit("}\n");
        Ok(())
    }
}

/// Builder for [`MethodSpec`]. Template and type errors are reported by
/// [`build`](Self::build).
#[derive(Debug)]
pub struct MethodSpecBuilder {
    spec: MethodSpec,
    javadoc: CodeBlockBuilder,
    code: CodeBlockBuilder,
    error: Option<Box<Error>>,
}

impl MethodSpecBuilder {
    fn new(name: String, return_type: Option<TypeName>) -> Self {
        Self {
            spec: MethodSpec {
                name,
                javadoc: CodeBlock::default(),
                annotations: Vec::new(),
                modifiers: BTreeSet::new(),
                type_variables: Vec::new(),
                return_type,
                parameters: Vec::new(),
                varargs: false,
                exceptions: Vec::new(),
                code: CodeBlock::default(),
            },
            javadoc: CodeBlock::builder(),
            code: CodeBlock::builder(),
            error: None,
        }
    }

    fn record<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.error.get_or_insert(err);
                None
            }
        }
    }

    pub fn add_javadoc(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.javadoc = self.javadoc.add(format, args);
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.spec.modifiers.extend(modifiers);
        self
    }

    pub fn add_type_variable(mut self, variable: TypeVariable) -> Self {
        self.spec.type_variables.push(variable);
        self
    }

    /// Set the return type. Ignored with an error for constructors.
    pub fn returns(mut self, ty: impl IntoTypeName) -> Self {
        if self.spec.is_constructor() {
            let err = Error::invalid_spec("constructor", CONSTRUCTOR, "constructors have no return type");
            self.error.get_or_insert(err);
            return self;
        }
        let ty = ty.into_type_name().map_err(Box::<Error>::from);
        if let Some(ty) = self.record(ty) {
            self.spec.return_type = Some(ty);
        }
        self
    }

    pub fn add_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.spec.parameters.push(parameter);
        self
    }

    /// Shorthand for a plain parameter.
    pub fn add_param(mut self, ty: impl IntoTypeName, name: impl Into<String>) -> Self {
        if let Some(parameter) = self.record(ParameterSpec::of(ty, name)) {
            self.spec.parameters.push(parameter);
        }
        self
    }

    /// Render the last parameter, which must be an array, as `T...`.
    pub fn varargs(mut self, varargs: bool) -> Self {
        self.spec.varargs = varargs;
        self
    }

    pub fn add_exception(mut self, ty: impl IntoTypeName) -> Self {
        let ty = ty.into_type_name().map_err(Box::<Error>::from);
        if let Some(ty) = self.record(ty) {
            self.spec.exceptions.push(ty);
        }
        self
    }

    pub fn add_code(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.code = self.code.add(format, args);
        self
    }

    pub fn add_code_block(mut self, code: CodeBlock) -> Self {
        self.code = self.code.add_code(code);
        self
    }

    pub fn add_statement(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.code = self.code.add_statement(format, args);
        self
    }

    pub fn add_comment(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.code = self.code.add_comment(format, args);
        self
    }

    pub fn begin_control_flow(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.code = self.code.begin_control_flow(format, args);
        self
    }

    pub fn next_control_flow(mut self, format: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.code = self.code.next_control_flow(format, args);
        self
    }

    pub fn end_control_flow(mut self) -> Self {
        self.code = self.code.end_control_flow();
        self
    }

    pub fn build(self) -> Result<MethodSpec> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut spec = self.spec;
        spec.javadoc = self.javadoc.build()?;
        spec.code = self.code.build()?;

        let kind = if spec.is_constructor() { "constructor" } else { "method" };
        let fail = |message: &str| Err(Error::invalid_spec(kind, &spec.name, message));

        if !spec.is_constructor() && !is_valid_name(&spec.name) {
            return fail("not a valid identifier");
        }
        if spec.modifiers.iter().filter(|m| m.is_access()).count() > 1 {
            return fail("at most one access modifier is allowed");
        }
        if spec.modifiers.contains(&Modifier::Abstract) && !spec.code.is_empty() {
            return fail("abstract methods cannot have a body");
        }
        if spec.varargs
            && !matches!(spec.parameters.last().map(ParameterSpec::ty), Some(TypeName::Array(_)))
        {
            return fail("the last parameter of a varargs method must be an array");
        }
        let mut names = BTreeSet::new();
        if let Some(duplicate) = spec.parameters.iter().find(|p| !names.insert(p.name())) {
            let message = format!("duplicate parameter '{}'", duplicate.name());
            return Err(Error::invalid_spec(kind, &spec.name, message));
        }
        Ok(spec)
    }
}
