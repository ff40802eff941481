//! Class, interface and enum declarations.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use jx_model::{ClassName, IntoTypeName, TypeName};

use super::is_valid_name;
use crate::{
    AnnotationSpec, Arg, CodeBlock, CodeBlockBuilder, CodeWriter, Error, FieldSpec, MethodSpec,
    Modifier, Result, SymbolTable, TypeVariable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

impl TypeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

/// A type declaration, possibly holding nested types.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    kind: TypeKind,
    name: String,
    javadoc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: BTreeSet<Modifier>,
    type_variables: Vec<TypeVariable>,
    superclass: Option<TypeName>,
    superinterfaces: Vec<TypeName>,
    /// Constant name -> constructor arguments
    enum_constants: IndexMap<String, Option<CodeBlock>>,
    fields: Vec<FieldSpec>,
    methods: Vec<MethodSpec>,
    types: Vec<TypeSpec>,
}

impl TypeSpec {
    /// Start a class. The name may declare type variables: `"HelloWorld<K, V>"`.
    pub fn class_builder(name: &str) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Class, name)
    }

    pub fn interface_builder(name: &str) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Interface, name)
    }

    pub fn enum_builder(name: &str) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Enum, name)
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_variables(&self) -> &[TypeVariable] {
        &self.type_variables
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    pub fn types(&self) -> &[TypeSpec] {
        &self.types
    }

    /// Bind the names this declaration introduces (itself, nested types
    /// and type variables) so that foreign types sharing them get qualified.
    pub(crate) fn reserve_names(&self, class: &ClassName, symbols: &mut SymbolTable) -> Result<()> {
        symbols.reserve(class)?;
        let variables = self
            .type_variables
            .iter()
            .chain(self.methods.iter().flat_map(MethodSpec::type_variables));
        for variable in variables {
            symbols.reserve(&ClassName::variable(variable.name()))?;
        }
        for nested in &self.types {
            nested.reserve_names(&class.nested(&nested.name), symbols)?;
        }
        Ok(())
    }

    pub(crate) fn render(&self, w: &mut CodeWriter<'_>, implicit: &[Modifier]) -> Result<()> {
        w.emit_javadoc(&self.javadoc)?;
        w.emit_annotations(&self.annotations, false)?;
        w.emit_modifiers(&self.modifiers, implicit);
        w.emit(self.kind.keyword()).emit(" ").emit(&self.name);
        w.emit_type_variables(&self.type_variables)?;

        if let Some(superclass) = &self.superclass {
            w.emit(" extends ");
            w.emit_type(superclass)?;
        }
        let keyword = match self.kind {
            TypeKind::Interface => " extends ",
            _ => " implements ",
        };
        for (i, interface) in self.superinterfaces.iter().enumerate() {
            w.emit(if i == 0 { keyword } else { ", " });
            w.emit_type(interface)?;
        }
        w.emit(" {\n").indent();

        let mut first = true;

        if !self.enum_constants.is_empty() {
            separate(w, &mut first);
            let last = self.enum_constants.len() - 1;
            for (i, (name, arguments)) in self.enum_constants.iter().enumerate() {
                w.emit(name);
                if let Some(arguments) = arguments {
                    w.emit("(");
                    w.emit_code(arguments)?;
                    w.emit(")");
                }
                if i < last {
                    w.emit(",\n");
                } else if self.fields.is_empty() && self.methods.is_empty() && self.types.is_empty()
                {
                    w.emit("\n");
                } else {
                    w.emit(";\n");
                }
            }
        }

        let field_implicit: &[Modifier] = match self.kind {
            TypeKind::Interface => &[Modifier::Public, Modifier::Static, Modifier::Final],
            _ => &[],
        };
        let (statics, instance): (Vec<_>, Vec<_>) = self
            .fields
            .iter()
            .partition(|f| f.modifiers().contains(&Modifier::Static));
        for field in statics.into_iter().chain(instance) {
            separate(w, &mut first);
            field.render(w, field_implicit)?;
        }

        let (constructors, methods): (Vec<_>, Vec<_>) =
            self.methods.iter().partition(|m| m.is_constructor());
        for method in constructors.into_iter().chain(methods) {
            separate(w, &mut first);
            method.render(w, &self.name, self.kind)?;
        }

        let nested_implicit: &[Modifier] = match self.kind {
            TypeKind::Interface => &[Modifier::Public, Modifier::Static],
            _ => &[],
        };
        for nested in &self.types {
            separate(w, &mut first);
            nested.render(w, nested_implicit)?;
        }

        w.ensure_line_start().unindent().emit("}\n");
        Ok(())
    }
}

/// Put a blank line before every member but the first.
fn separate(w: &mut CodeWriter<'_>, first: &mut bool) {
    if !*first {
        w.blank();
    }
    *first = false;
}

/// Builder for [`TypeSpec`]. Errors are reported by [`build`](Self::build).
#[derive(Debug)]
pub struct TypeSpecBuilder {
    spec: TypeSpec,
    javadoc: CodeBlockBuilder,
    error: Option<Box<Error>>,
}

impl TypeSpecBuilder {
    fn new(kind: TypeKind, name: &str) -> Self {
        let mut builder = Self {
            spec: TypeSpec {
                kind,
                name: name.trim().to_string(),
                javadoc: CodeBlock::default(),
                annotations: Vec::new(),
                modifiers: BTreeSet::new(),
                type_variables: Vec::new(),
                superclass: None,
                superinterfaces: Vec::new(),
                enum_constants: IndexMap::new(),
                fields: Vec::new(),
                methods: Vec::new(),
                types: Vec::new(),
            },
            javadoc: CodeBlock::builder(),
            error: None,
        };
        if name.contains('<') {
            builder.split_type_variables(name);
        }
        builder
    }

    /// Turn `Name<A, B>` into the name `Name` and type variables `A`, `B`.
    fn split_type_variables(&mut self, declared: &str) {
        let parsed = match TypeName::parse(declared) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.error.get_or_insert(err.into());
                return;
            }
        };
        let TypeName::Parameterized(parameterized) = parsed else {
            return;
        };
        self.spec.name = parameterized.raw().simple_name().to_string();
        for argument in parameterized.arguments() {
            match argument {
                TypeName::Class(variable) if variable.is_unqualified() => {
                    self.spec.type_variables.push(TypeVariable::new(variable.simple_name()));
                }
                other => {
                    let err = Error::invalid_spec(
                        "type",
                        declared,
                        format!("'{other}' is not a type variable name"),
                    );
                    self.error.get_or_insert(err);
                }
            }
        }
    }

    fn record(&mut self, ty: impl IntoTypeName) -> Option<TypeName> {
        match ty.into_type_name() {
            Ok(ty) => Some(ty),
            Err(err) => {
                self.error.get_or_insert(err.into());
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

    pub fn superclass(mut self, ty: impl IntoTypeName) -> Self {
        if let Some(ty) = self.record(ty) {
            self.spec.superclass = Some(ty);
        }
        self
    }

    pub fn add_superinterface(mut self, ty: impl IntoTypeName) -> Self {
        if let Some(ty) = self.record(ty) {
            self.spec.superinterfaces.push(ty);
        }
        self
    }

    pub fn add_enum_constant(mut self, name: impl Into<String>) -> Self {
        self.spec.enum_constants.insert(name.into(), None);
        self
    }

    /// Add a constant with constructor arguments, e.g. `RED($S)`.
    pub fn add_enum_constant_with(
        mut self,
        name: impl Into<String>,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Self {
        match CodeBlock::of(format, args) {
            Ok(arguments) => {
                self.spec.enum_constants.insert(name.into(), Some(arguments));
            }
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    pub fn add_field(mut self, field: FieldSpec) -> Self {
        self.spec.fields.push(field);
        self
    }

    pub fn add_method(mut self, method: MethodSpec) -> Self {
        self.spec.methods.push(method);
        self
    }

    pub fn add_type(mut self, nested: TypeSpec) -> Self {
        self.spec.types.push(nested);
        self
    }

    pub fn build(self) -> Result<TypeSpec> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut spec = self.spec;
        spec.javadoc = self.javadoc.build()?;

        let fail = |message: String| Err(Error::invalid_spec("type", &spec.name, message));

        if !is_valid_name(&spec.name) {
            return fail("not a valid identifier".into());
        }
        if spec.modifiers.iter().filter(|m| m.is_access()).count() > 1 {
            return fail("at most one access modifier is allowed".into());
        }
        match spec.kind {
            TypeKind::Enum if spec.enum_constants.is_empty() => {
                return fail("enums need at least one constant".into());
            }
            TypeKind::Class | TypeKind::Interface if !spec.enum_constants.is_empty() => {
                return fail("only enums can declare constants".into());
            }
            TypeKind::Enum | TypeKind::Interface if spec.superclass.is_some() => {
                return fail(format!("{}s cannot extend a class", spec.kind.keyword()));
            }
            _ => {}
        }
        if let Some(invalid) = spec.enum_constants.keys().find(|name| !is_valid_name(name)) {
            return fail(format!("invalid enum constant '{invalid}'"));
        }
        if spec.kind == TypeKind::Interface && spec.methods.iter().any(MethodSpec::is_constructor) {
            return fail("interfaces cannot declare constructors".into());
        }
        if spec.kind == TypeKind::Class && !spec.modifiers.contains(&Modifier::Abstract) {
            let abstract_method = spec
                .methods
                .iter()
                .find(|m| m.modifiers().contains(&Modifier::Abstract));
            if let Some(method) = abstract_method {
                return fail(format!(
                    "abstract method '{}' in a non-abstract class",
                    method.name()
                ));
            }
        }
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmitConfig, args};

    fn render(spec: &TypeSpec) -> String {
        let config = EmitConfig::default();
        let mut symbols = SymbolTable::new("com.example");
        spec.reserve_names(&ClassName::new("com.example", spec.name()), &mut symbols)
            .unwrap();
        let mut writer = CodeWriter::new(&mut symbols, &config);
        spec.render(&mut writer, &[]).unwrap();
        writer.finish()
    }

    #[test]
    fn test_empty_class() {
        let spec = TypeSpec::class_builder("Empty").build().unwrap();
        assert_eq!(render(&spec), "class Empty {\n}\n");
    }

    #[test]
    fn test_type_variables_from_name() {
        let spec = TypeSpec::class_builder("HelloWorld<Text, View>")
            .add_modifiers([Modifier::Public, Modifier::Final])
            .build()
            .unwrap();
        assert_eq!(spec.name(), "HelloWorld");
        assert_eq!(spec.type_variables().len(), 2);
        assert_eq!(render(&spec), "public final class HelloWorld<Text, View> {\n}\n");
    }

    #[test]
    fn test_qualified_type_variable_is_rejected() {
        let err = TypeSpec::class_builder("Box<java.lang.String>").build().unwrap_err();
        assert!(matches!(*err, Error::InvalidSpec { .. }));
        assert!(TypeSpec::class_builder("Box<T").build().is_err());
    }

    #[test]
    fn test_members_are_separated() {
        let spec = TypeSpec::class_builder("Counter")
            .superclass("com.base.Component")
            .add_superinterface("java.lang.Comparable<com.example.Counter>")
            .add_field(
                FieldSpec::builder("int", "count")
                    .add_modifiers([Modifier::Private])
                    .build()
                    .unwrap(),
            )
            .add_field(
                FieldSpec::builder("int", "MAX")
                    .add_modifiers([Modifier::Static, Modifier::Final])
                    .initializer("$L", args![10])
                    .build()
                    .unwrap(),
            )
            .add_method(
                MethodSpec::method_builder("compareTo")
                    .add_modifiers([Modifier::Public])
                    .returns("int")
                    .add_param("com.example.Counter", "other")
                    .add_statement("return count - other.count", args![])
                    .build()
                    .unwrap(),
            )
            .add_method(MethodSpec::constructor_builder().build().unwrap())
            .build()
            .unwrap();
        assert_eq!(
            render(&spec),
            "class Counter extends Component implements Comparable<Counter> {\n    \
             static final int MAX = 10;\n\n    \
             private int count;\n\n    \
             Counter() {\n    }\n\n    \
             public int compareTo(Counter other) {\n        return count - other.count;\n    }\n\
             }\n"
        );
    }

    #[test]
    fn test_interface() {
        let spec = TypeSpec::interface_builder("Shape")
            .add_modifiers([Modifier::Public])
            .add_superinterface("java.io.Serializable")
            .add_field(
                FieldSpec::builder("int", "SIDES")
                    .add_modifiers([Modifier::Public, Modifier::Static, Modifier::Final])
                    .initializer("$L", args![0])
                    .build()
                    .unwrap(),
            )
            .add_method(
                MethodSpec::method_builder("area")
                    .add_modifiers([Modifier::Public, Modifier::Abstract])
                    .returns("double")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(
            render(&spec),
            "public interface Shape extends Serializable {\n    int SIDES = 0;\n\n    double area();\n}\n"
        );
    }

    #[test]
    fn test_enum_constants() {
        let spec = TypeSpec::enum_builder("Color")
            .add_enum_constant_with("RED", "$S", args!["#f00"])
            .add_enum_constant_with("GREEN", "$S", args!["#0f0"])
            .add_field(
                FieldSpec::builder("java.lang.String", "hex")
                    .add_modifiers([Modifier::Private, Modifier::Final])
                    .build()
                    .unwrap(),
            )
            .add_method(
                MethodSpec::constructor_builder()
                    .add_param("java.lang.String", "hex")
                    .add_statement("this.hex = hex", args![])
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(
            render(&spec),
            "enum Color {\n    RED(\"#f00\"),\n    GREEN(\"#0f0\");\n\n    \
             private final String hex;\n\n    \
             Color(String hex) {\n        this.hex = hex;\n    }\n}\n"
        );

        let plain = TypeSpec::enum_builder("Level")
            .add_enum_constant("LOW")
            .add_enum_constant("HIGH")
            .build()
            .unwrap();
        assert_eq!(render(&plain), "enum Level {\n    LOW,\n    HIGH\n}\n");
    }

    #[test]
    fn test_nested_type_shadows_foreign_name() {
        let spec = TypeSpec::class_builder("Outer")
            .add_field(FieldSpec::builder("other.Entry", "entry").build().unwrap())
            .add_type(TypeSpec::class_builder("Entry").build().unwrap())
            .build()
            .unwrap();
        assert_eq!(
            render(&spec),
            "class Outer {\n    other.Entry entry;\n\n    class Entry {\n    }\n}\n"
        );
    }

    #[test]
    fn test_build_errors() {
        assert!(TypeSpec::enum_builder("Empty").build().is_err());
        assert!(
            TypeSpec::interface_builder("I")
                .superclass("a.B")
                .build()
                .is_err()
        );
        assert!(
            TypeSpec::class_builder("C")
                .add_method(
                    MethodSpec::method_builder("run")
                        .add_modifiers([Modifier::Abstract])
                        .build()
                        .unwrap()
                )
                .build()
                .is_err()
        );
        assert!(TypeSpec::class_builder("C").add_enum_constant("A").build().is_err());
        assert!(TypeSpec::class_builder("C").superclass("a.B<").build().is_err());
    }
}
