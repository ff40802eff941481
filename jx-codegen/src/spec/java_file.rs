//! A compilation unit: package, imports and one top-level type.

use std::{
    collections::BTreeSet,
    fs,
    io,
    path::{Path, PathBuf},
};

use jx_model::ClassName;

use super::is_valid_name;
use crate::{CodeWriter, EmitConfig, Error, Indent, Result, SymbolTable, TypeSpec};

/// One `.java` file.
///
/// Rendering runs a single pass over the declaration with a fresh
/// [`SymbolTable`]; the import block is computed from the names claimed
/// during that pass and written above the declaration.
///
/// # Example
///
/// ```
/// use jx_codegen::{FieldSpec, JavaFile, TypeSpec};
///
/// let ty = TypeSpec::class_builder("Pair")
///     .add_field(FieldSpec::builder("a.Foo", "first").build().unwrap())
///     .add_field(FieldSpec::builder("b.Foo", "second").build().unwrap())
///     .build()
///     .unwrap();
/// let file = JavaFile::builder("com.example", ty).build().unwrap();
///
/// assert_eq!(
///     file.to_source().unwrap(),
///     "package com.example;\n\nimport a.Foo;\n\nclass Pair {\n    Foo first;\n\n    b.Foo second;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JavaFile {
    package: String,
    type_spec: TypeSpec,
    file_comment: Option<String>,
    static_imports: BTreeSet<String>,
    config: EmitConfig,
}

impl JavaFile {
    pub fn builder(package: impl Into<String>, type_spec: TypeSpec) -> JavaFileBuilder {
        JavaFileBuilder {
            file: Self {
                package: package.into(),
                type_spec,
                file_comment: None,
                static_imports: BTreeSet::new(),
                config: EmitConfig::default(),
            },
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn type_spec(&self) -> &TypeSpec {
        &self.type_spec
    }

    /// The top-level type's fully qualified name.
    pub fn class_name(&self) -> ClassName {
        ClassName::new(&self.package, self.type_spec.name())
    }

    /// Render the whole file. Nothing is returned if any type fails to resolve.
    pub fn to_source(&self) -> Result<String> {
        let config = &self.config;
        let mut symbols =
            SymbolTable::new(&self.package).skip_java_lang_imports(config.skip_java_lang_imports);
        self.type_spec.reserve_names(&self.class_name(), &mut symbols)?;

        let mut body = CodeWriter::new(&mut symbols, config);
        self.type_spec.render(&mut body, &[])?;
        let body = body.finish();

        let imports = symbols.close();

        let mut header = CodeWriter::new(&mut symbols, config);
        if let Some(comment) = self.file_comment.as_ref().or(config.file_comment.as_ref()) {
            header.emit_line_comment(comment).blank();
        }
        if !self.package.is_empty() {
            header.emit("package ").emit(&self.package).emit(";\n").blank();
        }
        if !self.static_imports.is_empty() {
            for member in &self.static_imports {
                header.emit("import static ").emit(member).emit(";\n");
            }
            header.blank();
        }
        if !imports.is_empty() {
            for class in &imports {
                header.emit("import ").emit(&class.canonical_name()).emit(";\n");
            }
            header.blank();
        }

        let mut source = header.finish();
        source.push_str(&body);
        Ok(source)
    }

    /// Render into a byte sink.
    pub fn write_to(&self, out: &mut impl io::Write) -> Result<()> {
        let source = self.to_source()?;
        out.write_all(source.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| Box::new(Error::Write { source }))
    }

    /// Write `<dir>/<package path>/<Type>.java`, creating package directories.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let source = self.to_source()?;

        let mut path = dir.as_ref().to_path_buf();
        path.extend(self.package.split('.').filter(|segment| !segment.is_empty()));
        fs::create_dir_all(&path).map_err(|e| Error::io(&path, e))?;

        path.push(format!("{}.java", self.type_spec.name()));
        fs::write(&path, source).map_err(|e| Error::io(&path, e))?;
        Ok(path)
    }
}

#[derive(Debug)]
pub struct JavaFileBuilder {
    file: JavaFile,
}

impl JavaFileBuilder {
    /// A comment placed above the package line. Overrides
    /// [`EmitConfig::file_comment`].
    pub fn file_comment(mut self, comment: impl Into<String>) -> Self {
        self.file.file_comment = Some(comment.into());
        self
    }

    /// Add `import static <class>.<member>;`. Use `*` to import every member.
    pub fn add_static_import(mut self, class: &ClassName, member: impl Into<String>) -> Self {
        let member = member.into();
        self.file
            .static_imports
            .insert(format!("{}.{}", class.canonical_name(), member));
        self
    }

    pub fn config(mut self, config: EmitConfig) -> Self {
        self.file.config = config;
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.file.config.indent = indent;
        self
    }

    pub fn skip_java_lang_imports(mut self, skip: bool) -> Self {
        self.file.config.skip_java_lang_imports = skip;
        self
    }

    pub fn build(self) -> Result<JavaFile> {
        let file = self.file;
        if !file.package.is_empty() && !file.package.split('.').all(is_valid_name) {
            return Err(Error::invalid_spec(
                "package",
                &file.package,
                "not a valid package name",
            ));
        }
        Ok(file)
    }
}
