use std::{fs, sync::Arc, thread};

use jx_codegen::{
    EmitConfig, Error, FieldSpec, Indent, JavaFile, MethodSpec, Modifier, TypeSpec, args,
};
use jx_model::{ClassName, TypeName};

fn two_foos() -> TypeSpec {
    TypeSpec::class_builder("Holder")
        .add_field(FieldSpec::builder("a.Foo", "first").build().unwrap())
        .add_field(FieldSpec::builder("b.Foo", "second").build().unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_conflicting_simple_names_import_only_the_first() {
    let source = JavaFile::builder("com.example", two_foos())
        .build()
        .unwrap()
        .to_source()
        .unwrap();

    let imports: Vec<_> = source.lines().filter(|l| l.starts_with("import ")).collect();
    assert_eq!(imports, vec!["import a.Foo;"]);
    assert!(source.contains("    Foo first;\n"));
    assert!(source.contains("    b.Foo second;\n"));
}

#[test]
fn test_default_package_class_is_not_shadowed_by_import() {
    let ty = TypeSpec::class_builder("Holder")
        .add_field(FieldSpec::builder("Foo", "local").build().unwrap())
        .add_field(FieldSpec::builder("a.Foo", "foreign").build().unwrap())
        .build()
        .unwrap();
    let source = JavaFile::builder("", ty)
        .build()
        .unwrap()
        .to_source()
        .unwrap();

    assert!(!source.contains("import"));
    assert!(source.contains("    Foo local;\n"));
    assert!(source.contains("    a.Foo foreign;\n"));
}

#[test]
fn test_declared_type_wins_over_imports() {
    let ty = TypeSpec::class_builder("List")
        .add_field(FieldSpec::builder("java.util.List<java.lang.String>", "delegate").build().unwrap())
        .build()
        .unwrap();
    let source = JavaFile::builder("com.example", ty)
        .build()
        .unwrap()
        .to_source()
        .unwrap();

    assert!(!source.contains("import"));
    assert!(source.contains("java.util.List<String> delegate;"));
}

#[test]
fn test_assembled_types_render_through_symbols() {
    let element = TypeName::of::<String>();
    let list = element.assemble("java.util.List").unwrap();
    let live = list.assemble("androidx.lifecycle.LiveData").unwrap();

    let ty = TypeSpec::class_builder("Model")
        .add_field(
            FieldSpec::builder(&live, "names")
                .add_modifiers([Modifier::Private, Modifier::Final])
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let source = JavaFile::builder("com.example", ty)
        .build()
        .unwrap()
        .to_source()
        .unwrap();

    assert_eq!(
        source,
        "package com.example;\n\n\
         import androidx.lifecycle.LiveData;\n\
         import java.util.List;\n\n\
         class Model {\n    private final LiveData<List<String>> names;\n}\n"
    );
}

#[test]
fn test_nested_types_are_declared_in_scope() {
    let builder = TypeSpec::class_builder("Builder").build().unwrap();
    let ty = TypeSpec::class_builder("Request")
        .add_field(FieldSpec::builder("okhttp3.Request.Builder", "raw").build().unwrap())
        .add_method(
            MethodSpec::method_builder("builder")
                .add_modifiers([Modifier::Static])
                .returns("com.example.Request.Builder")
                .add_statement("return new $T()", args!["com.example.Request.Builder"])
                .build()
                .unwrap(),
        )
        .add_type(builder)
        .build()
        .unwrap();

    let source = JavaFile::builder("com.example", ty)
        .build()
        .unwrap()
        .to_source()
        .unwrap();
    assert!(!source.contains("import"));
    assert!(source.contains("okhttp3.Request.Builder raw;"));
    assert!(source.contains("static Builder builder() {\n        return new Builder();\n"));
}

#[test]
fn test_write_to_dir_creates_package_directories() {
    let dir = tempfile::tempdir().unwrap();
    let file = JavaFile::builder("com.example.model", two_foos())
        .build()
        .unwrap();

    let path = file.write_to_dir(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("com/example/model/Holder.java"));
    assert_eq!(fs::read_to_string(&path).unwrap(), file.to_source().unwrap());
}

#[test]
fn test_write_to_dir_reports_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("com");
    fs::write(&blocker, "not a directory").unwrap();

    let file = JavaFile::builder("com.example", two_foos()).build().unwrap();
    let err = file.write_to_dir(dir.path()).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_config_from_toml() {
    let config: EmitConfig = r#"
        indent = { spaces = 2 }
        file_comment = "Generated by jx."
    "#
    .parse()
    .unwrap();
    assert_eq!(config.indent, Indent::Spaces(2));

    let source = JavaFile::builder("p", two_foos())
        .config(config)
        .build()
        .unwrap()
        .to_source()
        .unwrap();
    assert!(source.starts_with("// Generated by jx.\n\npackage p;\n"));
    assert!(source.contains("\n  Foo first;\n"));
}

#[test]
fn test_type_errors_abort_the_whole_build() {
    let err = FieldSpec::builder("a.Foo<b.Bar", "x").build().unwrap_err();
    assert!(matches!(*err, Error::Type(ref inner) if inner.is_malformed()));
}

#[test]
fn test_files_render_concurrently() {
    let shared = Arc::new(TypeName::parse("java.util.Map<a.Foo, b.Foo>").unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ty = Arc::clone(&shared);
            thread::spawn(move || {
                let spec = TypeSpec::class_builder(&format!("Holder{i}"))
                    .add_field(FieldSpec::builder(&*ty, "map").build().unwrap())
                    .build()
                    .unwrap();
                JavaFile::builder("p", spec).build().unwrap().to_source().unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let source = handle.join().unwrap();
        assert!(source.contains(&format!("class Holder{i} {{\n    Map<Foo, b.Foo> map;\n}}\n")));
        assert!(source.contains("import a.Foo;\nimport java.util.Map;\n"));
    }
}

#[test]
fn test_class_name_matches_written_file() {
    let file = JavaFile::builder("a.b", two_foos()).build().unwrap();
    assert_eq!(file.class_name(), ClassName::parse("a.b.Holder"));
}
