//! Snapshot tests for generated Java files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use jx_codegen::{
    AnnotationSpec, FieldSpec, JavaFile, MethodSpec, Modifier, TypeSpec, TypeVariable, args,
};
use jx_model::{ClassName, TypeName};

fn system() -> ClassName {
    ClassName::new("java.lang", "System")
}

#[test]
fn test_hello_world() {
    let main = MethodSpec::method_builder("main")
        .add_modifiers([Modifier::Public, Modifier::Static])
        .returns(TypeName::Void)
        .add_param(TypeName::array(TypeName::of::<String>()), "args")
        .add_statement("$T.out.println($S)", args![system(), "Hello, JavaPoet!"])
        .add_statement("String<T> name", args![])
        .build()
        .unwrap();

    let get_obs = MethodSpec::method_builder("getObs")
        .add_modifiers([Modifier::Public])
        .returns(TypeName::Void)
        .add_param("com.Observable<T>", "args")
        .add_statement("$T.out.println($S)", args![system(), "Hello, JavaPoet!"])
        .add_statement("String<T> name", args![])
        .build()
        .unwrap();

    let hello_world = TypeSpec::class_builder("HelloWorld<Text, View>")
        .add_modifiers([Modifier::Public, Modifier::Final])
        .add_method(main)
        .add_method(get_obs)
        .build()
        .unwrap();

    let file = JavaFile::builder("com.example.helloworld", hello_world)
        .build()
        .unwrap();
    insta::assert_snapshot!("hello_world", file.to_source().unwrap());
}

#[test]
fn test_generic_repository_interface() {
    let find_by_id = MethodSpec::method_builder("findById")
        .add_modifiers([Modifier::Public, Modifier::Abstract])
        .returns("java.util.Optional<E>")
        .add_param(TypeName::variable("ID"), "id")
        .build()
        .unwrap();

    let find_all = MethodSpec::method_builder("findAll")
        .add_modifiers([Modifier::Public, Modifier::Abstract])
        .returns("java.util.List<E>")
        .build()
        .unwrap();

    let save_all = MethodSpec::method_builder("saveAll")
        .add_modifiers([Modifier::Abstract])
        .add_type_variable(TypeVariable::new("S").bound(TypeName::variable("E")))
        .add_param("java.lang.Iterable<? extends S>", "entities")
        .build()
        .unwrap();

    let count = MethodSpec::method_builder("count")
        .add_modifiers([Modifier::Default])
        .returns("long")
        .add_statement("return findAll().size()", args![])
        .build()
        .unwrap();

    let repository = TypeSpec::interface_builder("Repository")
        .add_javadoc("Storage for entities of type {@code E}.\n", args![])
        .add_modifiers([Modifier::Public])
        .add_type_variable(TypeVariable::new("E"))
        .add_type_variable(
            TypeVariable::new("ID")
                .parse_bound("java.io.Serializable")
                .unwrap(),
        )
        .add_method(find_by_id)
        .add_method(find_all)
        .add_method(save_all)
        .add_method(count)
        .build()
        .unwrap();

    let file = JavaFile::builder("com.example.data", repository)
        .build()
        .unwrap();
    insta::assert_snapshot!("generic_repository_interface", file.to_source().unwrap());
}

#[test]
fn test_annotated_enum() {
    let suppress = AnnotationSpec::builder(ClassName::new("java.lang", "SuppressWarnings"))
        .add_member("value", "$S", args!["unused"])
        .build()
        .unwrap();

    let double_field = |name: &str| {
        FieldSpec::builder("double", name)
            .add_modifiers([Modifier::Private, Modifier::Final])
            .build()
            .unwrap()
    };

    let constructor = MethodSpec::constructor_builder()
        .add_param("double", "mass")
        .add_param("double", "radius")
        .add_statement("this.mass = mass", args![])
        .add_statement("this.radius = radius", args![])
        .build()
        .unwrap();

    let gravity = MethodSpec::method_builder("surfaceGravity")
        .add_modifiers([Modifier::Public])
        .returns("double")
        .add_statement("return G * mass / (radius * radius)", args![])
        .build()
        .unwrap();

    let planet = TypeSpec::enum_builder("Planet")
        .add_annotation(suppress)
        .add_modifiers([Modifier::Public])
        .add_enum_constant_with("MERCURY", "$L, $L", args!["3.303e+23", "2.4397e6"])
        .add_enum_constant_with("EARTH", "$L, $L", args!["5.976e+24", "6.37814e6"])
        .add_field(double_field("mass"))
        .add_field(double_field("radius"))
        .add_field(
            FieldSpec::builder("double", "G")
                .add_modifiers([Modifier::Public, Modifier::Static, Modifier::Final])
                .initializer("$L", args!["6.67300E-11"])
                .build()
                .unwrap(),
        )
        .add_method(gravity)
        .add_method(constructor)
        .build()
        .unwrap();

    let file = JavaFile::builder("com.example.space", planet)
        .build()
        .unwrap();
    insta::assert_snapshot!("annotated_enum", file.to_source().unwrap());
}

#[test]
fn test_long_lines_wrap() {
    let describe = MethodSpec::method_builder("describe")
        .add_modifiers([Modifier::Public, Modifier::Static])
        .returns("java.lang.String")
        .add_param("java.lang.String", "firstName")
        .add_param("java.lang.String", "lastName")
        .add_param("int", "age")
        .add_param("java.lang.String", "city")
        .add_param("java.lang.String", "country")
        .add_statement(
            "return firstName + $S + lastName + $S + age + $S + city + $S + country + $S",
            args![" ", " (", ") lives in ", ", ", "."],
        )
        .build()
        .unwrap();

    let people = TypeSpec::class_builder("People")
        .add_modifiers([Modifier::Final])
        .add_method(describe)
        .build()
        .unwrap();

    let file = JavaFile::builder("com.example", people)
        .file_comment("Generated by jx. Do not edit.")
        .build()
        .unwrap();
    insta::assert_snapshot!("long_lines_wrap", file.to_source().unwrap());
}
